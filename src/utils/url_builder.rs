/// Build an absolute URL from a base URL and a path
pub fn absolute_url(base_url: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    let base = base_url.trim_end_matches('/');
    let trimmed = path.trim_start_matches('/');
    if trimmed.is_empty() {
        return format!("{}/", base);
    }
    format!("{}/{}", base, trimmed)
}

#[cfg(test)]
mod tests {
    use super::absolute_url;

    #[test]
    fn joins_without_doubling_slashes() {
        assert_eq!(absolute_url("https://mintly.example/", "/"), "https://mintly.example/");
        assert_eq!(absolute_url("https://mintly.example", "plans"), "https://mintly.example/plans");
        assert_eq!(absolute_url("https://mintly.example", "https://cdn.example/x"), "https://cdn.example/x");
    }
}
