/// Extract the `host[:port]` part of a URL string
pub fn hostname_from_url(u: &str) -> String {
    let s = u.trim();
    if s.is_empty() {
        return "".into();
    }
    let s = if let Some(idx) = s.find("://") { &s[idx + 3..] } else { s };
    let host = s.split(['/', '?', '#']).next().unwrap_or(s);
    host.to_string()
}

#[cfg(test)]
mod tests {
    use super::hostname_from_url;

    #[test]
    fn strips_scheme_and_path() {
        assert_eq!(hostname_from_url("http://localhost:8000/plans"), "localhost:8000");
        assert_eq!(hostname_from_url("https://api.mintly.example?x=1"), "api.mintly.example");
        assert_eq!(hostname_from_url("  "), "");
    }
}
