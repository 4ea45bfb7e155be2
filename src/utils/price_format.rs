/// Render a backend price the way it reads on a price tag.
///
/// Whole amounts drop the fraction (`19.0` -> `19`), anything else keeps the
/// shortest representation that round-trips (`24.99` -> `24.99`).
pub fn format_price(amount: f64) -> String {
    let rendered = format!("{}", amount);
    match rendered.strip_suffix(".0") {
        Some(whole) => whole.to_string(),
        None => rendered,
    }
}

#[cfg(test)]
mod tests {
    use super::format_price;

    #[test]
    fn whole_amounts_have_no_fraction() {
        assert_eq!(format_price(19.0), "19");
        assert_eq!(format_price(190.0), "190");
        assert_eq!(format_price(0.0), "0");
    }

    #[test]
    fn huge_whole_amounts_are_not_clamped() {
        assert_eq!(format_price(1e19), "10000000000000000000");
        assert_eq!(format_price(2.5e20), "250000000000000000000");
    }

    #[test]
    fn cents_are_kept() {
        assert_eq!(format_price(24.99), "24.99");
        assert_eq!(format_price(9.5), "9.5");
    }
}
