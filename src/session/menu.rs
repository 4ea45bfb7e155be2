/// Mobile navigation overlay. Driven by the `menu` query parameter, never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MobileMenu {
    #[default]
    Closed,
    Open,
}

impl MobileMenu {
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.eq_ignore_ascii_case("open") => MobileMenu::Open,
            _ => MobileMenu::Closed,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, MobileMenu::Open)
    }
}
