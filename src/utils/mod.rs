// URL handling utilities
pub mod url_parser;
pub mod url_builder;

// Display formatting
pub mod price_format;

pub use url_parser::hostname_from_url;
pub use url_builder::absolute_url;
pub use price_format::format_price;
