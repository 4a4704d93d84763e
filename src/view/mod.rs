pub mod list_renderer;
pub mod post_renderer;
pub mod rss_renderer;

/// Date format used on rendered pages, e.g. "5 March 2024".
pub const DISPLAY_DATE_FORMAT: &str = "%-d %B %Y";
