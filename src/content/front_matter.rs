use serde::Deserialize;

use crate::content::ContentError;

/// Decoded front matter block. Unknown keys are ignored so that posts can
/// carry extra metadata without breaking older servers.
#[derive(Debug, Deserialize)]
pub struct FrontMatter {
    pub title: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub draft: bool,
}

/// Splits a raw post file into (front matter, body).
///
/// The delimiter is the exact sequence newline, `---`, newline. Everything
/// after the first occurrence is the body, verbatim. There is no support for
/// a second delimiter or multiple blocks.
pub fn split_front_matter(raw: &str) -> Result<(&str, &str), ContentError> {
    raw.split_once("\n---\n").ok_or(ContentError::MissingFrontMatter)
}

pub fn parse_front_matter(block: &str) -> Result<FrontMatter, ContentError> {
    Ok(serde_yaml::from_str(block)?)
}
