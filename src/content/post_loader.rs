use std::fs;
use std::path::Path;

use crate::content::front_matter::{parse_front_matter, split_front_matter};
use crate::content::markdown_renderer::render_markdown;
use crate::content::{ContentError, Post};

/// Loads one post from disk: read, split front matter, decode metadata,
/// render the body. The post's identifier is the file's base name with the
/// extension retained, mirroring what the listing publishes as the link.
pub fn load_post(path: &Path) -> Result<Post, ContentError> {
    let raw = fs::read_to_string(path)?;

    let (meta_block, body) = split_front_matter(&raw)?;
    let front = parse_front_matter(meta_block)?;

    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default()
        .to_string();

    Ok(Post {
        file_name,
        title: front.title,
        date: front.date,
        tags: front.tags,
        draft: front.draft,
        body: render_markdown(body),
    })
}
