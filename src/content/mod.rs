use std::io;

pub mod front_matter;
pub mod markdown_renderer;
pub mod post_loader;

/// One blog post, rebuilt from disk on every request.
pub struct Post {
    /// Base name of the source file, extension included. Doubles as the
    /// URL segment and the feed GUID.
    pub file_name: String,
    pub title: String,
    /// Raw RFC 3339 string. Kept unparsed so that listing order is a plain
    /// byte-wise comparison of whatever the author wrote.
    pub date: String,
    /// Comma-separated by convention. Not split by the pipeline.
    pub tags: String,
    pub draft: bool,
    /// Rendered HTML, embedded unescaped downstream.
    pub body: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("error reading post file: {0}")]
    Io(#[from] io::Error),
    #[error("missing front matter delimiter")]
    MissingFrontMatter,
    #[error("invalid front matter: {0}")]
    FrontMatter(#[from] serde_yaml::Error),
}
