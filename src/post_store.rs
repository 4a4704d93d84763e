use std::io;
use std::path::{Component, Path, PathBuf};

use spdlog::warn;

use crate::content::post_loader::load_post;
use crate::content::{ContentError, Post};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("no such post")]
    NotFound,
    #[error("error loading post: {0}")]
    Load(#[from] ContentError),
}

/// Reads posts from a flat directory of `.md` files. There is no cache:
/// every call scans the directory again, so edits on disk show up on the
/// next request.
pub struct PostStore {
    pub posts_dir: PathBuf,
}

impl PostStore {
    pub fn new(posts_dir: PathBuf) -> PostStore {
        PostStore { posts_dir }
    }

    /// Lists every parseable post, newest first.
    ///
    /// A file that fails to load is logged and skipped; one broken post must
    /// never take down the whole index. Ordering is a byte-wise comparison
    /// of the raw date strings, descending. That matches chronological order
    /// as long as all posts format their RFC 3339 dates the same way, and it
    /// keeps the sort deterministic even when they don't.
    pub fn list(&self) -> io::Result<Vec<Post>> {
        let mut posts = vec![];
        for entry in std::fs::read_dir(&self.posts_dir)? {
            // A bad directory entry is skipped like any other bad post
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable directory entry: {}", e);
                    continue;
                }
            };
            let file_type = match entry.file_type() {
                Ok(t) => t,
                Err(_) => continue,
            };
            if !file_type.is_file() {
                continue;
            }
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("md") {
                continue;
            }

            match load_post(&path) {
                Ok(post) => posts.push(post),
                Err(e) => {
                    warn!("Skipping post {}: {}", path.display(), e);
                }
            }
        }

        posts.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(posts)
    }

    /// Resolves one post by its published identifier (file name).
    ///
    /// The identifier comes from the URL, so it is normalized lexically and
    /// rejected as not-found if it would escape the posts directory. No read
    /// is attempted for an escaping path. A file that exists but fails to
    /// load is a `Load` error, distinct from `NotFound`, so the caller can
    /// answer 404 vs 500 correctly.
    pub fn get(&self, file_name: &str) -> Result<Post, StoreError> {
        let path = self.resolve(file_name).ok_or(StoreError::NotFound)?;
        if !path.is_file() {
            return Err(StoreError::NotFound);
        }
        Ok(load_post(&path)?)
    }

    fn resolve(&self, file_name: &str) -> Option<PathBuf> {
        let mut clean = PathBuf::new();
        for component in Path::new(file_name).components() {
            match component {
                Component::Normal(part) => clean.push(part),
                Component::CurDir => {}
                // Popping past the start would leave the posts directory
                Component::ParentDir => {
                    if !clean.pop() {
                        return None;
                    }
                }
                Component::RootDir | Component::Prefix(_) => return None,
            }
        }

        if clean.as_os_str().is_empty() {
            return None;
        }
        Some(self.posts_dir.join(clean))
    }
}
