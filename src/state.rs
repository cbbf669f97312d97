use std::path::Path;
use std::sync::Arc;

use blog_lib::repos::r_posts::PostsRepo;

/// Shared application state: the one process-wide handle to the post store.
/// Sharing a single repo is what makes its write gate effective.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<PostsRepo>,
}

impl AppState {
    pub fn new(data_path: impl AsRef<Path>) -> Self {
        Self {
            posts: Arc::new(PostsRepo::new(data_path.as_ref())),
        }
    }
}
