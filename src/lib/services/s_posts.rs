use tracing::debug;

use crate::models::post::Post;
use crate::repos::r_posts::PostsRepo;
use crate::store::StoreError;

pub async fn get_posts(repo: &PostsRepo) -> Result<Vec<Post>, StoreError> {
    debug!("s: get posts");
    repo.select_posts().await
}

pub async fn get_post(repo: &PostsRepo, post_id: u64) -> Result<Option<Post>, StoreError> {
    debug!("s: get post {}", post_id);
    repo.select_post(post_id).await
}

pub async fn create_post(
    repo: &PostsRepo,
    title: String,
    content: String,
) -> Result<Post, StoreError> {
    debug!("s: create post");
    repo.insert_post(title, content).await
}

pub async fn update_post(
    repo: &PostsRepo,
    post_id: u64,
    title: Option<String>,
    content: Option<String>,
) -> Result<Option<Post>, StoreError> {
    debug!("s: update post {}", post_id);
    repo.update_post(post_id, title, content).await
}

pub async fn delete_post(repo: &PostsRepo, post_id: u64) -> Result<bool, StoreError> {
    debug!("s: delete post {}", post_id);
    repo.delete_post(post_id).await
}
