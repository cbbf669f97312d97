use std::path::PathBuf;

use itertools::Itertools;
use time::OffsetDateTime;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::models::post::{Post, PostCollection, PostCollectionLayout};
use crate::store::json_store::JsonStore;
use crate::store::StoreError;

/// Collection operations over the storage document. One instance exists per
/// process; the write gate serializes every load-modify-save cycle so
/// concurrent mutations cannot overwrite each other's result.
pub struct PostsRepo {
    store: JsonStore,
    write_gate: Mutex<()>,
}

impl PostsRepo {
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        Self {
            store: JsonStore::new(data_path),
            write_gate: Mutex::new(()),
        }
    }

    pub async fn select_posts(&self) -> Result<Vec<Post>, StoreError> {
        debug!("r: select posts");

        let collection = self.load_collection().await?;
        Ok(collection.posts)
    }

    pub async fn select_post(&self, post_id: u64) -> Result<Option<Post>, StoreError> {
        debug!("r: select post {}", post_id);

        let collection = self.load_collection().await?;
        Ok(collection.posts.into_iter().find(|p| p.id == post_id))
    }

    pub async fn insert_post(&self, title: String, content: String) -> Result<Post, StoreError> {
        debug!("r: insert post");
        let _gate = self.write_gate.lock().await;

        let mut collection = self.load_collection().await?;

        let now = OffsetDateTime::now_utc();
        let post = Post {
            id: collection.next_id,
            title,
            content,
            last_updated: now,
            originally_published: now,
        };

        collection.next_id += 1;
        collection.posts.push(post.clone());
        self.store.save(&collection).await?;

        Ok(post)
    }

    pub async fn update_post(
        &self,
        post_id: u64,
        title: Option<String>,
        content: Option<String>,
    ) -> Result<Option<Post>, StoreError> {
        debug!("r: update post {}", post_id);
        let _gate = self.write_gate.lock().await;

        let mut collection = self.load_collection().await?;

        let post = match collection.posts.iter_mut().find(|p| p.id == post_id) {
            Some(post) => post,
            None => return Ok(None),
        };

        if let Some(title) = title {
            post.title = title;
        }
        if let Some(content) = content {
            post.content = content;
        }
        post.last_updated = OffsetDateTime::now_utc();

        let updated = post.clone();
        self.store.save(&collection).await?;

        Ok(Some(updated))
    }

    pub async fn delete_post(&self, post_id: u64) -> Result<bool, StoreError> {
        debug!("r: delete post {}", post_id);
        let _gate = self.write_gate.lock().await;

        let mut collection = self.load_collection().await?;

        let index = match collection.posts.iter().position(|p| p.id == post_id) {
            Some(index) => index,
            None => return Ok(false),
        };

        collection.posts.remove(index);
        self.store.save(&collection).await?;

        Ok(true)
    }

    /// Loads the document fresh, accepting either layout. A missing file is
    /// an empty collection; an unreadable one surfaces as `Unavailable`.
    async fn load_collection(&self) -> Result<PostCollection, StoreError> {
        let layout = self.store.load::<PostCollectionLayout>().await?;
        let mut collection = layout.map(PostCollection::from).unwrap_or_default();

        let duplicates: Vec<u64> = collection.posts.iter().map(|p| p.id).duplicates().collect();
        if !duplicates.is_empty() {
            warn!("duplicate post ids in data store: {:?}", duplicates);
        }

        // Documents written by the old length-based id scheme can hold ids
        // at or past the counter; never hand one of those out again.
        let floor = collection.posts.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        if collection.next_id < floor {
            warn!(
                "id counter {} is behind stored posts, clamping to {}",
                collection.next_id, floor
            );
            collection.next_id = floor;
        }

        Ok(collection)
    }
}
