use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub content: String,

    #[serde(with = "time::serde::rfc3339")]
    pub last_updated: OffsetDateTime,

    #[serde(with = "time::serde::rfc3339")]
    pub originally_published: OffsetDateTime,
}

/// The whole storage document: every post plus the id counter, so ids stay
/// unique even after deletions punch holes in the sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostCollection {
    pub next_id: u64,
    pub posts: Vec<Post>,
}

impl PostCollection {
    /// Rebuilds the counter for documents written before it was persisted.
    pub fn from_legacy(posts: Vec<Post>) -> Self {
        let next_id = posts.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        Self { next_id, posts }
    }
}

impl Default for PostCollection {
    fn default() -> Self {
        Self {
            next_id: 1,
            posts: Vec::new(),
        }
    }
}

/// On-disk layouts accepted at load time. Older documents are a bare array
/// of posts; everything written now is the counter-carrying object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PostCollectionLayout {
    Current(PostCollection),
    Legacy(Vec<Post>),
}

impl From<PostCollectionLayout> for PostCollection {
    fn from(layout: PostCollectionLayout) -> Self {
        match layout {
            PostCollectionLayout::Current(collection) => collection,
            PostCollectionLayout::Legacy(posts) => PostCollection::from_legacy(posts),
        }
    }
}

// === request models === //

#[derive(Debug, Deserialize)]
pub struct CreatePostArgs {
    pub title: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePostArgs {
    pub title: Option<String>,
    pub content: Option<String>,
}
