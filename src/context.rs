//! Request-scoped comment pass-through store
//!
//! Parent resolvers publish the `CommentData` they already fetched so that
//! sibling and child resolvers (author resolution joins on comment id) can
//! read it without repeating the query. The store lives for exactly one
//! query execution: [`crate::auth::graphql_handler`] creates a fresh one per
//! request and hands it to the schema as request data.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::types::CommentData;

/// Shared-handle map from comment id to [`CommentData`].
///
/// Cloning yields another handle to the same map, so a handle captured
/// before execution observes everything resolvers published during it.
#[derive(Clone, Default)]
pub struct CommentStore {
    inner: Arc<Mutex<HashMap<String, CommentData>>>,
}

impl CommentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish a single comment keyed by its id.
    pub async fn publish_one(&self, comment: CommentData) {
        let mut inner = self.inner.lock().await;
        inner.insert(comment.id.clone(), comment);
    }

    /// Publish a batch of comments keyed by id.
    pub async fn publish(&self, comments: impl IntoIterator<Item = CommentData> + Send) {
        let mut inner = self.inner.lock().await;
        for comment in comments {
            inner.insert(comment.id.clone(), comment);
        }
    }

    /// Look up a published comment by id.
    pub async fn get(&self, id: &str) -> Option<CommentData> {
        let inner = self.inner.lock().await;
        inner.get(id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.lock().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn comment(id: &str) -> CommentData {
        CommentData::new(
            id,
            "body",
            "u1",
            Utc.with_ymd_and_hms(2023, 1, 1, 10, 0, 0).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_publish_and_get() {
        let store = CommentStore::new();
        store.publish_one(comment("c1")).await;
        store.publish(vec![comment("c2"), comment("c3")]).await;

        assert_eq!(store.len().await, 3);
        assert_eq!(store.get("c2").await.unwrap().id, "c2");
        assert!(store.get("nope").await.is_none());
    }

    #[tokio::test]
    async fn test_clone_shares_the_map() {
        let store = CommentStore::new();
        let handle = store.clone();
        store.publish_one(comment("c1")).await;
        assert_eq!(handle.len().await, 1);
    }
}
