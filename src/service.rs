//! Comment query collaborator
//!
//! The resolver layer only depends on the [`CommentQueryService`] trait; the
//! storage-backed implementation lives with the rest of the persistence
//! stack. [`InMemoryCommentQueryService`] implements the same cursor
//! semantics over a map and backs the tests.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::pagination::{CursorCodec, CursorPageParameter, CursorPager, Direction};
use crate::types::{CommentData, CurrentUser};
use crate::{GraphQLError, Result};

/// Cursor-paged comment lookup for one article.
#[async_trait]
pub trait CommentQueryService: Send + Sync {
    /// Fetch one page of comments for `article_id`.
    ///
    /// The returned page is ordered by creation time ascending regardless of
    /// direction; `current_user` scopes any per-user fields the backing
    /// query computes and may be absent for anonymous requests.
    async fn find_by_article_id_with_cursor(
        &self,
        article_id: &str,
        current_user: Option<&CurrentUser>,
        page: &CursorPageParameter,
    ) -> Result<CursorPager<CommentData>>;
}

/// In-memory [`CommentQueryService`] keyed by article id.
#[derive(Default)]
pub struct InMemoryCommentQueryService {
    comments: Mutex<HashMap<String, Vec<CommentData>>>,
}

impl InMemoryCommentQueryService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a comment to an article, keeping creation-time order.
    pub async fn insert(&self, article_id: impl Into<String>, comment: CommentData) {
        let mut comments = self.comments.lock().await;
        let rows = comments.entry(article_id.into()).or_default();
        rows.push(comment);
        rows.sort_by_key(|c| c.created_at);
    }
}

fn decode_anchor(cursor: &str) -> Result<i64> {
    let payload = CursorCodec::decode(cursor)?;
    payload
        .parse::<i64>()
        .map_err(|e| GraphQLError::InvalidCursor(e.to_string()))
}

#[async_trait]
impl CommentQueryService for InMemoryCommentQueryService {
    async fn find_by_article_id_with_cursor(
        &self,
        article_id: &str,
        _current_user: Option<&CurrentUser>,
        page: &CursorPageParameter,
    ) -> Result<CursorPager<CommentData>> {
        let anchor = match &page.cursor {
            Some(cursor) => Some(decode_anchor(cursor)?),
            None => None,
        };

        let comments = self.comments.lock().await;
        let all = match comments.get(article_id) {
            Some(rows) => rows.as_slice(),
            None => return Ok(CursorPager::empty()),
        };

        let limit = page.limit as usize;
        match page.direction {
            Direction::Next => {
                // Rows strictly after the anchor; one extra row decides has_next.
                let mut rows: Vec<CommentData> = match anchor {
                    Some(millis) => all
                        .iter()
                        .filter(|c| c.created_at.timestamp_millis() > millis)
                        .cloned()
                        .collect(),
                    None => all.to_vec(),
                };
                let has_extra = rows.len() > limit;
                rows.truncate(limit);
                Ok(CursorPager::new(rows, Direction::Next, has_extra))
            }
            Direction::Prev => {
                // Last `limit` rows strictly before the anchor, still ascending.
                let mut rows: Vec<CommentData> = match anchor {
                    Some(millis) => all
                        .iter()
                        .filter(|c| c.created_at.timestamp_millis() < millis)
                        .cloned()
                        .collect(),
                    None => all.to_vec(),
                };
                let has_extra = rows.len() > limit;
                if has_extra {
                    let drop = rows.len() - limit;
                    rows.drain(..drop);
                }
                Ok(CursorPager::new(rows, Direction::Prev, has_extra))
            }
        }
    }
}
