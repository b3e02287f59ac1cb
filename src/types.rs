//! Domain data and GraphQL output types

use async_graphql::SimpleObject;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::pagination::{CursorCodec, Cursored};

/// Article context supplied by the parent resolver.
#[derive(Debug, Clone, Serialize)]
pub struct ArticleData {
    pub id: String,
    pub slug: String,
}

impl ArticleData {
    pub fn new(id: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            slug: slug.into(),
        }
    }
}

/// One comment row as produced by the query service. Immutable once built.
#[derive(Debug, Clone, Serialize)]
pub struct CommentData {
    pub id: String,
    pub body: String,
    pub author_id: String,
    pub created_at: DateTime<Utc>,
    cursor: String,
}

impl CommentData {
    /// The cursor is assigned at construction from the creation timestamp
    /// (epoch milliseconds, base64-encoded), so rows created later always
    /// sort after rows created earlier.
    pub fn new(
        id: impl Into<String>,
        body: impl Into<String>,
        author_id: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        let cursor = CursorCodec::encode(&created_at.timestamp_millis().to_string());
        Self {
            id: id.into(),
            body: body.into(),
            author_id: author_id.into(),
            created_at,
            cursor,
        }
    }
}

impl Cursored for CommentData {
    fn cursor(&self) -> &str {
        &self.cursor
    }
}

/// Authenticated principal, extracted once at the HTTP boundary and passed
/// explicitly to the query service. Absence means an anonymous request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentUser {
    pub id: Uuid,
}

/// Comment GraphQL output type.
#[derive(SimpleObject, Debug, Clone)]
pub struct Comment {
    pub id: String,
    pub body: String,
    pub created_at: String,
    pub updated_at: String,
}

impl Comment {
    /// Map a [`CommentData`] into its output shape.
    ///
    /// Both timestamps render as ISO-8601 UTC with millisecond precision.
    /// The upstream data source never records a distinct update time, so
    /// `updated_at` mirrors `created_at`.
    pub fn from_data(data: &CommentData) -> Self {
        let stamp = data.created_at.to_rfc3339_opts(SecondsFormat::Millis, true);
        Self {
            id: data.id.clone(),
            body: data.body.clone(),
            created_at: stamp.clone(),
            updated_at: stamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_comment_timestamps_are_iso8601_utc_millis() {
        let data = CommentData::new(
            "c1",
            "hello",
            "u1",
            Utc.with_ymd_and_hms(2023, 1, 1, 10, 0, 0).unwrap(),
        );
        let comment = Comment::from_data(&data);
        assert_eq!(comment.created_at, "2023-01-01T10:00:00.000Z");
        assert_eq!(comment.updated_at, comment.created_at);
        assert_eq!(comment.id, "c1");
        assert_eq!(comment.body, "hello");
    }

    #[test]
    fn test_cursor_encodes_creation_millis() {
        let created = Utc.with_ymd_and_hms(2023, 1, 1, 10, 0, 0).unwrap();
        let data = CommentData::new("c1", "hello", "u1", created);
        let decoded = CursorCodec::decode(data.cursor()).unwrap();
        assert_eq!(decoded, created.timestamp_millis().to_string());
    }

    #[test]
    fn test_comment_data_serializes() {
        let data = CommentData::new(
            "c1",
            "hello",
            "u1",
            Utc.with_ymd_and_hms(2023, 1, 1, 10, 0, 0).unwrap(),
        );
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["id"], "c1");
        assert_eq!(json["author_id"], "u1");
    }
}
