//! Relay-style cursor pagination

use async_graphql::SimpleObject;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

/// Paging direction relative to the anchor cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Forward pagination (`first`/`after`).
    Next,
    /// Backward pagination (`last`/`before`).
    Prev,
}

/// Per-request page parameter: anchor cursor, page size, direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorPageParameter {
    pub cursor: Option<String>,
    pub limit: i32,
    pub direction: Direction,
}

impl CursorPageParameter {
    /// Create a page parameter, rejecting a non-positive limit.
    pub fn new(cursor: Option<String>, limit: i32, direction: Direction) -> crate::Result<Self> {
        if limit < 1 {
            return Err(crate::GraphQLError::InvalidPagination(format!(
                "page size must be positive, got {limit}"
            )));
        }
        Ok(Self {
            cursor,
            limit,
            direction,
        })
    }
}

/// Items that carry an opaque, source-assigned pagination cursor.
pub trait Cursored {
    fn cursor(&self) -> &str;
}

/// One page of results plus boundary cursors and availability flags.
///
/// Read-only to the resolver layer; produced fresh per query by a
/// [`crate::CommentQueryService`].
#[derive(Debug, Clone)]
pub struct CursorPager<T> {
    pub data: Vec<T>,
    pub start_cursor: Option<String>,
    pub end_cursor: Option<String>,
    pub has_previous: bool,
    pub has_next: bool,
}

impl<T: Cursored> CursorPager<T> {
    /// Build a pager from one page of rows.
    ///
    /// `has_extra` means the query found at least one row beyond this page
    /// in the paging direction. Forward pages never report a previous page
    /// and backward pages never report a next page.
    pub fn new(data: Vec<T>, direction: Direction, has_extra: bool) -> Self {
        let start_cursor = data.first().map(|t| t.cursor().to_string());
        let end_cursor = data.last().map(|t| t.cursor().to_string());
        let (has_previous, has_next) = match direction {
            Direction::Next => (false, has_extra),
            Direction::Prev => (has_extra, false),
        };
        Self {
            data,
            start_cursor,
            end_cursor,
            has_previous,
            has_next,
        }
    }
}

impl<T> CursorPager<T> {
    /// Pager with no rows and no further pages.
    pub fn empty() -> Self {
        Self {
            data: Vec::new(),
            start_cursor: None,
            end_cursor: None,
            has_previous: false,
            has_next: false,
        }
    }
}

/// Page information
#[derive(SimpleObject, Debug, Clone)]
pub struct PageInfo {
    pub has_next_page: bool,
    pub has_previous_page: bool,
    pub start_cursor: Option<String>,
    pub end_cursor: Option<String>,
}

/// Cursor encoding/decoding
pub struct CursorCodec;

impl CursorCodec {
    /// Encode a cursor payload to base64.
    pub fn encode(value: &str) -> String {
        BASE64.encode(value.as_bytes())
    }

    /// Decode a base64 cursor back into its payload.
    pub fn decode(cursor: &str) -> crate::Result<String> {
        let bytes = BASE64
            .decode(cursor.as_bytes())
            .map_err(|e| crate::GraphQLError::InvalidCursor(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| crate::GraphQLError::InvalidCursor(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        cursor: String,
    }

    impl Row {
        fn new(cursor: &str) -> Self {
            Self {
                cursor: cursor.to_string(),
            }
        }
    }

    impl Cursored for Row {
        fn cursor(&self) -> &str {
            &self.cursor
        }
    }

    #[test]
    fn test_cursor_codec_round_trip() {
        let original = "1672567200000";
        let encoded = CursorCodec::encode(original);
        let decoded = CursorCodec::decode(&encoded).unwrap();
        assert_eq!(original, decoded);
    }

    #[test]
    fn test_cursor_codec_rejects_garbage() {
        let err = CursorCodec::decode("not base64!").unwrap_err();
        assert!(matches!(err, crate::GraphQLError::InvalidCursor(_)));
    }

    #[test]
    fn test_forward_pager_flags() {
        let pager = CursorPager::new(vec![Row::new("a"), Row::new("b")], Direction::Next, true);
        assert!(!pager.has_previous);
        assert!(pager.has_next);
        assert_eq!(pager.start_cursor.as_deref(), Some("a"));
        assert_eq!(pager.end_cursor.as_deref(), Some("b"));
    }

    #[test]
    fn test_backward_pager_flags() {
        let pager = CursorPager::new(vec![Row::new("a"), Row::new("b")], Direction::Prev, true);
        assert!(pager.has_previous);
        assert!(!pager.has_next);
    }

    #[test]
    fn test_empty_pager_has_no_cursors() {
        let pager = CursorPager::<Row>::new(Vec::new(), Direction::Next, false);
        assert!(pager.start_cursor.is_none());
        assert!(pager.end_cursor.is_none());
        assert!(pager.data.is_empty());
    }

    #[test]
    fn test_page_parameter_rejects_non_positive_limit() {
        let err = CursorPageParameter::new(None, 0, Direction::Next).unwrap_err();
        assert!(matches!(err, crate::GraphQLError::InvalidPagination(_)));

        let ok = CursorPageParameter::new(Some("c".to_string()), 5, Direction::Prev).unwrap();
        assert_eq!(ok.limit, 5);
        assert_eq!(ok.direction, Direction::Prev);
    }
}
