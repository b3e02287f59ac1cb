//! # conduit-graphql-comments
//!
//! GraphQL comment resolvers for a Conduit-style blogging backend.
//!
//! ## Features
//!
//! - **Cursor Pagination** - Relay-style forward/backward paging over comments
//! - **Field Resolvers** - `Article.comments` connection and `CommentPayload.comment`
//! - **Request Context** - request-scoped pass-through store for fetched comments
//! - **Query Service Trait** - pluggable comment lookup with an in-memory implementation
//! - **Auth Handler** - Axum handler that injects the principal and per-request context
//!
//! ## Usage
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use conduit_graphql_comments::{CommentData, CursorPager, Direction};
//!
//! let comment = CommentData::new(
//!     "c1",
//!     "Nice post!",
//!     "u1",
//!     Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap(),
//! );
//! let pager = CursorPager::new(vec![comment], Direction::Next, false);
//! assert!(!pager.has_next);
//! ```

pub mod auth;
pub mod context;
pub mod pagination;
pub mod resolvers;
pub mod service;
pub mod types;

pub use auth::{extract_current_user, get_current_user, graphql_handler};
pub use context::CommentStore;
pub use pagination::{CursorCodec, CursorPageParameter, CursorPager, Cursored, Direction, PageInfo};
pub use resolvers::{Article, CommentEdge, CommentPayload, CommentsConnection};
pub use service::{CommentQueryService, InMemoryCommentQueryService};
pub use types::{ArticleData, Comment, CommentData, CurrentUser};

use thiserror::Error;

/// GraphQL errors
#[derive(Error, Debug)]
pub enum GraphQLError {
    #[error("invalid cursor: {0}")]
    InvalidCursor(String),

    #[error("invalid pagination arguments: {0}")]
    InvalidPagination(String),

    #[error("missing request context: {0}")]
    MissingContext(&'static str),

    #[error("comment query failed: {0}")]
    Query(String),
}

impl GraphQLError {
    /// Error code surfaced in the GraphQL error extensions.
    pub fn code(&self) -> &'static str {
        match self {
            GraphQLError::InvalidCursor(_) | GraphQLError::InvalidPagination(_) => {
                "BAD_USER_INPUT"
            }
            GraphQLError::MissingContext(_) | GraphQLError::Query(_) => "INTERNAL_SERVER_ERROR",
        }
    }
}

impl async_graphql::ErrorExtensions for GraphQLError {
    fn extend(&self) -> async_graphql::Error {
        let code = self.code();
        (self).extend_with(|_, e| e.set("code", code))
    }
}

/// Result type for GraphQL operations
pub type Result<T> = std::result::Result<T, GraphQLError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argument_errors_carry_bad_user_input_code() {
        let err = GraphQLError::InvalidPagination("missing first/last".to_string());
        assert_eq!(err.code(), "BAD_USER_INPUT");

        let gql: async_graphql::Error = err.into();
        assert!(gql.message.contains("invalid pagination arguments"));
    }

    #[test]
    fn test_internal_errors_carry_internal_code() {
        assert_eq!(
            GraphQLError::MissingContext("comment store").code(),
            "INTERNAL_SERVER_ERROR"
        );
        assert_eq!(
            GraphQLError::Query("connection refused".to_string()).code(),
            "INTERNAL_SERVER_ERROR"
        );
    }
}
