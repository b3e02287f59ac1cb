//! Comment field resolvers
//!
//! Thin adapters between the GraphQL surface and the comment query service:
//! argument extraction, one service call, and a verbatim mapping of the
//! returned pager into Relay connection shapes. Pagination mechanics and
//! authorization live behind [`CommentQueryService`].

use std::sync::Arc;

use async_graphql::{Context, Object, SimpleObject};

use crate::context::CommentStore;
use crate::pagination::{
    CursorPageParameter, CursorPager, Cursored, Direction, PageInfo,
};
use crate::service::CommentQueryService;
use crate::types::{ArticleData, Comment, CommentData, CurrentUser};
use crate::GraphQLError;

/// Edge in a comments connection.
#[derive(SimpleObject, Debug, Clone)]
pub struct CommentEdge {
    pub cursor: String,
    pub node: Comment,
}

/// One page of an article's comments.
#[derive(SimpleObject, Debug, Clone)]
pub struct CommentsConnection {
    pub page_info: PageInfo,
    pub edges: Vec<CommentEdge>,
}

impl CommentsConnection {
    /// Map a pager verbatim: edge order, cursors, and page flags all come
    /// from the service. Empty-string boundary cursors render as null.
    pub fn from_pager(pager: &CursorPager<CommentData>) -> Self {
        let edges = pager
            .data
            .iter()
            .map(|data| CommentEdge {
                cursor: data.cursor().to_string(),
                node: Comment::from_data(data),
            })
            .collect();
        Self {
            page_info: PageInfo {
                has_next_page: pager.has_next,
                has_previous_page: pager.has_previous,
                start_cursor: non_empty(&pager.start_cursor),
                end_cursor: non_empty(&pager.end_cursor),
            },
            edges,
        }
    }
}

fn non_empty(cursor: &Option<String>) -> Option<String> {
    cursor.as_deref().filter(|c| !c.is_empty()).map(String::from)
}

/// Mutation payload wrapping a freshly created comment.
pub struct CommentPayload {
    comment: CommentData,
}

impl CommentPayload {
    pub fn new(comment: CommentData) -> Self {
        Self { comment }
    }
}

#[Object]
impl CommentPayload {
    /// The created comment, republished into the request store for
    /// downstream resolvers keyed by its id.
    async fn comment(&self, ctx: &Context<'_>) -> async_graphql::Result<Comment> {
        let store = ctx
            .data_opt::<CommentStore>()
            .ok_or(GraphQLError::MissingContext("comment store"))?;
        store.publish_one(self.comment.clone()).await;
        Ok(Comment::from_data(&self.comment))
    }
}

/// Article object; owns its data and resolves the comments connection.
pub struct Article {
    data: ArticleData,
}

impl Article {
    pub fn new(data: ArticleData) -> Self {
        Self { data }
    }
}

#[Object]
impl Article {
    async fn slug(&self) -> &str {
        &self.data.slug
    }

    /// Cursor-paged comments on this article.
    ///
    /// `first`/`after` page forward, `last`/`before` page backward; one of
    /// `first` or `last` is required. `first` wins when both are given.
    async fn comments(
        &self,
        ctx: &Context<'_>,
        first: Option<i32>,
        after: Option<String>,
        last: Option<i32>,
        before: Option<String>,
    ) -> async_graphql::Result<CommentsConnection> {
        let page = match (first, last) {
            (None, None) => {
                return Err(GraphQLError::InvalidPagination(
                    "exactly one of first/last must be supplied".to_string(),
                )
                .into())
            }
            (Some(limit), _) => CursorPageParameter::new(after, limit, Direction::Next)?,
            (None, Some(limit)) => CursorPageParameter::new(before, limit, Direction::Prev)?,
        };

        let service = ctx
            .data_opt::<Arc<dyn CommentQueryService>>()
            .ok_or(GraphQLError::MissingContext("comment query service"))?;
        let current_user = ctx.data_opt::<CurrentUser>();

        tracing::debug!(
            article = %self.data.id,
            limit = page.limit,
            direction = ?page.direction,
            "resolving comments page"
        );

        let pager = service
            .find_by_article_id_with_cursor(&self.data.id, current_user, &page)
            .await?;

        let store = ctx
            .data_opt::<CommentStore>()
            .ok_or(GraphQLError::MissingContext("comment store"))?;
        store.publish(pager.data.iter().cloned()).await;

        Ok(CommentsConnection::from_pager(&pager))
    }
}
