//! Principal extraction and GraphQL request wiring
//!
//! Provides helpers for:
//! - Extracting the authenticated user id from HTTP headers
//! - Creating request-scoped context (current user, comment store)
//! - Standard Axum handler for GraphQL endpoints

use async_graphql::{Context, Request, Response, Schema};
use axum::{extract::Extension, http::HeaderMap, Json};
use uuid::Uuid;

use crate::context::CommentStore;
use crate::types::CurrentUser;

/// Extract the current user from the x-user-id header.
///
/// Token verification happens upstream (gateway or middleware); by the time
/// a request reaches this layer the principal is a plain header. A missing
/// or malformed header means an anonymous request.
pub fn extract_current_user(headers: &HeaderMap) -> Option<CurrentUser> {
    headers
        .get("x-user-id")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| Uuid::parse_str(s).ok())
        .map(|id| CurrentUser { id })
}

/// Standard GraphQL handler with request-scoped context injection.
///
/// Attaches the optional [`CurrentUser`] and a fresh [`CommentStore`] to
/// every request before executing it, so resolver-published data never
/// outlives one query execution.
///
/// # Example
///
/// ```rust,no_run
/// use async_graphql::{EmptyMutation, EmptySubscription, ObjectType, Schema};
/// use axum::{extract::Extension, routing::post, Router};
/// use conduit_graphql_comments::auth::graphql_handler;
///
/// fn routes<Q: ObjectType + 'static>(schema: Schema<Q, EmptyMutation, EmptySubscription>) -> Router {
///     Router::new()
///         .route("/graphql", post(graphql_handler::<Q, EmptyMutation, EmptySubscription>))
///         .layer(Extension(schema))
/// }
/// ```
pub async fn graphql_handler<Query, Mutation, Subscription>(
    Extension(schema): Extension<Schema<Query, Mutation, Subscription>>,
    headers: HeaderMap,
    req: Json<Request>,
) -> Json<Response>
where
    Query: async_graphql::ObjectType + 'static,
    Mutation: async_graphql::ObjectType + 'static,
    Subscription: async_graphql::SubscriptionType + 'static,
{
    let current_user = extract_current_user(&headers);
    tracing::debug!(anonymous = current_user.is_none(), "executing graphql request");

    let mut request = req.0;
    if let Some(user) = current_user {
        request = request.data(user);
    }
    request = request.data(CommentStore::new());

    let response = schema.execute(request).await;

    Json(response)
}

/// Get the current user from a resolver context.
pub fn get_current_user<'a>(ctx: &'a Context<'_>) -> Option<&'a CurrentUser> {
    ctx.data_opt::<CurrentUser>()
}
