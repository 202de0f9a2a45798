pub mod content;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /content             list (optional ?title=&genre=), create
/// /content/{id}        get (cache-aside), update, delete
/// /content/{id}/genre  add genres, remove genres
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/content", content::router())
}
