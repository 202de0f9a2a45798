//! Route definitions for the `/content` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::content;
use crate::state::AppState;

/// Routes mounted at `/content`.
///
/// ```text
/// GET    /            -> list
/// POST   /            -> create
/// GET    /{id}        -> get_by_id
/// PATCH  /{id}        -> update
/// DELETE /{id}        -> delete
/// POST   /{id}/genre  -> add_genres
/// DELETE /{id}/genre  -> remove_genres
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(content::list).post(content::create))
        .route(
            "/{id}",
            get(content::get_by_id)
                .patch(content::update)
                .delete(content::delete),
        )
        .route(
            "/{id}/genre",
            post(content::add_genres).delete(content::remove_genres),
        )
}
