//! Axum handlers for `/api/*` routes.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use serde::Deserialize;
use tracing::debug;

use crate::catalog::BookRecord;

use super::ApiState;

// ── Request types ─────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub(super) struct SearchParams {
    search: Option<String>,
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// GET /api/data: the catalog, filtered by `search` when it is non-empty.
///
/// A query string that fails to decode is served as if no filter was given.
/// That includes a repeated `search`, which the older controller joined with
/// commas (`hobbit,gatsby`) and so matched nothing; here it returns every book.
pub(super) async fn data(
    State(state): State<ApiState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Json<Vec<BookRecord>> {
    let search = match params {
        Ok(Query(params)) => params.search,
        Err(rejection) => {
            debug!(%rejection, "ignoring undecodable query string");
            None
        }
    };

    let books = state.catalog.query(search.as_deref());
    debug!(search = search.as_deref().unwrap_or(""), matched = books.len(), "catalog query");
    Json(books)
}
