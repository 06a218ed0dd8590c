//! Product catalog suggestions.

use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use stockpilot_store::CatalogRow;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new().route("/search", get(search))
}

/// Name-substring suggestions, capped at 10. An empty query is not an
/// error; it just suggests nothing.
pub async fn search(
    Extension(services): Extension<Arc<AppServices>>,
    Query(q): Query<dto::SearchQuery>,
) -> axum::response::Response {
    let query = q.query.as_deref().map(str::trim).unwrap_or("");
    if query.is_empty() {
        return Json(Vec::<CatalogRow>::new()).into_response();
    }

    match services.store().search_catalog(query).await {
        Ok(rows) => Json(rows).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}
