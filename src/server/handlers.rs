//! HTTP handlers for the transaction query API

use crate::core::error::ScopeResult;
use crate::core::filter::{FilterSpec, QueryParams};
use crate::core::query::{FacetsResponse, PaginatedResponse, SummaryResponse};
use crate::core::sort::{PageSpec, SortSpec};
use crate::core::transaction::Transaction;
use crate::server::router::AppState;
use axum::Json;
use axum::extract::{Query, State};

/// GET /api/transactions
///
/// Multi-select filtering, free-text search, sorting and pagination. The
/// query parameters are documented on [`QueryParams`]; defaults are
/// `sortBy=Date`, `sortOrder=desc`, `page=1`, `limit=10`.
pub async fn list_transactions(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> ScopeResult<Json<PaginatedResponse<Transaction>>> {
    let spec = FilterSpec::from_params(&params)?;
    let sort = SortSpec::from_params(params.sort_by.as_deref(), params.sort_order.as_deref());
    let page = PageSpec::new(params.page, params.limit);

    let response = state.engine.fetch_page(&spec, &sort, &page).await?;
    Ok(Json(response))
}

/// GET /api/transactions/filters
///
/// Distinct values for every filterable dimension, used to populate
/// multi-select dropdowns. Always reflects the whole dataset.
pub async fn filter_options(
    State(state): State<AppState>,
) -> ScopeResult<Json<FacetsResponse>> {
    let filters = state.engine.filter_options().await?;
    Ok(Json(FacetsResponse { filters }))
}

/// GET /api/transactions/summary
///
/// Aggregated totals over ALL matching transactions, not just the current
/// page. Accepts the same filter parameters as the listing endpoint.
pub async fn summary(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> ScopeResult<Json<SummaryResponse>> {
    let spec = FilterSpec::from_params(&params)?;
    let summary = state.engine.summarize(&spec).await?;
    Ok(Json(SummaryResponse { summary }))
}
