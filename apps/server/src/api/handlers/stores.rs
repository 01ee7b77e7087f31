//! Store lookup handler
//!
//! `GET /fetch_stores?medicine=&term=&medicine_id=&pincode=`

use crate::{
    api::envelope::Envelope, db::StoreFilter, models::StoreListing, state::AppState, Result,
};
use axum::{
    extract::{RawQuery, State},
    Json,
};

/// Look up stores stocking a medicine.
///
/// The raw query string is parsed by hand rather than through `Query<T>` so
/// that repeated keys resolve to their last occurrence instead of being
/// rejected.
pub async fn fetch_stores(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Json<Envelope<Vec<StoreListing>>>> {
    let filter = StoreFilter::from_query_string(query.as_deref());
    let stores = state.lookup_service.find_stores(filter).await?;
    Ok(Json(Envelope::success(stores)))
}
