use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Extension, Json,
};
use serde::Deserialize;
use tourdb_core::{normalize_keyword, Coordinate};
use tourdb_search::{Page, SearchResult};

use crate::middleware::{Caller, RequestId};

use super::{map_search_error, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct NearbyParams {
    pub latitude: f64,
    pub longitude: f64,
    pub radius_km: Option<f64>,
    pub page: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub(super) struct SearchParams {
    pub keyword: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub page: Option<i64>,
}

type PageResponse = Json<ApiResponse<Page<SearchResult>>>;

pub(super) async fn nearby_places(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Extension(Caller(caller)): Extension<Caller>,
    params: Result<Query<NearbyParams>, QueryRejection>,
) -> Result<PageResponse, ApiError> {
    let Query(params) = params.map_err(|e| validation_error(&req_id, e.body_text()))?;
    let origin = Coordinate::new(params.latitude, params.longitude)
        .validate()
        .map_err(|e| validation_error(&req_id, e.to_string()))?;

    let page = state
        .search
        .nearby_search(origin, params.radius_km, params.page.unwrap_or(1), caller)
        .await
        .map_err(|e| map_search_error(req_id.0.clone(), &e))?;

    tracing::info!(
        total = page.total_elements,
        page = page.current_page,
        returned = page.content.len(),
        "nearby search served"
    );

    Ok(Json(ApiResponse {
        data: page,
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(super) async fn search_places(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Extension(Caller(caller)): Extension<Caller>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<PageResponse, ApiError> {
    let Query(params) = params.map_err(|e| validation_error(&req_id, e.body_text()))?;
    let keyword =
        normalize_keyword(&params.keyword).map_err(|e| validation_error(&req_id, e.to_string()))?;

    let origin = match (params.latitude, params.longitude) {
        (Some(latitude), Some(longitude)) => Some(
            Coordinate::new(latitude, longitude)
                .validate()
                .map_err(|e| validation_error(&req_id, e.to_string()))?,
        ),
        (None, None) => None,
        _ => {
            return Err(validation_error(
                &req_id,
                "latitude and longitude must be given together",
            ))
        }
    };

    let page = state
        .search
        .keyword_search(keyword, origin, params.page.unwrap_or(1), caller)
        .await
        .map_err(|e| map_search_error(req_id.0.clone(), &e))?;

    tracing::info!(
        total = page.total_elements,
        page = page.current_page,
        returned = page.content.len(),
        "keyword search served"
    );

    Ok(Json(ApiResponse {
        data: page,
        meta: ResponseMeta::new(req_id.0),
    }))
}

fn validation_error(req_id: &RequestId, message: impl Into<String>) -> ApiError {
    ApiError::new(req_id.0.clone(), "validation_error", message)
}
