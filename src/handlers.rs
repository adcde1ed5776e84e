// region:    --- Imports
use crate::catalog::query::{CatalogParams, CatalogQuery};
use crate::catalog::view::compute_view;
use crate::error::AppError;
use crate::exchange::commands::{
    handle_redeem as command_handle_redeem, handle_swap_request as command_handle_swap_request,
    RedeemCommand, SwapRequestCommand,
};
use crate::exchange::events::ExchangeNotice;
use crate::listing::draft::{submit_draft, DraftReceipt, ListingDraft};
use crate::listing::model::{Listing, ListingDetail};
use crate::listing::sample::find_listing;
use crate::profile::Profile;
use crate::state::AppState;
use axum::extract::{DefaultBodyLimit, Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

// endregion: --- Imports

// region:    --- Router

/// 라우터 설정
pub fn router(state: AppState) -> Router {
    // 프론트엔드 연동을 위한 cors 설정
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handle_health))
        .route("/listings", get(handle_get_listings).post(handle_create_listing))
        .route("/listings/:id", get(handle_get_listing))
        .route("/listings/:id/swap-request", post(handle_swap_request))
        .route("/listings/:id/redeem", post(handle_redeem))
        .route("/profiles/:user_id", get(handle_get_profile))
        .layer(cors)
        .layer(DefaultBodyLimit::max(1024 * 1024))
        .with_state(state)
}

fn listing_or_not_found<'a>(state: &'a AppState, id: &str) -> Result<&'a Listing, AppError> {
    find_listing(&state.listings, id).ok_or_else(|| AppError::ListingNotFound(id.to_string()))
}

// endregion: --- Router

// region:    --- Query Handlers

pub async fn handle_health() -> &'static str {
    "ok"
}

/// 카탈로그 조회 (검색, 필터, 정렬, 노출 개수)
pub async fn handle_get_listings(
    State(state): State<AppState>,
    Query(params): Query<CatalogParams>,
) -> Response {
    let query = CatalogQuery::from(params);
    info!("{:<12} --> 카탈로그 조회: {:?}", "HandlerQuery", query);
    let view = compute_view(&state.listings, &query);
    Json(view).into_response()
}

/// 상품 조회
pub async fn handle_get_listing(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ListingDetail>, AppError> {
    info!("{:<12} --> 상품 조회 id: {}", "HandlerQuery", id);
    let listing = listing_or_not_found(&state, &id)?;
    Ok(Json(ListingDetail::from(listing.clone())))
}

/// 프로필 조회
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Profile>, AppError> {
    info!("{:<12} --> 프로필 조회 id: {}", "HandlerQuery", user_id);
    let profile = state.profiles.get_profile(&user_id).await?;
    profile.map(Json).ok_or(AppError::ProfileNotFound(user_id))
}

// endregion: --- Query Handlers

// region:    --- Command Handlers

/// 상품 등록 요청 처리 (접수만 하고 컬렉션에는 추가하지 않음)
pub async fn handle_create_listing(
    Json(draft): Json<ListingDraft>,
) -> Result<(StatusCode, Json<DraftReceipt>), AppError> {
    info!("{:<12} --> 상품 등록 요청 처리 시작", "Command");
    let receipt = submit_draft(draft)?;
    Ok((StatusCode::ACCEPTED, Json(receipt)))
}

/// 교환 요청 처리
pub async fn handle_swap_request(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(cmd): Json<SwapRequestCommand>,
) -> Result<Json<ExchangeNotice>, AppError> {
    info!("{:<12} --> 교환 요청 처리 시작 id: {}", "Command", id);
    let listing = listing_or_not_found(&state, &id)?;
    let notice = command_handle_swap_request(cmd, listing)?;
    Ok(Json(notice))
}

/// 포인트 교환 요청 처리
pub async fn handle_redeem(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(cmd): Json<RedeemCommand>,
) -> Result<Json<ExchangeNotice>, AppError> {
    info!("{:<12} --> 포인트 교환 요청 처리 시작 id: {}", "Command", id);
    let listing = listing_or_not_found(&state, &id)?;
    let notice = command_handle_redeem(cmd, listing)?;
    Ok(Json(notice))
}

// endregion: --- Command Handlers
