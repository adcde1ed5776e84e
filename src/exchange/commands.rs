/// 교환 관련 커맨드 처리
/// 1. 교환 요청
/// 2. 포인트 교환
/// 두 커맨드 모두 알림만 생성하며, 포인트 잔액이나 상품 상태는 변경하지 않는다.
// region:    --- Imports
use super::events::ExchangeNotice;
use crate::listing::model::Listing;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};
// endregion: --- Imports

// region:    --- Commands
/// 교환 요청 명령
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct SwapRequestCommand {
    pub requester_id: String,
    pub offered_listing_id: Option<String>,
    pub message: Option<String>,
}

/// 포인트 교환 명령
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct RedeemCommand {
    pub redeemer_id: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExchangeError {
    #[error("요청자 정보가 없습니다.")]
    MissingRequester,

    #[error("같은 상품끼리는 교환할 수 없습니다.")]
    SelfSwap,
}

impl ExchangeError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingRequester => "MISSING_REQUESTER",
            Self::SelfSwap => "SELF_SWAP",
        }
    }
}

/// 1. 교환 요청
pub fn handle_swap_request(
    cmd: SwapRequestCommand,
    listing: &Listing,
) -> Result<ExchangeNotice, ExchangeError> {
    info!(
        "{:<12} --> 교환 요청 처리 시작: listing={}, {:?}",
        "Exchange", listing.id, cmd
    );

    let requester_id = cmd.requester_id.trim();
    if requester_id.is_empty() {
        return Err(ExchangeError::MissingRequester);
    }

    if cmd.offered_listing_id.as_deref() == Some(listing.id.as_str()) {
        warn!("{:<12} --> 자기 자신과의 교환 요청: {}", "Exchange", listing.id);
        return Err(ExchangeError::SelfSwap);
    }

    Ok(ExchangeNotice::SwapRequested {
        listing_id: listing.id.clone(),
        requester_id: requester_id.to_string(),
        offered_listing_id: cmd.offered_listing_id,
        note: cmd.message,
        uploader: listing.uploader.name.clone(),
        message: format!(
            "{} will be notified of your swap request. You'll hear back within 24 hours.",
            listing.uploader.name
        ),
        timestamp: Utc::now(),
    })
}

/// 2. 포인트 교환
pub fn handle_redeem(cmd: RedeemCommand, listing: &Listing) -> Result<ExchangeNotice, ExchangeError> {
    info!(
        "{:<12} --> 포인트 교환 처리 시작: listing={}, {:?}",
        "Exchange", listing.id, cmd
    );

    let redeemer_id = cmd.redeemer_id.trim();
    if redeemer_id.is_empty() {
        return Err(ExchangeError::MissingRequester);
    }

    Ok(ExchangeNotice::ItemRedeemed {
        listing_id: listing.id.clone(),
        redeemer_id: redeemer_id.to_string(),
        points: listing.points,
        uploader: listing.uploader.name.clone(),
        message: format!(
            "{} points have been deducted from your balance. Contact {} to arrange pickup/shipping.",
            listing.points, listing.uploader.name
        ),
        timestamp: Utc::now(),
    })
}

// endregion: --- Commands
