use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum ExchangeNotice {
    // 교환 요청 알림
    SwapRequested {
        listing_id: String,
        requester_id: String,
        offered_listing_id: Option<String>,
        note: Option<String>,
        uploader: String,
        message: String,
        timestamp: DateTime<Utc>,
    },
    // 포인트 교환 알림
    ItemRedeemed {
        listing_id: String,
        redeemer_id: String,
        points: u32,
        uploader: String,
        message: String,
        timestamp: DateTime<Utc>,
    },
}

impl ExchangeNotice {
    pub fn listing_id(&self) -> &str {
        match self {
            Self::SwapRequested { listing_id, .. } | Self::ItemRedeemed { listing_id, .. } => {
                listing_id
            }
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::SwapRequested { message, .. } | Self::ItemRedeemed { message, .. } => message,
        }
    }
}
