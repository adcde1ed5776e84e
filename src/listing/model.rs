use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// 상태 등급을 알 수 없을 때의 기본 추천 포인트
pub const DEFAULT_SUGGESTED_POINTS: u32 = 20;

// 상품(의류) 모델
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub image: String,
    pub images: Vec<String>,
    pub description: String,
    pub category: String,
    pub size: String,
    pub condition: String,
    pub points: u32,
    pub location: String,
    pub posted_at: DateTime<Utc>,
    pub views: u32,
    pub interested: u32,
    pub tags: Vec<String>,
    pub uploader: Uploader,
}

// 등록자 모델 (비정규화되어 상품에 포함)
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Uploader {
    pub name: String,
    pub rating: f64,
    pub total_swaps: u32,
    pub member_since: String,
    pub response_time: String,
    pub verified_profile: bool,
}

/// 상품 상태 등급
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ConditionTier {
    Excellent,
    Good,
    Fair,
}

/// 상태 뱃지 표시 스타일
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ConditionStyle {
    Green,
    Blue,
    Yellow,
    Gray,
}

impl ConditionTier {
    /// 상태 라벨 파싱 (대소문자 무시, 알 수 없는 라벨은 None)
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "excellent" => Some(Self::Excellent),
            "good" => Some(Self::Good),
            "fair" => Some(Self::Fair),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
        }
    }

    /// 상태별 추천 포인트
    pub fn suggested_points(&self) -> u32 {
        match self {
            Self::Excellent => 25,
            Self::Good => 20,
            Self::Fair => 15,
        }
    }

    pub fn style(&self) -> ConditionStyle {
        match self {
            Self::Excellent => ConditionStyle::Green,
            Self::Good => ConditionStyle::Blue,
            Self::Fair => ConditionStyle::Yellow,
        }
    }
}

impl Listing {
    pub fn condition_tier(&self) -> Option<ConditionTier> {
        ConditionTier::from_label(&self.condition)
    }

    /// 상태 뱃지 스타일 (알 수 없는 상태는 기본 회색)
    pub fn condition_style(&self) -> ConditionStyle {
        self.condition_tier()
            .map(|tier| tier.style())
            .unwrap_or(ConditionStyle::Gray)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        let tag = tag.trim().to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == tag)
    }
}

/// 상세 조회 응답 (상품 + 상태 뱃지 스타일)
#[derive(Debug, Serialize)]
pub struct ListingDetail {
    #[serde(flatten)]
    pub listing: Listing,
    pub condition_style: ConditionStyle,
}

impl From<Listing> for ListingDetail {
    fn from(listing: Listing) -> Self {
        let condition_style = listing.condition_style();
        Self {
            listing,
            condition_style,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn condition_label_is_case_insensitive() {
        assert_eq!(ConditionTier::from_label("EXCELLENT"), Some(ConditionTier::Excellent));
        assert_eq!(ConditionTier::from_label(" good "), Some(ConditionTier::Good));
        assert_eq!(ConditionTier::from_label("Fair"), Some(ConditionTier::Fair));
        assert_eq!(ConditionTier::from_label("Like New"), None);
    }

    #[test]
    fn unknown_condition_falls_back_to_gray() {
        let mut listing = crate::listing::sample::sample_listings().remove(0);
        assert_eq!(listing.condition_style(), ConditionStyle::Green);

        listing.condition = "Like New".to_string();
        assert_eq!(listing.condition_style(), ConditionStyle::Gray);
    }

    #[test]
    fn tag_lookup_ignores_case_and_order() {
        let listing = crate::listing::sample::sample_listings().remove(0);
        assert!(listing.has_tag("Denim"));
        assert!(listing.has_tag(" vintage"));
        assert!(!listing.has_tag("wool"));
    }

    #[test]
    fn suggested_points_follow_tier() {
        assert_eq!(ConditionTier::Excellent.suggested_points(), 25);
        assert_eq!(ConditionTier::Good.suggested_points(), 20);
        assert_eq!(ConditionTier::Fair.suggested_points(), 15);
    }
}
