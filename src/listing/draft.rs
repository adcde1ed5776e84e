/// 상품 등록 요청 처리
/// 검증 후 접수 확인만 반환하며, 상품 컬렉션에는 추가되지 않는다.
// region:    --- Imports
use super::model::{ConditionTier, DEFAULT_SUGGESTED_POINTS};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

// endregion: --- Imports

// 최대 이미지 수
pub const MAX_IMAGES: usize = 5;

// region:    --- Draft

/// 상품 등록 요청
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ListingDraft {
    pub title: String,
    pub description: String,
    pub category: String,
    pub size: String,
    pub condition: String,
    pub points: Option<u32>,
    pub images: Vec<String>,
    pub tags: Vec<String>,
}

/// 검증 실패 항목
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: &'static str,
    pub reason: &'static str,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("등록 정보가 올바르지 않습니다 ({} 항목)", .issues.len())]
    Invalid { issues: Vec<FieldIssue> },
}

/// 등록 접수 확인
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct DraftReceipt {
    pub draft: ListingDraft,
    pub points: u32,
    pub suggested_points: u32,
    pub status: &'static str,
    pub message: String,
}

impl FieldIssue {
    fn new(field: &'static str, reason: &'static str) -> Self {
        Self { field, reason }
    }
}

/// 상태 라벨에 따른 추천 포인트 (알 수 없는 상태는 기본값)
pub fn suggest_points(condition: &str) -> u32 {
    ConditionTier::from_label(condition)
        .map(|tier| tier.suggested_points())
        .unwrap_or(DEFAULT_SUGGESTED_POINTS)
}

/// 태그 정리 (공백 제거, 빈 태그 및 중복 제거)
fn normalize_tags(tags: &[String]) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim();
        if !tag.is_empty() && !normalized.iter().any(|t| t == tag) {
            normalized.push(tag.to_string());
        }
    }
    normalized
}

/// 상품 등록 요청 검증 및 접수
pub fn submit_draft(draft: ListingDraft) -> Result<DraftReceipt, DraftError> {
    info!("{:<12} --> 상품 등록 요청 검증: {:?}", "Draft", draft.title);
    let mut issues = Vec::new();

    if draft.title.trim().is_empty() {
        issues.push(FieldIssue::new("title", "required"));
    }
    if draft.category.trim().is_empty() {
        issues.push(FieldIssue::new("category", "required"));
    }

    let tier = if draft.condition.trim().is_empty() {
        issues.push(FieldIssue::new("condition", "required"));
        None
    } else {
        let tier = ConditionTier::from_label(&draft.condition);
        if tier.is_none() {
            issues.push(FieldIssue::new("condition", "unknown"));
        }
        tier
    };

    let images: Vec<String> = draft
        .images
        .iter()
        .map(|image| image.trim().to_string())
        .filter(|image| !image.is_empty())
        .collect();
    if images.is_empty() {
        issues.push(FieldIssue::new("images", "at least one image is required"));
    } else if images.len() > MAX_IMAGES {
        issues.push(FieldIssue::new("images", "at most 5 images are allowed"));
    }

    if draft.points == Some(0) {
        issues.push(FieldIssue::new("points", "must be positive"));
    }

    if !issues.is_empty() {
        warn!(
            "{:<12} --> 상품 등록 요청 검증 실패: {} 항목",
            "Draft",
            issues.len()
        );
        return Err(DraftError::Invalid { issues });
    }

    let suggested_points = suggest_points(&draft.condition);
    let points = draft.points.unwrap_or(suggested_points);

    let normalized = ListingDraft {
        title: draft.title.trim().to_string(),
        description: draft.description.trim().to_string(),
        category: draft.category.trim().to_string(),
        size: draft.size.trim().to_string(),
        condition: tier.map(|t| t.label().to_string()).unwrap_or_default(),
        points: Some(points),
        tags: normalize_tags(&draft.tags),
        images,
    };

    info!("{:<12} --> 상품 등록 접수 완료: {}", "Draft", normalized.title);
    Ok(DraftReceipt {
        draft: normalized,
        points,
        suggested_points,
        status: "pending_review",
        message: "Your item has been submitted for review and will be available soon."
            .to_string(),
    })
}

// endregion: --- Draft
