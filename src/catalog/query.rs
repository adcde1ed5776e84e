/// 카탈로그 조회 조건
/// 검색어, 카테고리/사이즈/상태 필터, 정렬 기준, 노출 개수를 하나의 불변 값으로 다룬다.
/// 조건 변경은 필드 수정이 아닌 새 조회 조건으로의 교체로 표현한다.
// region:    --- Imports
use crate::listing::model::Listing;
use serde::Deserialize;

// endregion: --- Imports

// 최초 노출 개수
pub const INITIAL_VISIBLE: usize = 8;

// "더 보기" 1회당 추가 노출 개수
pub const LOAD_MORE_STEP: usize = 4;

// 전체 선택 값
const ALL: &str = "all";

// region:    --- Filter

/// 필터 값 (전체 또는 특정 토큰)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Only(String),
}

impl Filter {
    /// 컨트롤 값 파싱 ("all" 또는 빈 값은 전체)
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case(ALL) {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Only(token) => Some(token),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

// endregion: --- Filter

// region:    --- Sort Key

/// 정렬 기준
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Recent,
    PointsAscending,
    PointsDescending,
    Popularity,
}

impl SortKey {
    /// 정렬 값 파싱 (알 수 없는 값은 최신순)
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "points-low" | "points-asc" | "points-ascending" => Self::PointsAscending,
            "points-high" | "points-desc" | "points-descending" => Self::PointsDescending,
            "popular" | "popularity" => Self::Popularity,
            _ => Self::Recent,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Recent => "recent",
            Self::PointsAscending => "points-low",
            Self::PointsDescending => "points-high",
            Self::Popularity => "popular",
        }
    }
}

// endregion: --- Sort Key

// region:    --- Catalog Query

/// 카탈로그 조회 조건 (불변 값)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogQuery {
    search: String,
    category: Filter,
    size: Filter,
    condition: Filter,
    sort: SortKey,
    visible_count: usize,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: Filter::All,
            size: Filter::All,
            condition: Filter::All,
            sort: SortKey::Recent,
            visible_count: INITIAL_VISIBLE,
        }
    }
}

impl CatalogQuery {
    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn category(&self) -> &Filter {
        &self.category
    }

    pub fn size(&self) -> &Filter {
        &self.size
    }

    pub fn condition(&self) -> &Filter {
        &self.condition
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    /// 검색어 변경 (노출 개수 초기화)
    pub fn with_search(&self, search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            visible_count: INITIAL_VISIBLE,
            ..self.clone()
        }
    }

    pub fn with_category(&self, category: Filter) -> Self {
        Self {
            category,
            visible_count: INITIAL_VISIBLE,
            ..self.clone()
        }
    }

    pub fn with_size(&self, size: Filter) -> Self {
        Self {
            size,
            visible_count: INITIAL_VISIBLE,
            ..self.clone()
        }
    }

    pub fn with_condition(&self, condition: Filter) -> Self {
        Self {
            condition,
            visible_count: INITIAL_VISIBLE,
            ..self.clone()
        }
    }

    pub fn with_sort(&self, sort: SortKey) -> Self {
        Self {
            sort,
            visible_count: INITIAL_VISIBLE,
            ..self.clone()
        }
    }

    /// 노출 개수 지정 (필터 유지)
    pub fn with_visible_count(&self, visible_count: usize) -> Self {
        Self {
            visible_count,
            ..self.clone()
        }
    }

    /// 더 보기
    pub fn load_more(&self) -> Self {
        self.with_visible_count(self.visible_count.saturating_add(LOAD_MORE_STEP))
    }

    /// 필터 전체 해제 (정렬 기준은 유지)
    pub fn cleared(&self) -> Self {
        Self {
            sort: self.sort,
            ..Self::default()
        }
    }

    /// 조건 일치 여부 (모든 조건을 만족해야 함)
    pub fn matches(&self, listing: &Listing) -> bool {
        self.matches_search(listing)
            && self.matches_category(listing)
            && self.matches_size(listing)
            && self.matches_condition(listing)
    }

    // 검색어: 제목 또는 카테고리 부분 일치 (대소문자 무시)
    fn matches_search(&self, listing: &Listing) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let term = self.search.to_lowercase();
        listing.title.to_lowercase().contains(&term)
            || listing.category.to_lowercase().contains(&term)
    }

    // 카테고리: 부분 일치 (대소문자 무시)
    fn matches_category(&self, listing: &Listing) -> bool {
        self.category.token().map_or(true, |token| {
            listing
                .category
                .to_lowercase()
                .contains(&token.to_lowercase())
        })
    }

    // 사이즈: 정확히 일치 (대소문자 구분)
    fn matches_size(&self, listing: &Listing) -> bool {
        self.size.token().map_or(true, |token| listing.size == token)
    }

    // 상태: 일치 (대소문자 무시)
    fn matches_condition(&self, listing: &Listing) -> bool {
        self.condition
            .token()
            .map_or(true, |token| listing.condition.to_lowercase() == token.to_lowercase())
    }
}

// endregion: --- Catalog Query

// region:    --- Catalog Params

/// 조회 요청 파라미터 (HTTP 쿼리 스트링)
#[derive(Debug, Default, Deserialize)]
pub struct CatalogParams {
    pub search: Option<String>,
    pub category: Option<String>,
    pub size: Option<String>,
    pub condition: Option<String>,
    pub sort: Option<String>,
    pub visible: Option<String>,
}

impl From<CatalogParams> for CatalogQuery {
    fn from(params: CatalogParams) -> Self {
        let query = CatalogQuery::default()
            .with_search(params.search.unwrap_or_default())
            .with_category(Filter::parse(params.category.as_deref().unwrap_or(ALL)))
            .with_size(Filter::parse(params.size.as_deref().unwrap_or(ALL)))
            .with_condition(Filter::parse(params.condition.as_deref().unwrap_or(ALL)))
            .with_sort(SortKey::parse(params.sort.as_deref().unwrap_or_default()));

        // 숫자가 아닌 노출 개수는 무시
        match params.visible.and_then(|v| v.trim().parse::<usize>().ok()) {
            Some(visible) => query.with_visible_count(visible),
            None => query,
        }
    }
}

// endregion: --- Catalog Params
