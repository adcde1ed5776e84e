/// 카탈로그 화면 계산
/// 필터 -> 정렬 -> 노출 개수만큼 자르기. 입력 컬렉션은 변경하지 않는다.
// region:    --- Imports
use super::query::{CatalogQuery, SortKey};
use crate::listing::model::Listing;
use serde::Serialize;
use std::cmp::Reverse;
use tracing::debug;

// endregion: --- Imports

// region:    --- Catalog View

/// 카탈로그 조회 결과
#[derive(Debug, Serialize)]
pub struct CatalogView<'a> {
    // 필터 결과 전체 개수
    pub total: usize,
    pub visible_count: usize,
    pub has_more: bool,
    pub items: Vec<&'a Listing>,
}

/// 조건에 맞는 상품 (컬렉션 순서 유지)
pub fn filter_listings<'a>(listings: &'a [Listing], query: &CatalogQuery) -> Vec<&'a Listing> {
    listings
        .iter()
        .filter(|listing| query.matches(listing))
        .collect()
}

/// 정렬 (동점은 기존 순서 유지)
pub fn sort_listings(listings: &mut [&Listing], sort: SortKey) {
    match sort {
        SortKey::Recent => listings.sort_by_key(|listing| Reverse(listing.posted_at)),
        SortKey::PointsAscending => listings.sort_by_key(|listing| listing.points),
        SortKey::PointsDescending => listings.sort_by_key(|listing| Reverse(listing.points)),
        // 인기순은 등록자 평점 기준
        SortKey::Popularity => {
            listings.sort_by(|a, b| b.uploader.rating.total_cmp(&a.uploader.rating))
        }
    }
}

/// 카탈로그 화면 계산
pub fn compute_view<'a>(listings: &'a [Listing], query: &CatalogQuery) -> CatalogView<'a> {
    let mut matched = filter_listings(listings, query);
    sort_listings(&mut matched, query.sort());

    let total = matched.len();
    matched.truncate(query.visible_count());
    let has_more = total > matched.len();

    debug!(
        "{:<12} --> 조회 결과: 전체 {}, 노출 {}, 정렬 {}",
        "Catalog",
        total,
        matched.len(),
        query.sort().as_str()
    );

    CatalogView {
        total,
        visible_count: query.visible_count(),
        has_more,
        items: matched,
    }
}

// endregion: --- Catalog View

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::query::{Filter, INITIAL_VISIBLE, LOAD_MORE_STEP};
    use crate::listing::sample::sample_listings;
    use std::collections::HashSet;

    fn ids(items: &[&Listing]) -> Vec<String> {
        items.iter().map(|l| l.id.clone()).collect()
    }

    fn browse_listings() -> Vec<Listing> {
        sample_listings().into_iter().take(8).collect()
    }

    #[test]
    fn search_matches_title_or_category_case_insensitive() {
        let listings = browse_listings();
        let view = compute_view(&listings, &CatalogQuery::default().with_search("JACKET"));

        let titles: Vec<&str> = view.items.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, vec!["Vintage Denim Jacket"]);
        assert!(!titles.contains(&"Floral Summer Dress"));

        let shirts = compute_view(&listings, &CatalogQuery::default().with_search("shirts"));
        assert_eq!(shirts.total, 2);
    }

    #[test]
    fn points_high_on_full_sample_starts_with_wool_coat() {
        let listings = sample_listings();
        let query = CatalogQuery::default()
            .with_sort(SortKey::parse("points-high"))
            .with_visible_count(listings.len());
        let view = compute_view(&listings, &query);

        assert_eq!(view.items.first().map(|l| l.title.as_str()), Some("Designer Wool Coat"));
        assert_eq!(view.items.first().map(|l| l.points), Some(40));

        let min = listings.iter().map(|l| l.points).min();
        assert_eq!(view.items.last().map(|l| l.points), min);
    }

    #[test]
    fn category_substring_and_exact_size() {
        let listings = sample_listings();
        let query = CatalogQuery::default()
            .with_category(Filter::parse("outerwear"))
            .with_size(Filter::parse("L"));
        let view = compute_view(&listings, &query);

        assert!(view.total > 0);
        for listing in &view.items {
            assert!(listing.category.to_lowercase().contains("outerwear"));
            assert_eq!(listing.size, "L");
        }
        let mut found = ids(&view.items);
        found.sort();
        assert_eq!(found, vec!["12", "9"]);

        // 사이즈는 대소문자 구분
        let lower = compute_view(&listings, &query.with_size(Filter::parse("l")));
        assert_eq!(lower.total, 0);
    }

    #[test]
    fn condition_is_case_insensitive_equality() {
        let listings = sample_listings();
        let view = compute_view(
            &listings,
            &CatalogQuery::default()
                .with_condition(Filter::parse("FAIR"))
                .with_visible_count(listings.len()),
        );
        assert_eq!(view.total, 2);
        assert!(view.items.iter().all(|l| l.condition == "Fair"));
    }

    #[test]
    fn no_filters_returns_whole_collection() {
        let listings = sample_listings();
        let view = compute_view(&listings, &CatalogQuery::default());
        assert_eq!(view.total, listings.len());
    }

    #[test]
    fn window_of_eight_then_load_more_caps_at_total() {
        let listings = sample_listings();
        let query = CatalogQuery::default();
        assert_eq!(query.visible_count(), INITIAL_VISIBLE);

        let view = compute_view(&listings, &query);
        assert_eq!(view.total, 12);
        assert_eq!(view.items.len(), 8);
        assert!(view.has_more);

        let more = compute_view(&listings, &query.load_more());
        assert_eq!(more.items.len(), 12);
        assert!(!more.has_more);

        let beyond = compute_view(&listings, &query.load_more().load_more());
        assert_eq!(beyond.items.len(), 12);
        assert_eq!(beyond.visible_count, INITIAL_VISIBLE + 2 * LOAD_MORE_STEP);
    }

    #[test]
    fn empty_result_is_not_an_error() {
        let listings = sample_listings();
        let view = compute_view(&listings, &CatalogQuery::default().with_search("tuxedo"));
        assert_eq!(view.total, 0);
        assert!(view.items.is_empty());
        assert!(!view.has_more);
    }

    #[test]
    fn zero_window_reports_more_results() {
        let listings = sample_listings();
        let view = compute_view(&listings, &CatalogQuery::default().with_visible_count(0));
        assert!(view.items.is_empty());
        assert!(view.has_more);
    }

    #[test]
    fn recent_sorts_by_posted_at_descending() {
        let listings = sample_listings();
        let query = CatalogQuery::default().with_visible_count(listings.len());
        let view = compute_view(&listings, &query);

        assert_eq!(view.items.first().map(|l| l.id.as_str()), Some("12"));
        assert!(view
            .items
            .windows(2)
            .all(|pair| pair[0].posted_at >= pair[1].posted_at));
    }

    #[test]
    fn popularity_sorts_by_uploader_rating() {
        let listings = sample_listings();
        let query = CatalogQuery::default()
            .with_sort(SortKey::Popularity)
            .with_visible_count(listings.len());
        let view = compute_view(&listings, &query);

        assert!(view
            .items
            .windows(2)
            .all(|pair| pair[0].uploader.rating >= pair[1].uploader.rating));
    }

    #[test]
    fn output_is_subset_without_duplicates() {
        let listings = sample_listings();
        let all_ids: HashSet<String> = listings.iter().map(|l| l.id.clone()).collect();
        let queries = [
            CatalogQuery::default().with_search("e"),
            CatalogQuery::default().with_category(Filter::parse("shirt")),
            CatalogQuery::default().with_size(Filter::parse("M")).with_sort(SortKey::Popularity),
            CatalogQuery::default().with_visible_count(100),
        ];

        for query in &queries {
            let view = compute_view(&listings, query);
            let found = ids(&view.items);
            let unique: HashSet<String> = found.iter().cloned().collect();
            assert_eq!(unique.len(), found.len());
            assert!(unique.is_subset(&all_ids));
        }
    }

    #[test]
    fn combined_filters_equal_intersection() {
        let listings = sample_listings();
        let by_category = CatalogQuery::default().with_category(Filter::parse("shirts"));
        let by_size = CatalogQuery::default().with_size(Filter::parse("M"));
        let both = by_category.with_size(Filter::parse("M"));

        let left: HashSet<String> = ids(&filter_listings(&listings, &by_category)).into_iter().collect();
        let right: HashSet<String> = ids(&filter_listings(&listings, &by_size)).into_iter().collect();
        let combined: HashSet<String> = ids(&filter_listings(&listings, &both)).into_iter().collect();

        let expected: HashSet<String> = left.intersection(&right).cloned().collect();
        assert_eq!(combined, expected);
        assert_eq!(combined.len(), 1);
    }

    #[test]
    fn same_query_is_idempotent() {
        let listings = sample_listings();
        let query = CatalogQuery::default()
            .with_search("s")
            .with_sort(SortKey::PointsAscending);
        assert_eq!(
            ids(&compute_view(&listings, &query).items),
            ids(&compute_view(&listings, &query).items)
        );
    }

    #[test]
    fn ascending_reversed_matches_descending_points() {
        let listings = sample_listings();
        let mut ascending = filter_listings(&listings, &CatalogQuery::default());
        let mut descending = ascending.clone();
        sort_listings(&mut ascending, SortKey::PointsAscending);
        sort_listings(&mut descending, SortKey::PointsDescending);

        let reversed: Vec<u32> = ascending.iter().rev().map(|l| l.points).collect();
        let points: Vec<u32> = descending.iter().map(|l| l.points).collect();
        assert_eq!(reversed, points);
    }

    #[test]
    fn load_more_is_prefix_stable() {
        let listings = sample_listings();
        let query = CatalogQuery::default()
            .with_sort(SortKey::PointsDescending)
            .with_visible_count(3);
        let before = ids(&compute_view(&listings, &query).items);
        let after = ids(&compute_view(&listings, &query.load_more()).items);

        assert_eq!(after.len(), before.len() + LOAD_MORE_STEP);
        assert_eq!(&after[..before.len()], &before[..]);
    }
}
