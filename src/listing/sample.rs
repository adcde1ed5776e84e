/// 샘플 상품 컬렉션
/// 상품 등록/수정/삭제는 컬렉션에 반영되지 않는다고 가정 (서버 시작 시 고정)
// region:    --- Imports
use super::model::{Listing, Uploader};
use chrono::{DateTime, Duration, TimeZone, Utc};

// endregion: --- Imports

// region:    --- Sample Listings

// 등록 시각 계산 기준 시각 (2025-07-12T09:00:00Z)
const BASE_TIMESTAMP: i64 = 1_752_310_800;

const IMAGE_HOST: &str = "https://images.unsplash.com";

fn base_time() -> DateTime<Utc> {
    Utc.timestamp_opt(BASE_TIMESTAMP, 0)
        .single()
        .unwrap_or_default()
}

fn image_url(photo: &str) -> String {
    format!("{}/{}?w=400&h=300&fit=crop", IMAGE_HOST, photo)
}

fn uploader(name: &str, rating: f64, total_swaps: u32, member_since: &str) -> Uploader {
    Uploader {
        name: name.to_string(),
        rating,
        total_swaps,
        member_since: member_since.to_string(),
        response_time: "2 hours".to_string(),
        verified_profile: total_swaps >= 10,
    }
}

// 상품 행 (id, 제목, 사진, 카테고리, 사이즈, 상태, 포인트, 지역, 등록 후 경과 시간)
struct Row<'a> {
    id: &'a str,
    title: &'a str,
    photo: &'a str,
    category: &'a str,
    size: &'a str,
    condition: &'a str,
    points: u32,
    location: &'a str,
    hours_ago: i64,
    tags: &'a [&'a str],
    uploader: Uploader,
}

impl Row<'_> {
    fn into_listing(self) -> Listing {
        let image = image_url(self.photo);
        Listing {
            id: self.id.to_string(),
            title: self.title.to_string(),
            images: vec![image.clone()],
            image,
            description: format!("{} in {} condition.", self.title, self.condition.to_lowercase()),
            category: self.category.to_string(),
            size: self.size.to_string(),
            condition: self.condition.to_string(),
            points: self.points,
            location: self.location.to_string(),
            posted_at: base_time() - Duration::hours(self.hours_ago),
            views: (self.points * 3) % 50 + 10,
            interested: self.points % 9,
            tags: self.tags.iter().map(|t| t.to_string()).collect(),
            uploader: self.uploader,
        }
    }
}

/// 샘플 상품 12개 (컬렉션 순서는 등록 순서가 아님)
pub fn sample_listings() -> Vec<Listing> {
    let rows = vec![
        Row {
            id: "1",
            title: "Vintage Denim Jacket",
            photo: "photo-1551537482-f2075a1d41f2",
            category: "Outerwear",
            size: "M",
            condition: "Excellent",
            points: 25,
            location: "Brooklyn, NY",
            hours_ago: 72,
            tags: &["vintage", "denim", "classic", "blue"],
            uploader: uploader("Emma", 4.9, 34, "January 2023"),
        },
        Row {
            id: "2",
            title: "Floral Summer Dress",
            photo: "photo-1572804013309-59a88b7e92f1",
            category: "Dresses",
            size: "S",
            condition: "Good",
            points: 20,
            location: "Austin, TX",
            hours_ago: 120,
            tags: &["floral", "summer"],
            uploader: uploader("Sophia", 4.8, 21, "May 2023"),
        },
        Row {
            id: "3",
            title: "Designer Wool Coat",
            photo: "photo-1544966503-7cc5ac882d5f",
            category: "Coats",
            size: "L",
            condition: "Excellent",
            points: 40,
            location: "Seattle, WA",
            hours_ago: 24,
            tags: &["designer", "wool", "winter"],
            uploader: uploader("Maya", 5.0, 48, "November 2022"),
        },
        Row {
            id: "4",
            title: "Casual Button-Up Shirt",
            photo: "photo-1596755094514-f87e34085b2c",
            category: "Shirts",
            size: "M",
            condition: "Good",
            points: 15,
            location: "Portland, OR",
            hours_ago: 168,
            tags: &["casual", "cotton"],
            uploader: uploader("Alex", 4.7, 12, "August 2023"),
        },
        Row {
            id: "5",
            title: "Black Leather Boots",
            photo: "photo-1543163521-1bf539c55dd2",
            category: "Shoes",
            size: "8",
            condition: "Good",
            points: 30,
            location: "Chicago, IL",
            hours_ago: 48,
            tags: &["leather", "boots", "black"],
            uploader: uploader("Jordan", 4.6, 9, "February 2024"),
        },
        Row {
            id: "6",
            title: "Cozy Knit Sweater",
            photo: "photo-1434389677669-e08b4cac3105",
            category: "Knitwear",
            size: "M",
            condition: "Excellent",
            points: 25,
            location: "Boston, MA",
            hours_ago: 240,
            tags: &["knit", "winter"],
            uploader: uploader("Riley", 4.9, 27, "March 2023"),
        },
        Row {
            id: "7",
            title: "Plaid Flannel Shirt",
            photo: "photo-1489987707025-afc232f7ea0f",
            category: "Shirts",
            size: "L",
            condition: "Good",
            points: 18,
            location: "Denver, CO",
            hours_ago: 96,
            tags: &["plaid", "flannel"],
            uploader: uploader("Casey", 4.8, 15, "June 2023"),
        },
        Row {
            id: "8",
            title: "Silk Scarf Collection",
            photo: "photo-1601924994987-69e26d50dc26",
            category: "Accessories",
            size: "One Size",
            condition: "Excellent",
            points: 35,
            location: "San Francisco, CA",
            hours_ago: 144,
            tags: &["silk", "scarf"],
            uploader: uploader("Morgan", 5.0, 41, "October 2022"),
        },
        Row {
            id: "9",
            title: "Quilted Puffer Vest",
            photo: "photo-1591047139829-d91aecb6caea",
            category: "Outerwear",
            size: "L",
            condition: "Good",
            points: 22,
            location: "Minneapolis, MN",
            hours_ago: 12,
            tags: &["puffer", "layering"],
            uploader: uploader("Taylor", 4.7, 8, "April 2024"),
        },
        Row {
            id: "10",
            title: "High-Waist Denim Jeans",
            photo: "photo-1541099649105-f69ad21f3246",
            category: "Bottoms",
            size: "S",
            condition: "Fair",
            points: 16,
            location: "Los Angeles, CA",
            hours_ago: 192,
            tags: &["denim", "high-waist"],
            uploader: uploader("Jamie", 4.5, 6, "January 2024"),
        },
        Row {
            id: "11",
            title: "Linen Wrap Top",
            photo: "photo-1485968579580-b6d095142e6e",
            category: "Tops",
            size: "XS",
            condition: "Fair",
            points: 12,
            location: "Miami, FL",
            hours_ago: 216,
            tags: &["linen", "summer"],
            uploader: uploader("Avery", 4.4, 3, "May 2024"),
        },
        Row {
            id: "12",
            title: "Running Windbreaker",
            photo: "photo-1544022613-e87ca75a784a",
            category: "Sports Outerwear",
            size: "L",
            condition: "Excellent",
            points: 28,
            location: "Phoenix, AZ",
            hours_ago: 2,
            tags: &["running", "lightweight"],
            uploader: uploader("Quinn", 4.6, 19, "September 2023"),
        },
    ];

    rows.into_iter().map(Row::into_listing).collect()
}

/// 상품 조회
pub fn find_listing<'a>(listings: &'a [Listing], id: &str) -> Option<&'a Listing> {
    listings.iter().find(|listing| listing.id == id)
}

// endregion: --- Sample Listings

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn sample_ids_are_unique_and_points_positive() {
        let listings = sample_listings();
        assert_eq!(listings.len(), 12);

        let ids: HashSet<&str> = listings.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids.len(), listings.len());
        assert!(listings.iter().all(|l| l.points > 0));
        assert!(listings.iter().all(|l| (0.0..=5.0).contains(&l.uploader.rating)));
    }

    #[test]
    fn find_listing_by_id() {
        let listings = sample_listings();
        let coat = find_listing(&listings, "3").map(|l| l.title.as_str());
        assert_eq!(coat, Some("Designer Wool Coat"));
        assert!(find_listing(&listings, "missing").is_none());
    }
}
