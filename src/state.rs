use std::sync::Arc;

use tracing::info;

use crate::config::Config;
use crate::database::DatabaseManager;
use crate::listing::model::Listing;
use crate::listing::sample::sample_listings;
use crate::profile::store::{InMemoryProfileStore, PostgresProfileStore, ProfileStore};

/// 핸들러 공유 상태
#[derive(Clone)]
pub struct AppState {
    // 서버 시작 시 고정되는 상품 컬렉션 (읽기 전용)
    pub listings: Arc<Vec<Listing>>,
    pub profiles: Arc<dyn ProfileStore>,
}

impl AppState {
    pub fn new(listings: Vec<Listing>, profiles: Arc<dyn ProfileStore>) -> Self {
        Self {
            listings: Arc::new(listings),
            profiles,
        }
    }

    /// 설정에 따라 상태 생성 (DATABASE_URL 이 있으면 PostgreSQL 프로필 저장소)
    pub async fn from_config(config: &Config) -> Result<Self, sqlx::Error> {
        let profiles: Arc<dyn ProfileStore> = match &config.database_url {
            Some(database_url) => {
                let db_manager = Arc::new(
                    DatabaseManager::new(database_url, config.database_max_connections).await?,
                );
                db_manager.initialize_database().await?;
                info!("{:<12} --> 데이터베이스 초기화 성공", "State");
                Arc::new(PostgresProfileStore::new(db_manager))
            }
            None => {
                info!("{:<12} --> DATABASE_URL 미설정: 메모리 프로필 저장소 사용", "State");
                Arc::new(InMemoryProfileStore::seeded())
            }
        };

        let listings = sample_listings();
        info!("{:<12} --> 샘플 상품 {}개 로드", "State", listings.len());
        Ok(Self::new(listings, profiles))
    }
}
