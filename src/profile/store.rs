// region:    --- Imports
use super::{queries, Profile};
use crate::database::DatabaseManager;
use async_trait::async_trait;
use sqlx::Error as SqlxError;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

// endregion: --- Imports

// region:    --- Profile Store Trait
/// 프로필 저장소 트레이트
/// 재시도/캐시는 호출 측에서 사용자 id 기준으로 관리한다고 가정
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn get_profile(&self, user_id: &str) -> Result<Option<Profile>, SqlxError>;
}

// endregion: --- Profile Store Trait

// region:    --- Postgres Profile Store
/// 프로필 저장소 구현체 (PostgreSQL)
pub struct PostgresProfileStore {
    db_manager: Arc<DatabaseManager>,
}

impl PostgresProfileStore {
    pub fn new(db_manager: Arc<DatabaseManager>) -> Self {
        Self { db_manager }
    }
}

#[async_trait]
impl ProfileStore for PostgresProfileStore {
    async fn get_profile(&self, user_id: &str) -> Result<Option<Profile>, SqlxError> {
        info!("{:<12} --> 프로필 조회 id: {}", "Profile", user_id);
        sqlx::query_as::<_, Profile>(queries::GET_PROFILE)
            .bind(user_id)
            .fetch_optional(&*self.db_manager.pool)
            .await
    }
}

// endregion: --- Postgres Profile Store

// region:    --- In-Memory Profile Store
/// 프로필 저장소 구현체 (메모리, DATABASE_URL 미설정 시 및 테스트용)
#[derive(Default)]
pub struct InMemoryProfileStore {
    profiles: HashMap<String, Profile>,
}

impl InMemoryProfileStore {
    pub fn new(profiles: impl IntoIterator<Item = Profile>) -> Self {
        Self {
            profiles: profiles
                .into_iter()
                .map(|profile| (profile.id.clone(), profile))
                .collect(),
        }
    }

    /// 기본 프로필 (sql/01-seed-profiles.sql 과 동일)
    pub fn seeded() -> Self {
        Self::new([
            Profile {
                id: "demo-user".to_string(),
                name: "Sarah Johnson".to_string(),
                avatar_url: None,
                points: 150,
            },
            Profile {
                id: "emma".to_string(),
                name: "Emma Wilson".to_string(),
                avatar_url: None,
                points: 85,
            },
            Profile {
                id: "maya".to_string(),
                name: "Maya Patel".to_string(),
                avatar_url: None,
                points: 120,
            },
        ])
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn get_profile(&self, user_id: &str) -> Result<Option<Profile>, SqlxError> {
        info!("{:<12} --> 프로필 조회 id: {} (memory)", "Profile", user_id);
        Ok(self.profiles.get(user_id).cloned())
    }
}

// endregion: --- In-Memory Profile Store
