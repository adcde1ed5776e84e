pub mod queries;
pub mod store;

use serde::{Deserialize, Serialize};

// 사용자 프로필 모델
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, sqlx::FromRow)]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub avatar_url: Option<String>,
    pub points: i64,
}
