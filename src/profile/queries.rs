/// 프로필 조회
pub const GET_PROFILE: &str = "SELECT id, name, avatar_url, points FROM profiles WHERE id = $1";
