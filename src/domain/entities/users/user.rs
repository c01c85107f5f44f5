//! User Entity Implementation
//!
//! 로그인 응답을 정규화한 클라이언트 측 사용자 엔티티입니다.
//! 공유 상태 저장소에 보관되는 유일한 사용자 표현입니다.

use serde::{Deserialize, Serialize};
use crate::domain::dto::auth::AuthResponseUser;

/// 타임스탬프가 응답에 없을 때 채워 넣는 기본값
pub const MISSING_TIMESTAMP: &str = "";

/// 정규화된 사용자 엔티티
///
/// [`AuthResponseUser`]와 필드가 같지만 `created_at`/`updated_at`이
/// 항상 존재하는 문자열입니다.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub nickname: String,
    pub id: i64,
    pub email: String,
    /// 프로필 이미지 URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
    /// 생성 시간 (서버가 보내지 않으면 빈 문자열)
    pub created_at: String,
    /// 수정 시간 (서버가 보내지 않으면 빈 문자열)
    pub updated_at: String,
}

impl User {
    /// 로그인 응답의 사용자 데이터를 도메인 사용자로 정규화
    ///
    /// 정책:
    ///
    /// * `created_at`/`updated_at`이 없으면 [`MISSING_TIMESTAMP`] (빈 문자열)
    /// * 값이 있으면 빈 문자열이라도 그대로 통과
    /// * 나머지 필드는 변환 없이 복사
    ///
    /// 이전 상태와 병합하지 않습니다. 결과는 항상 입력에서만 파생됩니다.
    pub fn from_auth_response(raw: AuthResponseUser) -> Self {
        let AuthResponseUser {
            nickname,
            id,
            email,
            profile_image_url,
            created_at,
            updated_at,
        } = raw;

        Self {
            nickname,
            id,
            email,
            profile_image_url,
            created_at: created_at.unwrap_or_else(|| MISSING_TIMESTAMP.to_string()),
            updated_at: updated_at.unwrap_or_else(|| MISSING_TIMESTAMP.to_string()),
        }
    }
}

impl From<AuthResponseUser> for User {
    fn from(raw: AuthResponseUser) -> Self {
        Self::from_auth_response(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_user(created_at: Option<&str>, updated_at: Option<&str>) -> AuthResponseUser {
        AuthResponseUser {
            nickname: "ann".to_string(),
            id: 1,
            email: "a@b.com".to_string(),
            profile_image_url: None,
            created_at: created_at.map(str::to_string),
            updated_at: updated_at.map(str::to_string),
        }
    }

    #[test]
    fn test_missing_timestamps_default_to_empty_string() {
        let user = User::from_auth_response(raw_user(None, None));

        assert_eq!(user.created_at, "");
        assert_eq!(user.updated_at, "");
        assert_eq!(user.id, 1);
        assert_eq!(user.nickname, "ann");
        assert_eq!(user.email, "a@b.com");
    }

    #[test]
    fn test_present_timestamps_pass_through() {
        let user = User::from(raw_user(Some("2024-01-01"), Some("2024-02-02")));

        assert_eq!(user.created_at, "2024-01-01");
        assert_eq!(user.updated_at, "2024-02-02");
    }

    #[test]
    fn test_empty_timestamp_is_kept_as_is() {
        let user = User::from(raw_user(Some(""), None));

        assert_eq!(user.created_at, "");
        assert_eq!(user.updated_at, "");
    }

    #[test]
    fn test_profile_image_is_copied() {
        let mut raw = raw_user(None, None);
        raw.profile_image_url = Some("https://cdn.example.com/a.png".to_string());

        let user = User::from(raw);

        assert_eq!(user.profile_image_url.as_deref(), Some("https://cdn.example.com/a.png"));
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let user = User::from(raw_user(None, None));
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "nickname": "ann",
                "id": 1,
                "email": "a@b.com",
                "createdAt": "",
                "updatedAt": ""
            })
        );
    }
}
