use serde::{Deserialize, Serialize};

/// 로그인 응답에 포함된 사용자 원본 데이터
///
/// 서버가 보내준 형태 그대로이며, 타임스탬프 필드는 생략될 수 있습니다.
/// 도메인에서 사용할 때는 [`crate::domain::entities::users::User`]로 정규화합니다.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponseUser {
    pub nickname: String,
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub profile_image_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// 로그인 성공 응답 전체
///
/// 요청이 끝날 때까지만 존재하며, 호출자에게 그대로 반환됩니다.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SessionResult {
    pub user: AuthResponseUser,
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_minimal_login_response() {
        let json = r#"{
            "user": {"id": 1, "nickname": "ann", "email": "a@b.com"},
            "accessToken": "tok123"
        }"#;

        let session: SessionResult = serde_json::from_str(json).unwrap();

        assert_eq!(session.access_token, "tok123");
        assert_eq!(session.user.id, 1);
        assert_eq!(session.user.nickname, "ann");
        assert_eq!(session.user.profile_image_url, None);
        assert_eq!(session.user.created_at, None);
        assert_eq!(session.user.updated_at, None);
    }

    #[test]
    fn test_parses_full_login_response() {
        let json = r#"{
            "user": {
                "id": 7,
                "nickname": "bob",
                "email": "bob@example.com",
                "profileImageUrl": null,
                "createdAt": "2024-01-01T00:00:00.000Z",
                "updatedAt": "2024-01-02T00:00:00.000Z"
            },
            "accessToken": "abc"
        }"#;

        let session: SessionResult = serde_json::from_str(json).unwrap();

        assert_eq!(session.user.profile_image_url, None);
        assert_eq!(session.user.created_at.as_deref(), Some("2024-01-01T00:00:00.000Z"));
        assert_eq!(session.user.updated_at.as_deref(), Some("2024-01-02T00:00:00.000Z"));
    }

    #[test]
    fn test_rejects_response_without_token() {
        let json = r#"{"user": {"id": 1, "nickname": "ann", "email": "a@b.com"}}"#;

        assert!(serde_json::from_str::<SessionResult>(json).is_err());
    }
}
