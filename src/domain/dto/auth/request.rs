//! 로그인 요청 DTO
//!
//! 로그인 화면에서 입력받은 자격 증명을 서버로 전송하기 위한 구조체입니다.
use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 이메일/비밀번호 자격 증명
///
/// 요청 본문으로 `{"email": ..., "password": ...}` 형태로 직렬화되며,
/// 요청이 끝나면 버려집니다. 어디에도 저장하지 않습니다.
///
/// 검증 규칙은 호출자가 필요할 때 `validate()`로 적용합니다.
/// 로그인 액션 자체는 입력을 사전에 거부하지 않습니다.
#[derive(Clone, Serialize, Deserialize, Validate, PartialEq, Eq)]
pub struct Credentials {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

// 비밀번호가 로그에 남지 않도록 직접 구현
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_exactly_email_and_password() {
        let credentials = Credentials::new("a@b.com", "x");
        let json = serde_json::to_value(&credentials).unwrap();

        assert_eq!(json, serde_json::json!({"email": "a@b.com", "password": "x"}));
    }

    #[test]
    fn test_debug_hides_password() {
        let credentials = Credentials::new("a@b.com", "secret-password");
        let debug = format!("{:?}", credentials);

        assert!(debug.contains("a@b.com"));
        assert!(!debug.contains("secret-password"));
    }

    #[test]
    fn test_validation_rules() {
        assert!(Credentials::new("a@b.com", "x").validate().is_ok());
        assert!(Credentials::new("not-an-email", "x").validate().is_err());
        assert!(Credentials::new("a@b.com", "").validate().is_err());
    }
}
