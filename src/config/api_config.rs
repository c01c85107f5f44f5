//! # API & Storage Configuration Module
//!
//! 원격 인증 서비스 주소와 로컬 저장소 경로를 환경 변수에서 읽어옵니다.
//! 모든 값에 개발용 기본값이 있으므로 설정 없이도 동작합니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! export AUTH_API_BASE_URL="https://sp-taskify-api.vercel.app/7-6"
//! export AUTH_LOGIN_PATH="/auth/login"
//! export TOKEN_STORE_PATH=".auth_session/storage.json"
//! ```

use std::env;
use std::path::PathBuf;

use reqwest::Url;

use crate::errors::{AuthError, AuthResult};

pub const DEFAULT_API_BASE_URL: &str = "https://sp-taskify-api.vercel.app/7-6";
pub const DEFAULT_LOGIN_PATH: &str = "/auth/login";
pub const DEFAULT_TOKEN_STORE_PATH: &str = ".auth_session/storage.json";

/// 원격 인증 API 설정
pub struct ApiConfig;

impl ApiConfig {
    /// API 루트 주소 (`AUTH_API_BASE_URL`)
    pub fn base_url() -> String {
        env::var("AUTH_API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string())
    }

    /// 로그인 경로 (`AUTH_LOGIN_PATH`)
    pub fn login_path() -> String {
        env::var("AUTH_LOGIN_PATH").unwrap_or_else(|_| DEFAULT_LOGIN_PATH.to_string())
    }

    /// 루트 주소와 경로를 이어 붙여 로그인 주소를 만듭니다.
    ///
    /// `Url::join`은 루트의 마지막 경로 세그먼트를 대체하므로 문자열로 결합합니다.
    ///
    /// ```rust,ignore
    /// let url = ApiConfig::login_url_for("https://api.example.com/7-6/", "auth/login")?;
    /// assert_eq!(url.as_str(), "https://api.example.com/7-6/auth/login");
    /// ```
    pub fn login_url_for(base_url: &str, login_path: &str) -> AuthResult<Url> {
        let base = base_url.trim_end_matches('/');
        let path = login_path.trim_start_matches('/');
        parse_url(&format!("{}/{}", base, path))
    }
}

/// 로컬 영구 저장소 설정
pub struct StorageConfig;

impl StorageConfig {
    /// 토큰 저장 파일 경로 (`TOKEN_STORE_PATH`)
    pub fn path() -> PathBuf {
        env::var("TOKEN_STORE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_TOKEN_STORE_PATH))
    }
}

/// 설정 문자열을 URL로 파싱. 실패하면 [`AuthError::Config`]
pub fn parse_url(raw: &str) -> AuthResult<Url> {
    Url::parse(raw).map_err(|e| AuthError::Config(format!("잘못된 URL '{}': {}", raw, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_login_url_keeps_base_path() {
        let url = ApiConfig::login_url_for(DEFAULT_API_BASE_URL, DEFAULT_LOGIN_PATH).unwrap();

        assert_eq!(url.as_str(), "https://sp-taskify-api.vercel.app/7-6/auth/login");
    }

    #[test]
    fn test_login_url_normalizes_slashes() {
        let url = ApiConfig::login_url_for("http://127.0.0.1:8080/", "auth/login").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/auth/login");

        let url = ApiConfig::login_url_for("http://127.0.0.1:8080/v1/", "/auth/login").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/v1/auth/login");
    }

    #[test]
    fn test_invalid_base_url_is_config_error() {
        let result = ApiConfig::login_url_for("not a url", DEFAULT_LOGIN_PATH);

        assert!(matches!(result, Err(AuthError::Config(_))));
    }

    #[test]
    fn test_default_store_path_is_relative_json_file() {
        let path = PathBuf::from(DEFAULT_TOKEN_STORE_PATH);

        assert!(path.is_relative());
        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("storage.json"));
        assert_eq!(path.parent(), Some(Path::new(".auth_session")));
    }
}
