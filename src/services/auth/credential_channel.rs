//! 요청 자격 증명 채널
//!
//! 로그인 이후의 요청에 세션 토큰을 자동으로 실어 보내는 경로입니다.
//! 기본 구현은 `reqwest` 쿠키 저장소(`Jar`)에 `token` 쿠키를 심고,
//! 같은 `Jar`를 공유하는 HTTP 클라이언트가 이후 요청마다 쿠키를 첨부합니다.

use std::sync::Arc;

use log::debug;
use reqwest::Url;
use reqwest::cookie::{CookieStore, Jar};

/// 세션 토큰을 담는 쿠키 이름
pub const TOKEN_COOKIE_NAME: &str = "token";

/// 이후 요청에 세션 토큰을 실어 보내는 채널
pub trait CredentialChannel: Send + Sync {
    /// 세션 토큰 설정. 기존 값은 덮어씀
    fn set_token(&self, token: &str);

    /// 다음 요청에 실릴 세션 토큰
    fn current_token(&self) -> Option<String>;
}

/// 쿠키 기반 자격 증명 채널
///
/// 만료, 도메인, 보안 속성 없이 `token=<값>` 형태로만 기록합니다.
/// 토큰은 쿠키 값으로 안전한 문자열이라고 가정합니다. 인코딩하지 않으므로
/// `;`가 들어 있으면 그 앞부분까지만 쿠키 값이 됩니다.
pub struct CookieCredentialChannel {
    jar: Arc<Jar>,
    url: Url,
}

impl CookieCredentialChannel {
    /// `url`은 쿠키가 적용될 API 루트 주소입니다.
    pub fn new(jar: Arc<Jar>, url: Url) -> Self {
        Self { jar, url }
    }

    /// HTTP 클라이언트에 연결할 쿠키 저장소
    pub fn jar(&self) -> Arc<Jar> {
        Arc::clone(&self.jar)
    }
}

impl CredentialChannel for CookieCredentialChannel {
    fn set_token(&self, token: &str) {
        self.jar.add_cookie_str(&format!("{}={}", TOKEN_COOKIE_NAME, token), &self.url);
        debug!("세션 쿠키 설정: {}", self.url);
    }

    fn current_token(&self) -> Option<String> {
        let header = self.jar.cookies(&self.url)?;
        let header = header.to_str().ok()?;

        header
            .split(';')
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == TOKEN_COOKIE_NAME)
            .map(|(_, value)| value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channel(url: &str) -> CookieCredentialChannel {
        CookieCredentialChannel::new(Arc::new(Jar::default()), Url::parse(url).unwrap())
    }

    #[test]
    fn test_no_token_before_sign_in() {
        let channel = channel("https://api.example.com/7-6");

        assert_eq!(channel.current_token(), None);
    }

    #[test]
    fn test_set_token_overwrites() {
        let channel = channel("https://api.example.com/7-6");

        channel.set_token("first");
        channel.set_token("tok123");

        assert_eq!(channel.current_token().as_deref(), Some("tok123"));
    }

    #[test]
    fn test_cookie_is_attached_to_other_api_paths() {
        let channel = channel("https://api.example.com/7-6");
        channel.set_token("tok123");

        let other = Url::parse("https://api.example.com/7-6/users/me").unwrap();
        let header = channel.jar().cookies(&other).unwrap();

        assert_eq!(header.to_str().unwrap(), "token=tok123");
    }

    #[test]
    fn test_token_is_cut_at_cookie_separator() {
        let channel = channel("https://api.example.com/7-6");

        channel.set_token("ab;cd");

        assert_eq!(channel.current_token().as_deref(), Some("ab"));
    }

    #[test]
    fn test_cookie_is_not_sent_to_other_hosts() {
        let channel = channel("https://api.example.com/7-6");
        channel.set_token("tok123");

        let foreign = Url::parse("https://evil.example.org/").unwrap();
        assert!(channel.jar().cookies(&foreign).is_none());
    }
}
