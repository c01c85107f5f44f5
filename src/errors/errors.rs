//! 인증 클라이언트 전역에서 사용하는 에러 시스템
//!
//! `thiserror` 기반의 단일 에러 타입 [`AuthError`]를 제공합니다.
//! 로그인 실패, 네트워크 오류, 응답 파싱 오류를 서로 다른 변형으로 보존하되,
//! 화면에 노출되는 메시지 규약은 그대로 유지합니다.
//!
//! ## 메시지 규약
//!
//! | AuthError | `to_string()` |
//! |-----------|---------------|
//! | `LoginFailed` | `"Login failed"` |
//! | `Transport` | 하위 전송 계층의 에러 메시지 그대로 |
//! | `InvalidResponse` | 응답 파싱 에러 메시지 그대로 |
//! | `Storage` | `"Storage error: ..."` |
//! | `Config` | `"Configuration error: ..."` |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AuthError;
//!
//! match action.execute(credentials).await {
//!     Ok(session) => log::info!("로그인 성공: {}", session.user.email),
//!     Err(e) if e.is_authentication_failure() => log::warn!("{}", e),
//!     Err(e) => log::error!("{}", e),
//! }
//! ```

use thiserror::Error;

/// 로그인 요청이 실패했을 때 사용하는 고정 메시지
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed";

/// 인증 클라이언트 전역 에러 타입
#[derive(Error, Debug)]
pub enum AuthError {
    /// 서버가 2xx 이외의 상태 코드로 응답함
    #[error("Login failed")]
    LoginFailed {
        /// 서버가 돌려준 HTTP 상태 코드
        status: u16,
    },

    /// 요청 전송 자체가 실패함 (연결 거부, DNS, TLS 등)
    #[error("{0}")]
    Transport(String),

    /// 성공 응답이지만 본문을 `SessionResult`로 해석할 수 없음
    #[error("{0}")]
    InvalidResponse(String),

    /// 영구 저장소 쓰기/읽기 실패
    #[error("Storage error: {0}")]
    Storage(String),

    /// 잘못된 설정값 (URL 파싱 실패 등)
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AuthError {
    /// 서버가 인증을 거부했거나 인증 응답을 신뢰할 수 없는 경우인지 확인
    pub fn is_authentication_failure(&self) -> bool {
        matches!(self, AuthError::LoginFailed { .. } | AuthError::InvalidResponse(_))
    }

    /// 서버 응답 상태 코드 (상태 코드 기반 실패일 때만)
    pub fn status(&self) -> Option<u16> {
        match self {
            AuthError::LoginFailed { status } => Some(*status),
            _ => None,
        }
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AuthResult<T> = Result<T, AuthError>;

/// 외부 라이브러리 에러를 AuthError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 저장소 에러로 변환합니다.
    fn storage_context(self, msg: &str) -> AuthResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn storage_context(self, msg: &str) -> AuthResult<T> {
        self.map_err(|e| AuthError::Storage(format!("{}: {}", msg, e)))
    }
}
