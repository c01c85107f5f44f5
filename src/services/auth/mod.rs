//! 로그인 서비스 모듈
//!
//! 원격 인증 서비스와의 단일 로그인 교환과, 그 결과를 공유 상태에 반영하는
//! 액션을 제공합니다.
//!
//! # Features
//!
//! - 이메일/비밀번호 로그인 요청 ([`SignInService`])
//! - 액세스 토큰 영구 저장 (`accessToken` 키)
//! - 쿠키 기반 자격 증명 채널 ([`CookieCredentialChannel`])
//! - 로딩/에러/성공 상태 보고 ([`SignInAction`])
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::core::AuthContext;
//! use crate::domain::dto::auth::Credentials;
//!
//! let context = AuthContext::builder().build()?;
//! let session = context
//!     .sign_in_action()
//!     .execute(Credentials::new("a@b.com", "x"))
//!     .await?;
//! ```

pub mod credential_channel;
pub mod sign_in_service;
pub mod sign_in_action;

pub use credential_channel::*;
pub use sign_in_service::*;
pub use sign_in_action::*;
