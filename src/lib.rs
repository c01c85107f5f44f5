//! 인증 세션 클라이언트
//!
//! 이메일/비밀번호로 원격 인증 서비스에 로그인하고, 돌려받은 세션 토큰을 저장하며,
//! 공유 사용자 상태를 갱신하는 클라이언트 측 로그인 액션을 제공합니다.
//!
//! # Features
//!
//! - **로그인 요청**: 고정 엔드포인트로의 단일 JSON POST
//! - **이중 토큰 보관**: 영구 저장소(`accessToken`) + 요청 쿠키(`token`)
//! - **상태 보고**: loading / error / user 를 공유 상태 저장소에 기록
//! - **명시적 DI**: 전역 싱글톤 없이 `AuthContext`로 조립
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  SignInAction   │ ← loading / error / success 단계 관리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  SignInService  │ ← POST /auth/login, 응답 파싱, 토큰 영구 저장
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┬──────────────────┬───────────────────┐
//! │  TokenStorage   │ CredentialChannel│    UserStore      │
//! │  (파일/메모리)    │  (쿠키 Jar)       │  (공유 상태)        │
//! └─────────────────┴──────────────────┴───────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use auth_session_client::core::AuthContext;
//! use auth_session_client::domain::dto::auth::Credentials;
//!
//! let context = AuthContext::from_env()?;
//! let session = context
//!     .sign_in_action()
//!     .execute(Credentials::new("a@b.com", "x"))
//!     .await?;
//! ```

pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod services;
pub mod state;
pub mod storage;
