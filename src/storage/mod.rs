//! 영구 저장소 모듈
//!
//! 세션 토큰처럼 프로세스 재시작 이후에도 유지되어야 하는 값을
//! 키-값 형태로 저장하는 저장소 구현을 제공합니다.
//!
//! ## 구현체
//!
//! - [`FileTokenStorage`]: JSON 파일 하나에 모든 키를 저장 (기본값)
//! - [`MemoryTokenStorage`]: 프로세스 메모리에만 저장 (테스트, 임시 세션용)
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::storage::{FileTokenStorage, TokenStorage, ACCESS_TOKEN_KEY};
//!
//! let storage = FileTokenStorage::new(".auth_session/storage.json");
//! storage.set(ACCESS_TOKEN_KEY, "tok123").await?;
//!
//! let token = storage.get(ACCESS_TOKEN_KEY).await?;
//! assert_eq!(token.as_deref(), Some("tok123"));
//! ```

pub mod token_storage;

pub use token_storage::*;
