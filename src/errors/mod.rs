//! 에러 모듈
//!
//! 라이브러리 전역에서 사용하는 [`AuthError`]와 결과 타입 별칭을 재노출합니다.

pub mod errors;

pub use errors::*;
