//! 공유 사용자 상태 모듈
//!
//! 로그인 결과를 UI 계층과 공유하기 위한 상태 저장소입니다.
//! 전역 싱글톤 대신 `Arc<dyn UserStore>` 핸들을 명시적으로 전달해서 사용합니다.

pub mod user_store;

pub use user_store::*;
