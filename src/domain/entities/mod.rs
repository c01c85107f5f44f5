//! Entities Module
//!
//! 공유 상태에 저장되는 도메인 엔티티를 모아둔 모듈입니다.

pub mod users;
