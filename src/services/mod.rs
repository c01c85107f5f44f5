//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 로그인 흐름을 구성하는 서비스들을 제공합니다. 모든 의존성은
//! 생성자에서 명시적으로 주입됩니다 ([`crate::core::AuthContext`] 참고).

pub mod auth;
