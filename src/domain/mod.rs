//! # Domain Layer Module
//!
//! 로그인 흐름에서 오가는 데이터의 형태를 정의합니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── DTOs      - 서버와 주고받는 원본 JSON (Credentials, SessionResult)
//! └── Entities  - 정규화된 도메인 객체 (User)
//!      │
//!      ▼
//! Services (SignInService, SignInAction)
//!      │
//!      ▼
//! Storage / State / Credential Channel
//! ```

pub mod dto;
pub mod entities;
