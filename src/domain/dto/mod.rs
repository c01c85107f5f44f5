//! # Data Transfer Objects (DTO) Module
//!
//! 원격 인증 서비스와의 데이터 계약을 정의하는 모듈입니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! └── auth/
//!     ├── request.rs   # Credentials (클라이언트 → 서버)
//!     └── response.rs  # SessionResult, AuthResponseUser (서버 → 클라이언트)
//! ```
//!
//! ## 설계 원칙
//!
//! - **서버 계약 우선**: 필드 이름과 선택성은 서버 응답을 그대로 따릅니다
//! - **Entity와 분리**: 정규화는 `entities` 계층에서 명시적으로 수행합니다
//! - **민감 정보 보호**: 비밀번호는 `Debug` 출력에 나타나지 않습니다

pub mod auth;
