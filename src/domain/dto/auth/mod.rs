//! 로그인 API 요청/응답 DTO
//!
//! 원격 인증 서비스와 주고받는 JSON 본문을 그대로 매핑합니다.
//! 필드 이름은 서버 계약에 맞춰 camelCase로 직렬화됩니다.

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
