//! Users Entity Module
//!
//! 클라이언트 측 사용자 엔티티를 정의하는 모듈입니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::User;
//!
//! // 로그인 응답의 사용자 데이터를 정규화
//! let user = User::from_auth_response(session.user);
//! assert_eq!(user.created_at, ""); // 서버가 보내지 않은 경우
//! ```

pub mod user;

pub use user::*;
