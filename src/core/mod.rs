//! # Core Module
//!
//! 로그인 흐름의 협력 객체를 조립하는 [`AuthContext`]를 제공합니다.
//!
//! ## 의존성 주입 방식
//!
//! 전역 싱글톤이나 서비스 로케이터를 사용하지 않습니다. 각 서비스는
//! 생성자에서 `Arc<dyn Trait>` 형태로 협력 객체를 받고, 조립은 컨텍스트가 담당합니다.
//!
//! | 협력 객체 | trait | 기본 구현 |
//! |-----------|-------|-----------|
//! | 공유 사용자 상태 | `UserStore` | `InMemoryUserStore` |
//! | 영구 저장소 | `TokenStorage` | `FileTokenStorage` |
//! | 요청 자격 증명 | `CredentialChannel` | `CookieCredentialChannel` |

pub mod context;

pub use context::*;
