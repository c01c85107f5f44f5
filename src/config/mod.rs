//! # Configuration Module
//!
//! 인증 클라이언트의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수(및 `.env` 파일)에서 값을 읽고, 없으면 개발용 기본값을 사용합니다.
//!
//! ## 모듈 구성
//!
//! - [`api_config`] - 원격 인증 API 주소, 로컬 저장소 경로
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{ApiConfig, StorageConfig};
//!
//! let base_url = ApiConfig::base_url();
//! let login_url = ApiConfig::login_url_for(&base_url, &ApiConfig::login_path())?;
//! let storage_path = StorageConfig::path();
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! | 변수 | 기본값 |
//! |------|--------|
//! | `AUTH_API_BASE_URL` | `https://sp-taskify-api.vercel.app/7-6` |
//! | `AUTH_LOGIN_PATH` | `/auth/login` |
//! | `TOKEN_STORE_PATH` | `.auth_session/storage.json` |
//! | `PROFILE` | `dev` (`.env.dev` 로드) |
//! | `RUST_LOG` | `info` |

pub mod api_config;

pub use api_config::*;
