//! 인증 세션 클라이언트 데모 실행 파일
//!
//! 환경 변수로 받은 자격 증명으로 한 번 로그인하고 결과를 로그로 남깁니다.

use std::process::ExitCode;
use std::sync::Arc;

use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use validator::Validate;

use auth_session_client::core::AuthContext;
use auth_session_client::domain::dto::auth::Credentials;
use auth_session_client::state::InMemoryUserStore;
use auth_session_client::storage::ACCESS_TOKEN_KEY;

#[tokio::main]
async fn main() -> ExitCode {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    let credentials = match load_credentials() {
        Some(credentials) => credentials,
        None => {
            error!("SIGNIN_EMAIL, SIGNIN_PASSWORD 환경 변수가 필요합니다");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = credentials.validate() {
        error!("자격 증명 검증 실패: {}", e);
        return ExitCode::FAILURE;
    }

    let store = Arc::new(InMemoryUserStore::new());
    let context = match AuthContext::builder().user_store(store.clone()).build() {
        Ok(context) => context,
        Err(e) => {
            error!("인증 컨텍스트 구성 실패: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match context.token_storage().get(ACCESS_TOKEN_KEY).await {
        Ok(Some(_)) => info!("이전 세션 토큰이 있습니다. 새 로그인으로 덮어씁니다"),
        Ok(None) => info!("저장된 세션 토큰이 없습니다"),
        Err(e) => warn!("저장소 조회 실패: {}", e),
    }

    info!("🔐 로그인 시도: {}", credentials.email);

    match context.sign_in_action().execute(credentials).await {
        Ok(session) => {
            let state = store.snapshot();
            info!(
                "✅ 로그인 성공: {} (id={}, authenticated={})",
                session.user.nickname,
                session.user.id,
                state.is_authenticated()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(
                "❌ 로그인 실패: {} (state.error={:?})",
                e,
                store.snapshot().error
            );
            ExitCode::FAILURE
        }
    }
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => {
            if let Err(e) = dotenv::from_filename(".env.prod") {
                eprintln!(".env.prod 파일 로드 실패: {}", e);
            }
        }
        "dev" => {
            // 개발 환경에서는 파일이 없어도 무방
            dotenv::from_filename(".env.dev").ok();
        }
        _ => {
            dotenv().ok();
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
}

fn load_credentials() -> Option<Credentials> {
    let email = std::env::var("SIGNIN_EMAIL").ok()?;
    let password = std::env::var("SIGNIN_PASSWORD").ok()?;
    Some(Credentials::new(email, password))
}
