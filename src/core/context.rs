//! # 인증 컨텍스트
//!
//! 로그인 흐름에 필요한 협력 객체를 한 곳에서 조립하는 명시적 의존성 묶음입니다.
//! 전역 레지스트리 대신 이 컨텍스트를 생성해 필요한 곳에 넘겨줍니다.
//!
//! ```text
//! AuthContext
//! ├── reqwest::Client ──(cookie_provider)──┐
//! ├── CookieCredentialChannel ── Arc<Jar> ─┘  같은 쿠키 저장소 공유
//! ├── Arc<dyn TokenStorage>                   accessToken 영구 저장
//! ├── Arc<dyn UserStore>                      loading / error / user
//! └── Arc<SignInService>
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::core::AuthContext;
//! use crate::state::InMemoryUserStore;
//! use crate::storage::MemoryTokenStorage;
//!
//! let store = Arc::new(InMemoryUserStore::new());
//!
//! let context = AuthContext::builder()
//!     .base_url("http://127.0.0.1:8080")
//!     .user_store(store.clone())
//!     .token_storage(Arc::new(MemoryTokenStorage::new()))
//!     .build()?;
//!
//! context.sign_in_action().execute(credentials).await?;
//! assert!(store.snapshot().is_authenticated());
//! ```

use std::sync::Arc;

use log::info;
use reqwest::cookie::Jar;
use reqwest::{Client, Url};

use crate::config::{ApiConfig, StorageConfig, parse_url};
use crate::errors::{AuthError, AuthResult};
use crate::services::auth::{
    CookieCredentialChannel, CredentialChannel, SignInAction, SignInService,
};
use crate::state::{InMemoryUserStore, UserStore};
use crate::storage::{FileTokenStorage, TokenStorage};

/// 로그인 흐름의 협력 객체 묶음
pub struct AuthContext {
    client: Client,
    api_url: Url,
    channel: Arc<CookieCredentialChannel>,
    storage: Arc<dyn TokenStorage>,
    store: Arc<dyn UserStore>,
    sign_in_service: Arc<SignInService>,
}

impl AuthContext {
    pub fn builder() -> AuthContextBuilder {
        AuthContextBuilder::default()
    }

    /// 환경 변수 기본값으로 컨텍스트 생성
    ///
    /// 파일 저장소([`StorageConfig::path`])와 메모리 상태 저장소를 사용합니다.
    pub fn from_env() -> AuthResult<Self> {
        Self::builder().build()
    }

    /// 로그인 액션 생성
    pub fn sign_in_action(&self) -> SignInAction {
        SignInAction::new(
            Arc::clone(&self.sign_in_service),
            Arc::clone(&self.store),
            Arc::clone(&self.channel) as Arc<dyn CredentialChannel>,
        )
    }

    /// 세션 쿠키가 연결된 HTTP 클라이언트
    ///
    /// 로그인 이후의 API 호출에 이 클라이언트를 사용하면 `token` 쿠키가 자동으로 첨부됩니다.
    pub fn http_client(&self) -> &Client {
        &self.client
    }

    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    pub fn credential_channel(&self) -> &CookieCredentialChannel {
        &self.channel
    }

    pub fn token_storage(&self) -> Arc<dyn TokenStorage> {
        Arc::clone(&self.storage)
    }

    pub fn sign_in_service(&self) -> Arc<SignInService> {
        Arc::clone(&self.sign_in_service)
    }
}

/// [`AuthContext`] 빌더
///
/// 지정하지 않은 항목은 환경 변수 설정에서 채웁니다.
#[derive(Default)]
pub struct AuthContextBuilder {
    base_url: Option<String>,
    login_path: Option<String>,
    storage: Option<Arc<dyn TokenStorage>>,
    store: Option<Arc<dyn UserStore>>,
}

impl AuthContextBuilder {
    /// API 루트 주소 (기본값: `AUTH_API_BASE_URL`)
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// 로그인 경로 (기본값: `AUTH_LOGIN_PATH`)
    pub fn login_path(mut self, login_path: impl Into<String>) -> Self {
        self.login_path = Some(login_path.into());
        self
    }

    /// 영구 저장소 (기본값: `TOKEN_STORE_PATH`의 파일 저장소)
    pub fn token_storage(mut self, storage: Arc<dyn TokenStorage>) -> Self {
        self.storage = Some(storage);
        self
    }

    /// 공유 상태 저장소 (기본값: 새 [`InMemoryUserStore`])
    pub fn user_store(mut self, store: Arc<dyn UserStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn build(self) -> AuthResult<AuthContext> {
        let base_url = self.base_url.unwrap_or_else(ApiConfig::base_url);
        let login_path = self.login_path.unwrap_or_else(ApiConfig::login_path);

        let api_url = parse_url(&base_url)?;
        let login_url = ApiConfig::login_url_for(&base_url, &login_path)?;

        let jar = Arc::new(Jar::default());
        let client = Client::builder()
            .cookie_provider(Arc::clone(&jar))
            .build()
            .map_err(|e| AuthError::Config(format!("HTTP 클라이언트 생성 실패: {}", e)))?;

        let storage = self.storage.unwrap_or_else(|| {
            Arc::new(FileTokenStorage::new(StorageConfig::path())) as Arc<dyn TokenStorage>
        });
        let store = self
            .store
            .unwrap_or_else(|| Arc::new(InMemoryUserStore::new()) as Arc<dyn UserStore>);

        let channel = Arc::new(CookieCredentialChannel::new(jar, api_url.clone()));
        let sign_in_service = Arc::new(SignInService::new(
            client.clone(),
            login_url,
            Arc::clone(&storage),
        ));

        info!(
            "인증 컨텍스트 구성 완료: login_url={}, storage={}",
            sign_in_service.login_url(),
            storage.name()
        );

        Ok(AuthContext {
            client,
            api_url,
            channel,
            storage,
            store,
            sign_in_service,
        })
    }
}
