//! # 로그인 요청 서비스
//!
//! 자격 증명을 원격 인증 서비스로 보내고, 돌려받은 액세스 토큰을
//! 영구 저장소에 기록하는 단일 네트워크 교환을 담당합니다.
//!
//! ## 흐름
//!
//! ```text
//! ┌─────────────┐   POST {base}/auth/login           ┌─────────────────┐
//! │ SignIn      │   Content-Type: application/json   │  인증 서버       │
//! │ Service     ├───────────────────────────────────►│                 │
//! │             │   {"email": .., "password": ..}    │                 │
//! │             │◄───────────────────────────────────┤                 │
//! │             │   2xx {user, accessToken}          └─────────────────┘
//! │             │
//! │             │   TokenStorage::set("accessToken", token)
//! └─────────────┘
//! ```
//!
//! 재시도, 백오프, 타임아웃은 없습니다. 2xx가 아니면 원인과 관계없이
//! `"Login failed"`로 실패합니다.

use std::sync::Arc;

use log::{debug, info, warn};
use reqwest::{Client, Url};

use crate::domain::dto::auth::{Credentials, SessionResult};
use crate::errors::{AuthError, AuthResult};
use crate::storage::{ACCESS_TOKEN_KEY, TokenStorage};

/// 로그인 네트워크 교환 서비스
pub struct SignInService {
    /// 쿠키 저장소가 연결된 HTTP 클라이언트
    client: Client,
    /// 로그인 엔드포인트 전체 주소
    login_url: Url,
    /// 액세스 토큰을 기록할 영구 저장소
    storage: Arc<dyn TokenStorage>,
}

impl SignInService {
    pub fn new(client: Client, login_url: Url, storage: Arc<dyn TokenStorage>) -> Self {
        Self {
            client,
            login_url,
            storage,
        }
    }

    pub fn login_url(&self) -> &Url {
        &self.login_url
    }

    /// 로그인 요청 후 액세스 토큰을 영구 저장소에 기록
    ///
    /// # 반환값
    ///
    /// * `Ok(SessionResult)` - 서버 응답 전체. 토큰은 이미 저장된 상태
    /// * `Err(AuthError::LoginFailed)` - 2xx 이외의 응답
    /// * `Err(AuthError::Transport)` - 요청 전송 실패
    /// * `Err(AuthError::InvalidResponse)` - 응답 본문 해석 실패
    /// * `Err(AuthError::Storage)` - 토큰 저장 실패
    ///
    /// 실패한 경우 저장소는 변경되지 않습니다.
    pub async fn sign_in(&self, credentials: &Credentials) -> AuthResult<SessionResult> {
        let session = self.request_session(credentials).await?;

        self.storage.set(ACCESS_TOKEN_KEY, &session.access_token).await?;

        info!(
            "로그인 성공: user_id={} (토큰 저장소: {})",
            session.user.id,
            self.storage.name()
        );
        Ok(session)
    }

    /// 로그인 요청만 수행하고 응답을 해석합니다. 저장소는 건드리지 않습니다.
    pub async fn request_session(&self, credentials: &Credentials) -> AuthResult<SessionResult> {
        debug!("로그인 요청 전송: {} ({})", self.login_url, credentials.email);

        let response = self
            .client
            .post(self.login_url.clone())
            .json(credentials)
            .send()
            .await
            .map_err(|e| {
                warn!("로그인 요청 전송 실패: {}", e);
                AuthError::Transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("로그인 거부됨: HTTP {}", status.as_u16());
            return Err(AuthError::LoginFailed {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;

        serde_json::from_slice::<SessionResult>(&body).map_err(|e| {
            warn!("로그인 응답 파싱 실패: {}", e);
            AuthError::InvalidResponse(e.to_string())
        })
    }
}
