//! # 로그인 액션
//!
//! UI 이벤트에서 호출되는 로그인 동작 전체를 조합합니다.
//! [`SignInService`]의 네트워크 교환 앞뒤로 공유 상태를 갱신합니다.
//!
//! ## 상태 전이
//!
//! ```text
//!            execute()
//!   Idle ───────────────► Pending (loading=true, error=None)
//!                            │
//!              ┌─────────────┴─────────────┐
//!              ▼                           ▼
//!   Succeeded (user, token,        Failed (error=Some(msg),
//!              loading=false)              loading=false)
//! ```
//!
//! 동시 호출을 막지 않습니다. 여러 번 호출되면 늦게 도착한 응답이 상태를 덮어씁니다.

use std::sync::Arc;

use log::{debug, error};

use crate::domain::dto::auth::{Credentials, SessionResult};
use crate::domain::entities::users::User;
use crate::errors::{AuthError, AuthResult};
use crate::services::auth::{CredentialChannel, SignInService};
use crate::state::UserStore;

/// 로그인 액션
///
/// 모든 협력 객체를 생성 시점에 주입받으므로 전역 상태 없이 테스트할 수 있습니다.
///
/// ```rust,ignore
/// let action = context.sign_in_action();
///
/// match action.execute(Credentials::new("a@b.com", "x")).await {
///     Ok(session) => println!("환영합니다, {}", session.user.nickname),
///     Err(e) => println!("{}", e), // 공유 상태의 error에도 같은 메시지가 기록됨
/// }
/// ```
pub struct SignInAction {
    service: Arc<SignInService>,
    store: Arc<dyn UserStore>,
    channel: Arc<dyn CredentialChannel>,
}

impl SignInAction {
    pub fn new(
        service: Arc<SignInService>,
        store: Arc<dyn UserStore>,
        channel: Arc<dyn CredentialChannel>,
    ) -> Self {
        Self {
            service,
            store,
            channel,
        }
    }

    /// 로그인 실행
    ///
    /// 자격 증명은 요청이 끝나면 버려집니다. 실패 시에도 에러는 공유 상태에 기록되고,
    /// 같은 에러가 호출자에게 반환됩니다.
    pub async fn execute(&self, credentials: Credentials) -> AuthResult<SessionResult> {
        self.on_start();

        match self.service.sign_in(&credentials).await {
            Ok(session) => {
                self.on_success(&session);
                Ok(session)
            }
            Err(e) => {
                self.on_error(&e);
                Err(e)
            }
        }
    }

    fn on_start(&self) {
        self.store.set_loading(true);
        self.store.set_error(None);
    }

    fn on_success(&self, session: &SessionResult) {
        let user = User::from_auth_response(session.user.clone());

        self.channel.set_token(&session.access_token);
        self.store.set_user(user, session.access_token.clone());
        self.store.set_loading(false);

        debug!("공유 상태 갱신 완료: user_id={}", session.user.id);
    }

    fn on_error(&self, e: &AuthError) {
        error!("로그인 실패: {}", e);

        self.store.set_error(Some(e.to_string()));
        self.store.set_loading(false);
    }
}
