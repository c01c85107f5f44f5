//! 사용자 상태 저장소
//!
//! 로그인 액션이 결과를 보고하는 세 가지 연산(`set_user`, `set_loading`, `set_error`)을
//! trait으로 정의하고, 메모리 기반 기본 구현을 제공합니다.
//!
//! ## 원자성
//!
//! 각 연산은 개별적으로 원자적입니다. 여러 연산 사이의 일관성은 보장하지 않으며,
//! 동시에 실행된 로그인들은 필드 단위로 마지막 쓰기가 이깁니다.

use std::sync::{PoisonError, RwLock};

use serde::Serialize;

use crate::domain::entities::users::User;

/// 로그인 액션이 상태를 보고하는 대상
pub trait UserStore: Send + Sync {
    /// 인증된 사용자와 세션 토큰을 한 번에 교체
    fn set_user(&self, user: User, token: String);

    /// 로딩 플래그 설정
    fn set_loading(&self, loading: bool);

    /// 에러 메시지 설정. `None`이면 에러 해제
    fn set_error(&self, error: Option<String>);
}

/// 사용자 상태 스냅샷
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserState {
    pub user: Option<User>,
    pub token: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
}

impl UserState {
    /// 사용자가 인증된 상태인지 확인
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }
}

/// 메모리 기반 사용자 상태 저장소
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    state: RwLock<UserState>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 현재 상태의 복사본
    pub fn snapshot(&self) -> UserState {
        self.state.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn user(&self) -> Option<User> {
        self.snapshot().user
    }

    pub fn is_loading(&self) -> bool {
        self.state.read().unwrap_or_else(PoisonError::into_inner).loading
    }

    pub fn error(&self) -> Option<String> {
        self.state.read().unwrap_or_else(PoisonError::into_inner).error.clone()
    }
}

impl UserStore for InMemoryUserStore {
    fn set_user(&self, user: User, token: String) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.user = Some(user);
        state.token = Some(token);
    }

    fn set_loading(&self, loading: bool) {
        self.state.write().unwrap_or_else(PoisonError::into_inner).loading = loading;
    }

    fn set_error(&self, error: Option<String>) {
        self.state.write().unwrap_or_else(PoisonError::into_inner).error = error;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user(id: i64) -> User {
        User {
            nickname: format!("user{}", id),
            id,
            email: format!("user{}@example.com", id),
            profile_image_url: None,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    #[test]
    fn test_initial_state_is_idle() {
        let store = InMemoryUserStore::new();
        let state = store.snapshot();

        assert_eq!(state, UserState::default());
        assert!(!state.is_authenticated());
    }

    #[test]
    fn test_set_user_replaces_previous_user() {
        let store = InMemoryUserStore::new();

        store.set_user(sample_user(1), "first".to_string());
        store.set_user(sample_user(2), "second".to_string());

        let state = store.snapshot();
        assert_eq!(state.user.map(|u| u.id), Some(2));
        assert_eq!(state.token.as_deref(), Some("second"));
    }

    #[test]
    fn test_loading_and_error_flags() {
        let store = InMemoryUserStore::new();

        store.set_loading(true);
        store.set_error(Some("Login failed".to_string()));
        assert!(store.is_loading());
        assert_eq!(store.error().as_deref(), Some("Login failed"));

        store.set_loading(false);
        store.set_error(None);
        assert!(!store.is_loading());
        assert_eq!(store.error(), None);
    }
}
