//! # 키-값 영구 저장소 구현
//!
//! 세션 토큰을 보관하는 영구 저장소의 추상화와 구현체입니다.
//! 모든 값은 문자열이며, 같은 키에 대한 쓰기는 항상 이전 값을 덮어씁니다.
//!
//! ## 파일 포맷
//!
//! [`FileTokenStorage`]는 평범한 JSON 객체 하나를 파일에 기록합니다.
//!
//! ```json
//! { "accessToken": "tok123" }
//! ```
//!
//! 쓰기는 임시 파일에 먼저 기록한 뒤 rename 하므로,
//! 중간에 프로세스가 죽어도 이전 내용 또는 새 내용 중 하나만 남습니다.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use log::debug;
use tokio::sync::Mutex;

use crate::errors::{AuthResult, ErrorContext};

/// 액세스 토큰을 저장하는 고정 키
pub const ACCESS_TOKEN_KEY: &str = "accessToken";

/// 프로세스 재시작 후에도 유지되는 키-값 저장소
#[async_trait]
pub trait TokenStorage: Send + Sync {
    /// 저장소 이름 (로그용)
    fn name(&self) -> &str;

    /// 키에 해당하는 값 조회
    async fn get(&self, key: &str) -> AuthResult<Option<String>>;

    /// 값을 저장. 기존 값은 무조건 덮어씀
    async fn set(&self, key: &str, value: &str) -> AuthResult<()>;
}

/// JSON 파일 기반 저장소
///
/// 파일이 없으면 빈 저장소로 취급하고, 첫 쓰기 시 상위 디렉터리까지 생성합니다.
/// 같은 인스턴스 안에서의 읽기-수정-쓰기는 뮤텍스로 직렬화됩니다.
pub struct FileTokenStorage {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileTokenStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    async fn load(&self) -> AuthResult<HashMap<String, String>> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) if bytes.is_empty() => Ok(HashMap::new()),
            Ok(bytes) => serde_json::from_slice(&bytes)
                .storage_context(&format!("저장소 파일 파싱 실패 ({})", self.path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(e).storage_context(&format!("저장소 파일 읽기 실패 ({})", self.path.display())),
        }
    }

    async fn persist(&self, entries: &HashMap<String, String>) -> AuthResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .storage_context("저장소 디렉터리 생성 실패")?;
        }

        let json = serde_json::to_vec_pretty(entries).storage_context("저장소 직렬화 실패")?;

        let mut tmp_path = self.path.clone().into_os_string();
        tmp_path.push(".tmp");
        let tmp_path = PathBuf::from(tmp_path);

        tokio::fs::write(&tmp_path, json)
            .await
            .storage_context("저장소 임시 파일 쓰기 실패")?;
        tokio::fs::rename(&tmp_path, &self.path)
            .await
            .storage_context("저장소 파일 교체 실패")
    }
}

#[async_trait]
impl TokenStorage for FileTokenStorage {
    fn name(&self) -> &str {
        "file"
    }

    async fn get(&self, key: &str) -> AuthResult<Option<String>> {
        let entries = self.load().await?;
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> AuthResult<()> {
        let _guard = self.write_lock.lock().await;

        let mut entries = self.load().await?;
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries).await?;

        debug!("저장소 키 갱신: {} ({})", key, self.path.display());
        Ok(())
    }
}

/// 메모리 기반 저장소
///
/// 프로세스가 끝나면 사라집니다. 테스트나 일회성 세션에서 사용합니다.
#[derive(Default)]
pub struct MemoryTokenStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryTokenStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// 현재 저장된 키 개수
    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl TokenStorage for MemoryTokenStorage {
    fn name(&self) -> &str {
        "memory"
    }

    async fn get(&self, key: &str) -> AuthResult<Option<String>> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> AuthResult<()> {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
