use crate::error::{Result, SeoroError};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// 관리자 비밀번호의 SHA-256 hex 다이제스트. 없으면 쓰기 게이트 비활성.
    pub admin_password_hash: Option<String>,
    /// 스냅샷 기본 저장 폴더
    pub snapshot_dir: Option<PathBuf>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| SeoroError::Config("홈 디렉터리를 찾을 수 없습니다".into()))?;
        Ok(home.join(".config").join("seoro-orders").join("config.json"))
    }

    pub fn set_admin_password(&mut self, password: &str) -> Result<()> {
        self.admin_password_hash = Some(hash_password(password));
        self.save()
    }

    /// 관리자 쓰기 권한 확인
    ///
    /// 비밀번호가 설정되어 있지 않으면 게이트 없이 통과한다.
    pub fn check_admin_access(&self, password: &str) -> Result<()> {
        match &self.admin_password_hash {
            None => Ok(()),
            Some(expected) if *expected == hash_password(password) => Ok(()),
            Some(_) => Err(SeoroError::AccessDenied),
        }
    }

    pub fn has_admin_password(&self) -> bool {
        self.admin_password_hash.is_some()
    }
}

fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_password_stable() {
        assert_eq!(hash_password("비밀"), hash_password("비밀"));
        assert_ne!(hash_password("비밀"), hash_password("다른비밀"));
        // SHA-256 hex는 64자
        assert_eq!(hash_password("x").len(), 64);
    }

    #[test]
    fn test_check_admin_access() {
        let mut config = Config::default();
        // 비밀번호 미설정이면 통과
        assert!(config.check_admin_access("아무거나").is_ok());

        config.admin_password_hash = Some(hash_password("정답"));
        assert!(config.check_admin_access("정답").is_ok());
        assert!(matches!(
            config.check_admin_access("오답"),
            Err(SeoroError::AccessDenied)
        ));
    }
}
