//! 집계 결과 스냅샷 저장/불러오기
//!
//! 한국 시간(KST) 타임스탬프를 붙인 JSON 파일로 로컬에 보관한다.
//! "파일 없음"은 별도 에러로 구분해 최초 실행과 실제 IO 실패를 가른다.

use crate::error::{Result, SeoroError};
use chrono::{DateTime, FixedOffset, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 타임스탬프가 붙은 스냅샷
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot<T> {
    /// 저장 시각 (KST, "YYYY-MM-DD HH:MM")
    pub updated_at: String,
    pub data: T,
}

fn kst_now() -> DateTime<FixedOffset> {
    let kst = FixedOffset::east_opt(9 * 3600).expect("KST offset");
    Utc::now().with_timezone(&kst)
}

/// 한국 시간 타임스탬프 ("YYYY-MM-DD HH:MM:SS")
pub fn kst_timestamp() -> String {
    kst_now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// 한국 시간 기준 날짜 라벨 ("08월 30일 (토)")
pub fn korean_date_label() -> String {
    let now = kst_now();
    let weekdays = ["월", "화", "수", "목", "금", "토", "일"];
    let weekday = weekdays[now.format("%u").to_string().parse::<usize>().unwrap_or(1) - 1];
    format!("{} ({})", now.format("%m월 %d일"), weekday)
}

/// 스냅샷 저장
pub fn save_snapshot<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let snapshot = Snapshot {
        updated_at: kst_now().format("%Y-%m-%d %H:%M").to_string(),
        data,
    };

    let content = serde_json::to_string_pretty(&snapshot)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// 스냅샷 불러오기
///
/// 파일이 없으면 `SnapshotNotFound`를 돌려준다.
pub fn load_snapshot<T: DeserializeOwned>(path: &Path) -> Result<Snapshot<T>> {
    if !path.exists() {
        return Err(SeoroError::SnapshotNotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    let snapshot: Snapshot<T> = serde_json::from_str(&content)?;
    Ok(snapshot)
}
