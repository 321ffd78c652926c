//! seoro-orders CLI 라이브러리
//!
//! 코어 로직은 `seoro_orders_common`에 있고,
//! 여기에는 CLI 오케스트레이션 계층(엑셀 읽기, 스냅샷, 설정)만 둔다.

pub mod cli;
pub mod config;
pub mod error;
pub mod reader;
pub mod scanner;
pub mod store;
