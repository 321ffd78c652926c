use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeoroError {
    #[error("설정 에러: {0}")]
    Config(String),

    #[error("폴더가 없습니다: {0}")]
    FolderNotFound(String),

    #[error("파일이 없습니다: {0}")]
    FileNotFound(String),

    #[error("엑셀 파일을 읽을 수 없습니다: {0}")]
    ExcelRead(String),

    #[error("필수 컬럼이 없습니다: {0} (엑셀 컬럼명을 확인하세요: 상품이름, 옵션이름, 상품수량)")]
    MissingColumns(String),

    #[error("엑셀 파일을 찾지 못했습니다: {0}")]
    NoWorkbooksFound(String),

    #[error("저장된 스냅샷이 없습니다: {0}")]
    SnapshotNotFound(String),

    #[error("관리자 비밀번호가 일치하지 않습니다")]
    AccessDenied,

    #[error("JSON 파싱 에러: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO 에러: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] seoro_orders_common::Error),
}

pub type Result<T> = std::result::Result<T, SeoroError>;
