//! 에러 타입 정의

use thiserror::Error;

/// 공통 에러 타입
#[derive(Error, Debug)]
pub enum Error {
    /// 매핑 테이블 구성 중 키가 중복된 경우
    ///
    /// 원본 구현은 말없이 덮어썼지만, 여기서는 구성 시점에 즉시 거부한다.
    #[error("매핑 키 중복: ({product_name}, {option_name})")]
    DuplicateMappingKey {
        product_name: String,
        option_name: String,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
