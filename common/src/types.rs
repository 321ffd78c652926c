//! 주문 데이터의 타입 정의
//!
//! CLI와 코어가 공유하는 타입:
//! - OrderRow: 출고내역서 한 행 (외부 입력, 읽기 전용)
//! - ProductInfo: 분류 결과 (제품분류, 용량, 개수)
//! - ReviewOrder: 자동 박스 분류에 실패한 주문

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 제품분류: 단호박식혜
pub const PRODUCT_PUMPKIN_SIKHYE: &str = "단호박식혜";
/// 제품분류: 일반 식혜
pub const PRODUCT_SIKHYE: &str = "식혜";
/// 제품분류: 수정과
pub const PRODUCT_SUJEONGGWA: &str = "수정과";
/// 제품분류: 플레인 쌀요거트
pub const PRODUCT_RICE_YOGURT: &str = "플레인 쌀요거트";
/// 제품분류: 기타 (미분류 센티널, 에러가 아님)
pub const PRODUCT_OTHER: &str = "기타";

/// 출고내역서 한 행
///
/// 업스트림 스프레드시트 리더가 행 단위로 생성한다.
/// 수량은 원본 문자열 그대로 보관하고, 코어가 기본값 처리를 담당한다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderRow {
    /// 상품이름 (G열)
    pub product_name: String,
    /// 옵션이름 (H열, 공란 가능)
    pub option_name: String,
    /// 상품수량 (N열, 원본 문자열)
    pub quantity: String,
    /// 수취인이름
    pub recipient_name: String,
    /// 주문자이름
    pub orderer_name: String,
}

impl OrderRow {
    /// 상품수량 파싱
    ///
    /// 정수로 읽을 수 없거나 0 이하인 값은 모두 1로 처리한다.
    /// 행 단위 데이터 품질 문제로 배치 전체가 중단되는 일은 없다.
    pub fn base_quantity(&self) -> u32 {
        self.quantity
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|q| *q >= 1)
            .unwrap_or(1)
    }
}

/// 분류 결과: (제품분류, 용량, 개수)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductInfo {
    pub product_type: String,
    pub capacity: String,
    pub count: u32,
}

impl ProductInfo {
    pub fn new(product_type: &str, capacity: &str, count: u32) -> Self {
        Self {
            product_type: product_type.to_string(),
            capacity: capacity.to_string(),
            count,
        }
    }

    /// 양쪽 전략 모두 실패했을 때의 기본값 ("기타", "", 1)
    pub fn other() -> Self {
        Self::new(PRODUCT_OTHER, "", 1)
    }
}

/// 매핑 테이블 통계
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MappingStats {
    /// 전체 케이스 수
    pub total_cases: usize,
    /// 제품분류별 케이스 수
    pub product_stats: HashMap<String, usize>,
}

/// 검토 필요 주문
///
/// 박스 자동 분류에 실패한 수취인의 집계 내용을 수동 검토용으로 보관한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewOrder {
    /// 수취인 식별 키
    pub recipient: String,
    /// 용량별 수량
    pub quantities: HashMap<String, u32>,
    /// 제품별 원본 집계 내역
    pub products: HashMap<String, u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_row_default() {
        let row = OrderRow::default();
        assert_eq!(row.product_name, "");
        assert_eq!(row.base_quantity(), 1);
    }

    #[test]
    fn test_base_quantity_parse() {
        let mut row = OrderRow::default();

        row.quantity = "3".into();
        assert_eq!(row.base_quantity(), 3);

        row.quantity = " 2 ".into();
        assert_eq!(row.base_quantity(), 2);
    }

    #[test]
    fn test_base_quantity_defaults_to_one() {
        let mut row = OrderRow::default();

        // 파싱 실패
        row.quantity = "두개".into();
        assert_eq!(row.base_quantity(), 1);

        // 0 이하
        row.quantity = "0".into();
        assert_eq!(row.base_quantity(), 1);

        row.quantity = "-3".into();
        assert_eq!(row.base_quantity(), 1);
    }

    #[test]
    fn test_product_info_other() {
        let info = ProductInfo::other();
        assert_eq!(info.product_type, PRODUCT_OTHER);
        assert_eq!(info.capacity, "");
        assert_eq!(info.count, 1);
    }
}
