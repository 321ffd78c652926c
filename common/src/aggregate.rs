//! 수취인별 주문 그룹화
//!
//! 택배박스 계산의 전 단계. 수취인 식별 키로 행을 묶고,
//! "{제품분류} {용량}" 복합 키별로 수량을 누적한다.

use crate::capacity::{normalize_capacity, CapacityMode};
use crate::mapping::ProductMapper;
use crate::types::OrderRow;
use std::collections::HashMap;

/// 수취인이름이 비어 있을 때의 표시용 기본값
pub const UNKNOWN_RECIPIENT: &str = "알 수 없음";

/// 수취인 식별 키 생성
///
/// 동명이인 구분: 주문자이름이 있고 수취인과 다르면
/// "{수취인} - 주문자: {주문자}", 아니면 "{수취인} - 직접주문".
pub fn recipient_key(recipient_name: &str, orderer_name: &str) -> String {
    let recipient = if recipient_name.is_empty() {
        UNKNOWN_RECIPIENT
    } else {
        recipient_name
    };
    let orderer = orderer_name.trim();

    if !orderer.is_empty() && orderer != recipient {
        format!("{} - 주문자: {}", recipient, orderer)
    } else {
        format!("{} - 직접주문", recipient)
    }
}

/// 행의 복합 집계 키: "{제품분류} {용량}", 용량이 없으면 제품분류만
pub fn composite_key(product_type: &str, capacity: &str) -> String {
    if capacity.is_empty() {
        product_type.to_string()
    } else {
        format!("{} {}", product_type, capacity)
    }
}

/// 수취인별로 주문을 그룹화
///
/// 행마다 정확 매핑 → 휴리스틱 순으로 분류하고,
/// `상품수량 × 옵션개수`를 박스 계산용(Box 모드) 용량 키에 누적한다.
pub fn group_orders_by_recipient(
    rows: &[OrderRow],
    mapper: &ProductMapper,
) -> HashMap<String, HashMap<String, u32>> {
    let mut orders: HashMap<String, HashMap<String, u32>> = HashMap::new();

    for row in rows {
        let key = recipient_key(&row.recipient_name, &row.orderer_name);

        let info = mapper.get_product_info(&row.product_name, &row.option_name);
        let total_quantity = row.base_quantity() * info.count;

        let capacity = normalize_capacity(&info.capacity, CapacityMode::Box);
        let product_key = composite_key(&info.product_type, &capacity);

        *orders
            .entry(key)
            .or_default()
            .entry(product_key)
            .or_insert(0) += total_quantity;
    }

    orders
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(
        product_name: &str,
        option_name: &str,
        quantity: &str,
        recipient: &str,
        orderer: &str,
    ) -> OrderRow {
        OrderRow {
            product_name: product_name.into(),
            option_name: option_name.into(),
            quantity: quantity.into(),
            recipient_name: recipient.into(),
            orderer_name: orderer.into(),
        }
    }

    #[test]
    fn test_recipient_key_direct_order() {
        assert_eq!(recipient_key("홍길동", ""), "홍길동 - 직접주문");
        assert_eq!(recipient_key("홍길동", "홍길동"), "홍길동 - 직접주문");
        assert_eq!(recipient_key("홍길동", "  홍길동  "), "홍길동 - 직접주문");
    }

    #[test]
    fn test_recipient_key_distinct_orderer() {
        assert_eq!(
            recipient_key("홍길동", "김철수"),
            "홍길동 - 주문자: 김철수"
        );
    }

    #[test]
    fn test_recipient_key_unknown() {
        assert_eq!(recipient_key("", ""), "알 수 없음 - 직접주문");
    }

    #[test]
    fn test_composite_key() {
        assert_eq!(composite_key("식혜", "1L"), "식혜 1L");
        assert_eq!(composite_key("기타", ""), "기타");
    }

    #[test]
    fn test_group_namesake_recipients_not_merged() {
        let mapper = ProductMapper::builtin().unwrap();
        let rows = vec![
            row("서로 식혜", "2개, 1000ml", "1", "홍길동", "김철수"),
            row("서로 식혜", "2개, 1000ml", "1", "홍길동", "홍길동"),
        ];

        let orders = group_orders_by_recipient(&rows, &mapper);
        assert_eq!(orders.len(), 2);
        assert_eq!(orders["홍길동 - 주문자: 김철수"]["식혜 1L"], 2);
        assert_eq!(orders["홍길동 - 직접주문"]["식혜 1L"], 2);
    }

    #[test]
    fn test_group_accumulates_same_key() {
        let mapper = ProductMapper::builtin().unwrap();
        let rows = vec![
            row("서로 식혜", "2개, 1000ml", "1", "홍길동", ""),
            row("서로 식혜", "2개, 1000ml", "3", "홍길동", ""),
        ];

        let orders = group_orders_by_recipient(&rows, &mapper);
        // 2×1 + 2×3 = 8, 덮어쓰지 않고 합산
        assert_eq!(orders["홍길동 - 직접주문"]["식혜 1L"], 8);
    }

    #[test]
    fn test_group_uses_box_mode_capacity() {
        let mapper = ProductMapper::builtin().unwrap();
        // 200ml 상품은 박스 계산에서 240ml 키로 접힌다
        let rows = vec![row(
            "플레인 쌀요거트:",
            "플레인 쌀요거트 200ml",
            "1",
            "홍길동",
            "",
        )];

        let orders = group_orders_by_recipient(&rows, &mapper);
        assert_eq!(orders["홍길동 - 직접주문"]["플레인 쌀요거트 240ml"], 1);
    }

    #[test]
    fn test_group_unclassified_still_counted() {
        let mapper = ProductMapper::builtin().unwrap();
        let rows = vec![row("없는제품", "없는옵션", "2", "홍길동", "")];

        let orders = group_orders_by_recipient(&rows, &mapper);
        // 기타는 용량 없이 제품분류만 키가 된다
        assert_eq!(orders["홍길동 - 직접주문"]["기타"], 2);
    }
}
