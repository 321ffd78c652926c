//! 택배박스 분류
//!
//! 수취인별 집계 수량을 용량별 규칙 밴드에 대조해
//! 박스 A~F 중 하나로 분류한다. 여러 용량이 섞였거나
//! 어느 밴드에도 맞지 않으면 "검토 필요"로 넘긴다.

use crate::aggregate::group_orders_by_recipient;
use crate::mapping::ProductMapper;
use crate::types::{OrderRow, ReviewOrder};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// "검토 필요" 표시 문자열
pub const REVIEW_NEEDED: &str = "검토 필요";

/// 박스 종류
///
/// 파생된 Ord가 비용 순서(A가 가장 저렴)를 그대로 제공한다.
/// 정렬 표시에만 쓰이고 분류 로직에는 관여하지 않는다.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum BoxCategory {
    #[serde(rename = "박스 A")]
    A,
    #[serde(rename = "박스 B")]
    B,
    #[serde(rename = "박스 C")]
    C,
    #[serde(rename = "박스 D")]
    D,
    #[serde(rename = "박스 E")]
    E,
    #[serde(rename = "박스 F")]
    F,
}

impl BoxCategory {
    /// 비용 순서 (낮을수록 저렴)
    pub fn cost_order(&self) -> u8 {
        match self {
            BoxCategory::A => 1,
            BoxCategory::B => 2,
            BoxCategory::C => 3,
            BoxCategory::D => 4,
            BoxCategory::E => 5,
            BoxCategory::F => 6,
        }
    }
}

impl std::fmt::Display for BoxCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoxCategory::A => write!(f, "박스 A"),
            BoxCategory::B => write!(f, "박스 B"),
            BoxCategory::C => write!(f, "박스 C"),
            BoxCategory::D => write!(f, "박스 D"),
            BoxCategory::E => write!(f, "박스 E"),
            BoxCategory::F => write!(f, "박스 F"),
        }
    }
}

/// 박스 규칙 밴드: (박스, 용량, 최소, 최대), 양끝 포함
///
/// 먼저 일치하는 밴드가 이긴다. 용량별 밴드는 구성상 서로 겹치지 않는다.
const BOX_RULES: &[(BoxCategory, &str, u32, u32)] = &[
    (BoxCategory::A, "1L", 1, 2),
    (BoxCategory::A, "500ml", 1, 3),
    (BoxCategory::A, "240ml", 1, 5),
    (BoxCategory::B, "1L", 3, 4),
    (BoxCategory::B, "500ml", 4, 6),
    (BoxCategory::B, "240ml", 6, 10),
    (BoxCategory::C, "500ml", 10, 10),
    (BoxCategory::D, "1L", 5, 6),
    (BoxCategory::E, "1.5L", 3, 4),
    (BoxCategory::F, "1.5L", 1, 2),
];

/// 제품별 집계에서 용량별 수량 추출
///
/// 복합 키("단호박식혜 1L" 등)의 용량 부분만 보고 합산한다.
/// "1.5L" 검사가 "1L"보다 먼저여야 한다. 200ml는 240ml로 접는다.
pub fn capacity_quantities(order_products: &HashMap<String, u32>) -> HashMap<String, u32> {
    let mut quantities: HashMap<String, u32> = HashMap::new();

    for (product_key, qty) in order_products {
        let capacity = if product_key.contains("1.5L") {
            "1.5L"
        } else if product_key.contains("1L") {
            "1L"
        } else if product_key.contains("500ml") {
            "500ml"
        } else if product_key.contains("240ml") {
            "240ml"
        } else if product_key.contains("200ml") {
            "240ml"
        } else {
            continue;
        };

        *quantities.entry(capacity.to_string()).or_insert(0) += qty;
    }

    quantities
}

/// 단일 주문의 박스 분류
///
/// `None`은 "검토 필요": 혼합 용량이거나 어느 밴드에도 맞지 않는 경우.
pub fn classify_box(quantities: &HashMap<String, u32>) -> Option<BoxCategory> {
    // 1단계: 혼합 주문 체크. 양수 용량이 둘 이상이면 수량과 무관하게 검토 필요
    let positive: Vec<(&str, u32)> = quantities
        .iter()
        .filter(|(_, qty)| **qty > 0)
        .map(|(cap, qty)| (cap.as_str(), *qty))
        .collect();

    if positive.len() > 1 {
        return None;
    }

    // 2단계: 단일 용량 밴드 매칭
    if let Some((capacity, qty)) = positive.first() {
        for (category, rule_capacity, min, max) in BOX_RULES {
            if capacity == rule_capacity && (*min..=*max).contains(qty) {
                return Some(*category);
            }
        }
    }

    // 수량 없음 또는 모든 밴드 초과
    None
}

/// 전체 박스 필요량 계산
///
/// 수취인별 그룹화 → 용량 집계 → 박스 분류.
/// 자동 분류 실패 주문은 수동 검토 목록에 원본 내역과 함께 담는다.
pub fn aggregate_boxes(
    rows: &[OrderRow],
    mapper: &ProductMapper,
) -> (BTreeMap<BoxCategory, u32>, Vec<ReviewOrder>) {
    let orders = group_orders_by_recipient(rows, mapper);

    let mut total_boxes: BTreeMap<BoxCategory, u32> = BTreeMap::new();
    let mut review_orders = Vec::new();

    for (recipient, products) in orders {
        let quantities = capacity_quantities(&products);

        match classify_box(&quantities) {
            Some(category) => *total_boxes.entry(category).or_insert(0) += 1,
            None => review_orders.push(ReviewOrder {
                recipient,
                quantities,
                products,
            }),
        }
    }

    // 검토 목록 순서를 결정적으로
    review_orders.sort_by(|a, b| a.recipient.cmp(&b.recipient));

    (total_boxes, review_orders)
}
