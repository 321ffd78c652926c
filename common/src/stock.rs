//! 재고 관리 코어
//!
//! 출고 현황을 재고에 차감 반영하고, 상품별 임계값 아래로
//! 내려간 항목을 경고 대상으로 골라낸다.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 재고 부족 임계값 (상품 키 → 최소 수량)
pub const STOCK_THRESHOLDS: &[(&str, u32)] = &[
    ("단호박식혜 1.5L", 10),
    ("단호박식혜 1L", 20),
    ("단호박식혜 240ml", 50),
    ("식혜 1.5L", 20),
    ("식혜 1L", 10),
    ("식혜 240ml", 50),
    ("수정과 500ml", 50),
    ("플레인 쌀요거트 1L", 20),
    ("플레인 쌀요거트 200ml", 10),
    ("밥알없는 단호박식혜 1.5L", 1),
    ("밥알없는 단호박식혜 1L", 1),
    ("밥알없는 단호박식혜 240ml", 1),
    ("밥알없는 식혜 1.5L", 1),
    ("밥알없는 식혜 1L", 1),
    ("밥알없는 식혜 240ml", 1),
];

/// 출고 현황에 없어도 재고 입력 대상에 항상 포함되는 상품들
pub const ADDITIONAL_PRODUCTS: &[&str] = &[
    "단호박식혜 240ml",
    "식혜 1.5L",
    "식혜 240ml",
    "밥알없는 단호박식혜 1.5L",
    "밥알없는 단호박식혜 1L",
    "밥알없는 단호박식혜 240ml",
    "밥알없는 식혜 1.5L",
    "밥알없는 식혜 1L",
    "밥알없는 식혜 240ml",
    "플레인 쌀요거트 200ml",
];

lazy_static! {
    static ref CAPACITY_TOKEN_RE: Regex = Regex::new(r"^\d+(?:\.\d+)?(?:ml|L)").unwrap();
}

/// 재고 입력 한 건
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StockEntry {
    /// 입력 일시 (KST 문자열)
    #[serde(rename = "입력일시")]
    pub entered_at: String,
    /// "{상품명}|{용량}" → 수량
    #[serde(rename = "입력용")]
    pub quantities: HashMap<String, u32>,
    /// 출고 현황을 차감 반영해 만들어진 입력인지
    #[serde(rename = "출고반영", default)]
    pub shipment_applied: bool,
}

/// 재고 현황 (최근 입력 + 이력)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StockHistory {
    #[serde(rename = "최근입력")]
    pub latest: Option<StockEntry>,
    #[serde(rename = "이력", default)]
    pub history: Vec<StockEntry>,
}

impl StockHistory {
    /// 새 입력을 이력 선두와 최근입력 양쪽에 기록
    pub fn push(&mut self, entry: StockEntry) {
        self.history.insert(0, entry.clone());
        self.latest = Some(entry);
    }
}

/// 재고 부족 항목
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LowStockItem {
    pub product_key: String,
    pub current: u32,
    pub threshold: u32,
}

/// 상품 키를 (상품명, 용량)으로 분리
///
/// 마지막 토큰이 용량 형태("240ml", "1.5L")일 때만 용량으로 본다.
pub fn split_product_key(product_key: &str) -> (String, String) {
    let trimmed = product_key.trim();
    let parts: Vec<&str> = trimmed.split_whitespace().collect();

    if parts.len() >= 2 {
        let last = parts[parts.len() - 1];
        if CAPACITY_TOKEN_RE.is_match(last) {
            return (parts[..parts.len() - 1].join(" "), last.to_string());
        }
    }

    (trimmed.to_string(), String::new())
}

/// 상품 키를 재고 입력 키("{상품명}|{용량}")로 변환
pub fn stock_input_key(product_key: &str) -> String {
    let (name, capacity) = split_product_key(product_key);
    format!("{}|{}", name, capacity)
}

/// 재고 입력 대상 상품 키 목록 (출고 현황 + 필수 상품, 정렬)
pub fn stock_product_keys(shipment_totals: &HashMap<String, u32>) -> Vec<String> {
    let mut keys: Vec<String> = shipment_totals.keys().cloned().collect();
    for product in ADDITIONAL_PRODUCTS {
        if !keys.iter().any(|k| k == product) {
            keys.push(product.to_string());
        }
    }
    keys.sort();
    keys
}

/// 출고 현황을 현재 재고에 차감 반영
///
/// 상품 키 단위로 `현재 재고 - 출고량`을 계산하되 0 아래로는 내리지 않는다.
pub fn apply_shipment(
    latest_stock: &HashMap<String, u32>,
    shipment_totals: &HashMap<String, u32>,
) -> HashMap<String, u32> {
    let mut updated = HashMap::new();

    for product_key in stock_product_keys(shipment_totals) {
        let input_key = stock_input_key(&product_key);
        let current = latest_stock.get(&input_key).copied().unwrap_or(0);
        let shipped = shipment_totals.get(&product_key).copied().unwrap_or(0);
        updated.insert(input_key, current.saturating_sub(shipped));
    }

    updated
}

/// 임계값 아래로 내려간 재고 항목 추출 (상품 키 순 정렬)
pub fn low_stock_items(latest_stock: &HashMap<String, u32>) -> Vec<LowStockItem> {
    let mut items: Vec<LowStockItem> = STOCK_THRESHOLDS
        .iter()
        .filter_map(|(product_key, threshold)| {
            let input_key = stock_input_key(product_key);
            let current = latest_stock.get(&input_key).copied()?;
            if current < *threshold {
                Some(LowStockItem {
                    product_key: product_key.to_string(),
                    current,
                    threshold: *threshold,
                })
            } else {
                None
            }
        })
        .collect();

    items.sort_by(|a, b| a.product_key.cmp(&b.product_key));
    items
}
