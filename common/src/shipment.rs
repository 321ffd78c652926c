//! 출고 현황 집계
//!
//! 수취인 구분 없이 전체 행을 "{제품분류} {용량}" 키로 합산한다.
//! 출고 현황용이므로 용량은 Display 모드(200ml 유지)로 표준화한다.
//! 기타로 떨어진 행은 매핑 실패율 점검용으로 따로 모은다.

use crate::aggregate::composite_key;
use crate::capacity::{normalize_capacity, CapacityMode};
use crate::mapping::ProductMapper;
use crate::types::{OrderRow, PRODUCT_OTHER};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 분류에 실패한 행의 원본 필드
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnmappedRow {
    pub product_name: String,
    pub option_name: String,
}

/// 출고 집계 결과
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShipmentSummary {
    /// "{제품분류} {용량}" → 총 수량
    pub totals: HashMap<String, u32>,
    /// 처리한 행 수
    pub total_rows: usize,
    /// 기타로 분류된 행들 (진단용. 집계 자체에는 포함됨)
    pub unmapped: Vec<UnmappedRow>,
}

impl ShipmentSummary {
    /// 분류 실패 행 수
    pub fn unmapped_count(&self) -> usize {
        self.unmapped.len()
    }

    /// 분류 실패율 (0.0 ~ 100.0)
    pub fn unmapped_rate(&self) -> f64 {
        if self.total_rows == 0 {
            return 0.0;
        }
        self.unmapped.len() as f64 / self.total_rows as f64 * 100.0
    }

    /// 전체 출고 개수
    pub fn total_quantity(&self) -> u32 {
        self.totals.values().sum()
    }
}

/// 전체 행의 출고 현황 집계
pub fn aggregate_shipment(rows: &[OrderRow], mapper: &ProductMapper) -> ShipmentSummary {
    let mut summary = ShipmentSummary {
        total_rows: rows.len(),
        ..Default::default()
    };

    for row in rows {
        let info = mapper.get_product_info(&row.product_name, &row.option_name);
        let total_quantity = row.base_quantity() * info.count;

        let capacity = normalize_capacity(&info.capacity, CapacityMode::Display);
        let key = composite_key(&info.product_type, &capacity);

        *summary.totals.entry(key).or_insert(0) += total_quantity;

        if info.product_type == PRODUCT_OTHER {
            summary.unmapped.push(UnmappedRow {
                product_name: row.product_name.clone(),
                option_name: row.option_name.clone(),
            });
        }
    }

    summary
}
