//! 출고내역서 엑셀 읽기
//!
//! 헤더 행을 탐색해 컬럼명을 자동 인식한다.
//! 발주서 양식(상품이름/옵션이름/상품수량)과 스마트스토어 양식
//! (상품명/옵션정보/수량)의 두 가지 스키마를 지원한다.

use crate::error::{Result, SeoroError};
use calamine::{open_workbook, Data, Reader, Xlsx};
use seoro_orders_common::OrderRow;
use std::path::Path;

/// 컬럼명 후보: (발주서 양식, 스마트스토어 양식)
const PRODUCT_NAME_COLS: &[&str] = &["상품이름", "상품명"];
const OPTION_NAME_COLS: &[&str] = &["옵션이름", "옵션정보"];
const QUANTITY_COLS: &[&str] = &["상품수량", "수량"];
const RECIPIENT_COLS: &[&str] = &["수취인이름", "수취인명"];
const ORDERER_COLS: &[&str] = &["주문자이름", "구매자명"];

/// 헤더 탐색 범위 (위에서부터 최대 몇 행)
const HEADER_SEARCH_ROWS: usize = 10;

/// 인식된 컬럼 위치
#[derive(Debug)]
struct ColumnMap {
    header_row: usize,
    product_name: usize,
    option_name: usize,
    quantity: usize,
    recipient_name: Option<usize>,
    orderer_name: Option<usize>,
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        Data::Float(f) => {
            // 수량 셀이 실수로 읽히는 경우: 42.0 → "42"
            if f.fract() == 0.0 {
                format!("{}", *f as i64)
            } else {
                f.to_string()
            }
        }
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt.as_f64().to_string(),
        _ => String::new(),
    }
}

fn find_column(header: &[Data], candidates: &[&str]) -> Option<usize> {
    header.iter().position(|cell| {
        let name = cell_to_string(cell);
        candidates.iter().any(|c| name.trim() == *c)
    })
}

fn detect_columns(rows: &[&[Data]], path: &Path) -> Result<ColumnMap> {
    for (row_idx, row) in rows.iter().take(HEADER_SEARCH_ROWS).enumerate() {
        let product_name = match find_column(row, PRODUCT_NAME_COLS) {
            Some(idx) => idx,
            None => continue,
        };

        let (option_name, quantity) = match (
            find_column(row, OPTION_NAME_COLS),
            find_column(row, QUANTITY_COLS),
        ) {
            (Some(o), Some(q)) => (o, q),
            (o, q) => {
                let mut missing = Vec::new();
                if o.is_none() {
                    missing.push("옵션이름");
                }
                if q.is_none() {
                    missing.push("상품수량");
                }
                return Err(SeoroError::MissingColumns(missing.join(", ")));
            }
        };

        return Ok(ColumnMap {
            header_row: row_idx,
            product_name,
            option_name,
            quantity,
            recipient_name: find_column(row, RECIPIENT_COLS),
            orderer_name: find_column(row, ORDERER_COLS),
        });
    }

    Err(SeoroError::MissingColumns(format!(
        "상품이름 ({})",
        path.display()
    )))
}

/// 엑셀 파일에서 주문 행을 읽어들인다
pub fn read_order_rows(path: &Path) -> Result<Vec<OrderRow>> {
    if !path.exists() {
        return Err(SeoroError::FileNotFound(path.display().to_string()));
    }

    let mut workbook: Xlsx<_> = open_workbook(path)
        .map_err(|e| SeoroError::ExcelRead(format!("{}: {}", path.display(), e)))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| SeoroError::ExcelRead(format!("{}: 시트가 없습니다", path.display())))?
        .map_err(|e| SeoroError::ExcelRead(format!("{}: {}", path.display(), e)))?;

    let all_rows: Vec<&[Data]> = range.rows().collect();
    if all_rows.is_empty() {
        return Ok(Vec::new());
    }

    let columns = detect_columns(&all_rows, path)?;

    let cell_at = |row: &[Data], idx: usize| -> String {
        row.get(idx).map(cell_to_string).unwrap_or_default()
    };

    let mut orders = Vec::new();
    for row in all_rows.iter().skip(columns.header_row + 1) {
        let product_name = cell_at(row, columns.product_name);
        let option_name = cell_at(row, columns.option_name);

        // 상품 정보가 전혀 없는 행은 건너뛴다
        if product_name.trim().is_empty() && option_name.trim().is_empty() {
            continue;
        }

        orders.push(OrderRow {
            product_name,
            option_name,
            quantity: cell_at(row, columns.quantity),
            recipient_name: columns
                .recipient_name
                .map(|idx| cell_at(row, idx))
                .unwrap_or_default(),
            orderer_name: columns
                .orderer_name
                .map(|idx| cell_at(row, idx))
                .unwrap_or_default(),
        });
    }

    Ok(orders)
}
