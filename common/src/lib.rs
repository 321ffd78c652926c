//! Seoro Orders Common Library
//!
//! 출고내역서의 상품/옵션 문자열을 정규화하고
//! 출고 집계·택배박스 분류를 수행하는 코어 로직

pub mod types;
pub mod error;
pub mod capacity;
pub mod option_parser;
pub mod keyword;
pub mod mapping;
pub mod aggregate;
pub mod boxes;
pub mod shipment;
pub mod stock;

pub use types::{MappingStats, OrderRow, ProductInfo, ReviewOrder};
pub use error::{Error, Result};
pub use capacity::{normalize_capacity, CapacityMode};
pub use option_parser::parse_option_info;
pub use keyword::classify_product;
pub use mapping::ProductMapper;
pub use aggregate::group_orders_by_recipient;
pub use boxes::{aggregate_boxes, classify_box, BoxCategory};
pub use shipment::{aggregate_shipment, ShipmentSummary};
