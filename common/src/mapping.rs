//! 제품-옵션 정확 매핑 테이블
//!
//! 출고내역서의 (상품이름, 옵션이름) 쌍을 표준화된
//! (제품분류, 용량, 개수)로 매핑한다.
//!
//! 룩업은 정확 문자열 일치이므로 테이블 구성 규칙 자체가 계약이다.
//! 개별 리터럴 케이스에 더해, 개수 범위 × 용량 집합의 곱으로
//! 기계 생성되는 케이스 패밀리를 선언적 기술자로 정의하고
//! 구성 시점에 평탄한 맵으로 컴파일한다.
//!
//! 사용법:
//! ```
//! use seoro_orders_common::mapping::ProductMapper;
//!
//! let mapper = ProductMapper::builtin().unwrap();
//! let info = mapper.get_product_info("서로 식혜", "2개, 1000ml");
//! assert_eq!(info.product_type, "식혜");
//! assert_eq!(info.capacity, "1L");
//! assert_eq!(info.count, 2);
//! ```

use crate::error::{Error, Result};
use crate::keyword;
use crate::option_parser::parse_option_info;
use crate::types::{
    MappingStats, ProductInfo, PRODUCT_OTHER, PRODUCT_PUMPKIN_SIKHYE, PRODUCT_RICE_YOGURT,
    PRODUCT_SIKHYE, PRODUCT_SUJEONGGWA,
};
use std::collections::HashMap;

/// 매핑 키: (상품이름, 옵션이름) 원문 그대로
pub type MappingKey = (String, String);

/// 패밀리의 개수 사양
#[derive(Debug, Clone)]
pub enum Counts {
    /// 양끝 포함 범위
    Range(u32, u32),
    /// 나열된 개수만
    List(&'static [u32]),
}

impl Counts {
    fn iter(&self) -> Box<dyn Iterator<Item = u32> + '_> {
        match self {
            Counts::Range(lo, hi) => Box::new(*lo..=*hi),
            Counts::List(values) => Box::new(values.iter().copied()),
        }
    }
}

/// 패밀리가 결과에 기록할 용량 라벨
#[derive(Debug, Clone)]
pub enum CapacityLabel {
    /// 옵션 표기와 무관한 고정 라벨 (예: "1000ml" 표기 → "1L")
    Fixed(&'static str),
    /// 교차곱의 용량을 그대로 사용
    FromOption,
}

/// 기계 생성 케이스 패밀리 기술자
///
/// `option_template`의 `{n}`은 개수, `{c}`는 용량으로 치환된다.
/// `capacities`가 비어 있으면 템플릿에 용량 리터럴이 포함된 것으로 보고
/// 개수 축만 전개한다.
#[derive(Debug, Clone)]
pub struct MappingFamily {
    pub product_name: &'static str,
    pub option_template: &'static str,
    pub counts: Counts,
    pub capacities: &'static [&'static str],
    pub product_type: &'static str,
    pub capacity: CapacityLabel,
}

impl MappingFamily {
    /// 패밀리를 평탄한 매핑 항목들로 전개
    pub fn expand(&self) -> Vec<(MappingKey, ProductInfo)> {
        let mut entries = Vec::new();

        let capacities: &[&str] = if self.capacities.is_empty() {
            &[""]
        } else {
            self.capacities
        };

        for count in self.counts.iter() {
            for cap in capacities {
                let option = self
                    .option_template
                    .replace("{n}", &count.to_string())
                    .replace("{c}", cap);

                let label = match &self.capacity {
                    CapacityLabel::Fixed(fixed) => fixed,
                    CapacityLabel::FromOption => cap,
                };

                entries.push((
                    (self.product_name.to_string(), option),
                    ProductInfo::new(self.product_type, label, count),
                ));
            }
        }

        entries
    }
}

/// 기계 생성 케이스 패밀리 일람
pub fn builtin_families() -> Vec<MappingFamily> {
    const VEGAN_YOGURT: &str = "서로 쌀요거트 플레인 무가당 무유당 비건";
    const PUMPKIN_MALT: &str = "[서로 단호박식혜] 수제 전통 1L 국산 엿기름";
    const PUMPKIN_WHOLE: &str = "[서로 단호박식혜] 수제 단호박 통째로";

    vec![
        // 서로 플레인 쌀요거트 (1~4개, 1000ml 표기)
        MappingFamily {
            product_name: "서로 플레인 쌀요거트",
            option_template: "{n}개, 1000ml",
            counts: Counts::Range(1, 4),
            capacities: &[],
            product_type: PRODUCT_RICE_YOGURT,
            capacity: CapacityLabel::Fixed("1L"),
        },
        // 비건 쌀요거트 (1~4개, "개" 포함)
        MappingFamily {
            product_name: VEGAN_YOGURT,
            option_template: "{n}개, 1L",
            counts: Counts::Range(1, 4),
            capacities: &[],
            product_type: PRODUCT_RICE_YOGURT,
            capacity: CapacityLabel::Fixed("1L"),
        },
        // 비건 쌀요거트 (1~4개, "개" 없음)
        MappingFamily {
            product_name: VEGAN_YOGURT,
            option_template: "{n}, 1L",
            counts: Counts::Range(1, 4),
            capacities: &[],
            product_type: PRODUCT_RICE_YOGURT,
            capacity: CapacityLabel::Fixed("1L"),
        },
        // 비건 쌀요거트 (1~4개, 1000ml 표기)
        MappingFamily {
            product_name: VEGAN_YOGURT,
            option_template: "{n}, 1000ml",
            counts: Counts::Range(1, 4),
            capacities: &[],
            product_type: PRODUCT_RICE_YOGURT,
            capacity: CapacityLabel::Fixed("1L"),
        },
        // [서로 ] 수제 단호박 통째로 (2~6개)
        MappingFamily {
            product_name: "단호박식혜",
            option_template: "[서로 ] 수제 단호박 통째로, {n}개, 1L",
            counts: Counts::Range(2, 6),
            capacities: &[],
            product_type: PRODUCT_PUMPKIN_SIKHYE,
            capacity: CapacityLabel::Fixed("1L"),
        },
        // 자일로스설탕 케이스 (2~4개). 옵션 선두 공백이 의도된 표기
        MappingFamily {
            product_name: "단호박식혜",
            option_template: " 자일로스설탕 밥알없는 단유 수제 감주 호박 식혜, {n}개, 1L",
            counts: Counts::Range(2, 4),
            capacities: &[],
            product_type: PRODUCT_PUMPKIN_SIKHYE,
            capacity: CapacityLabel::Fixed("1L"),
        },
        // [서로 진하고 깊은 식혜] (2~10개 × 240ml/1L)
        MappingFamily {
            product_name: "[서로 진하고 깊은 식혜] 전통 국산 수제 식혜",
            option_template: "{n}개, {c}",
            counts: Counts::Range(2, 10),
            capacities: &["240ml", "1L"],
            product_type: PRODUCT_SIKHYE,
            capacity: CapacityLabel::FromOption,
        },
        // [서로 식혜] 수제 전통 국산 엿기름 (2~5병 × 240ml/1L)
        MappingFamily {
            product_name: "[서로 식혜] 수제 전통 국산 엿기름",
            option_template: "서로 식혜 : {c} {n}병",
            counts: Counts::Range(2, 5),
            capacities: &["240ml", "1L"],
            product_type: PRODUCT_SIKHYE,
            capacity: CapacityLabel::FromOption,
        },
        // 위와 동일하되 실데이터에 존재하는 깨진 표기("식혤") 옵션
        MappingFamily {
            product_name: "[서로 식혜] 수제 전통 국산 엿기름",
            option_template: "서로 식혤 : {c} {n}병",
            counts: Counts::Range(2, 5),
            capacities: &["240ml", "1L"],
            product_type: PRODUCT_SIKHYE,
            capacity: CapacityLabel::FromOption,
        },
        // [서로 수정과] 수제 전통 (3, 5, 10개)
        MappingFamily {
            product_name: "[서로 수정과] 수제 전통",
            option_template: "{n}개, 500ml",
            counts: Counts::List(&[3, 5, 10]),
            capacities: &[],
            product_type: PRODUCT_SUJEONGGWA,
            capacity: CapacityLabel::Fixed("500ml"),
        },
        // [서로 수정과] 피라미딩 (3, 5병)
        MappingFamily {
            product_name: "[서로 수정과] 500ml 3병 피라미딩 수정과 수제 전통",
            option_template: "서로 수정과 500ml: 500ml {n}병",
            counts: Counts::List(&[3, 5]),
            capacities: &[],
            product_type: PRODUCT_SUJEONGGWA,
            capacity: CapacityLabel::Fixed("500ml"),
        },
        // [서로 단호박식혜] 엿기름 1L (1~10병)
        MappingFamily {
            product_name: PUMPKIN_MALT,
            option_template: "서로 단호박식혜 : 단호박식혜, 용량 : 1L {n}병",
            counts: Counts::Range(1, 10),
            capacities: &[],
            product_type: PRODUCT_PUMPKIN_SIKHYE,
            capacity: CapacityLabel::Fixed("1L"),
        },
        // [서로 단호박식혜] 엿기름 240ml (5, 10병만)
        MappingFamily {
            product_name: PUMPKIN_MALT,
            option_template: "서로 단호박식혜 : 단호박식혜, 용량 : 240ml {n}병",
            counts: Counts::List(&[5, 10]),
            capacities: &[],
            product_type: PRODUCT_PUMPKIN_SIKHYE,
            capacity: CapacityLabel::Fixed("240ml"),
        },
        // [서로 단호박식혜] 수제 단호박 통째로 1L (2~10개)
        MappingFamily {
            product_name: PUMPKIN_WHOLE,
            option_template: "{n}개, 1L",
            counts: Counts::Range(2, 10),
            capacities: &[],
            product_type: PRODUCT_PUMPKIN_SIKHYE,
            capacity: CapacityLabel::Fixed("1L"),
        },
        // [서로 단호박식혜] 수제 단호박 통째로 240ml (5, 10개만)
        MappingFamily {
            product_name: PUMPKIN_WHOLE,
            option_template: "{n}개, 240ml",
            counts: Counts::List(&[5, 10]),
            capacities: &[],
            product_type: PRODUCT_PUMPKIN_SIKHYE,
            capacity: CapacityLabel::Fixed("240ml"),
        },
    ]
}

/// 개별 리터럴 케이스: (상품이름, 옵션이름, 제품분류, 용량, 개수)
fn literal_cases() -> Vec<(&'static str, &'static str, &'static str, &'static str, u32)> {
    vec![
        ("플레인 쌀요거트:", "플레인 쌀요거트 200ml", PRODUCT_RICE_YOGURT, "200ml", 1),
        ("플레인 쌀요거트:", "플레인 쌀요거트 1L", PRODUCT_RICE_YOGURT, "1L", 1),
        ("플레인 200ml", "서로 쌀요거트 플레인 무설탕 무유당 비건, 1개, 200ml", PRODUCT_RICE_YOGURT, "200ml", 1),
        ("플레인 200ml", "서로 쌀요거트 플레인 무설탕 무유당 비건, 1, 200ml", PRODUCT_RICE_YOGURT, "200ml", 1),
        // 옵션 공란 케이스
        ("[서로 쌀요거트] 쌀누룩 비건 요거트 무설탕 마시는요거트 수제 대용량 플레인 1L", "", PRODUCT_RICE_YOGURT, "1L", 1),
        ("[서로 쌀요거트] 무설탕 수제 비건 마시는요거트", "[서로 쌀요거트] 무설탕 수제 비건 마시는요거트 : 200ml 5병", PRODUCT_RICE_YOGURT, "200ml", 5),
        ("서로 식혜", "2개, 1000ml", PRODUCT_SIKHYE, "1L", 2),
        // 깨진 표기("식혤")의 상품이름도 실데이터에 존재한다
        ("서로 식혤", "2개, 1000ml", PRODUCT_SIKHYE, "1L", 2),
        ("서로 단호박식혜", "2개, 1000ml", PRODUCT_PUMPKIN_SIKHYE, "1L", 2),
        ("단호박식혜", "[서로 ] 수제 단호박 통째로, 10개, 240ml", PRODUCT_PUMPKIN_SIKHYE, "240ml", 10),
        ("[서로 수정과] 500ml 수제 전통", "서로 수정과 : 500ml 3병", PRODUCT_SUJEONGGWA, "500ml", 3),
        ("[서로 수정과] 500ml 수제 전통", "서로 수정과 : 500ml 5병", PRODUCT_SUJEONGGWA, "500ml", 5),
    ]
}

/// 용량별 고정 개수 케이스 (호박식혜/일반식혜 혼합 상품)
///
/// 240ml는 2개 고정, 1L/1.5L은 1개. 240ml에는 "2병" 표기 변형이 따로 있다.
fn capacity_pair_cases() -> Vec<(MappingKey, ProductInfo)> {
    const MIXED_SIKHYE: &str = "[서로 식혜] 1L 호박식혜 단호박식혜 수제 전통 국산 엿기름";
    const PAIRS: &[(&str, u32)] = &[("240ml", 2), ("1L", 1), ("1.5L", 1)];

    let mut entries = Vec::new();

    for (capacity, count) in PAIRS {
        entries.push((
            (
                MIXED_SIKHYE.to_string(),
                format!("서로 식혜: 단호박식혜 / 용량: {}", capacity),
            ),
            ProductInfo::new(PRODUCT_PUMPKIN_SIKHYE, capacity, *count),
        ));
        entries.push((
            (
                MIXED_SIKHYE.to_string(),
                format!("서로 식혜: 일반식혜 / 용량: {}", capacity),
            ),
            ProductInfo::new(PRODUCT_SIKHYE, capacity, *count),
        ));

        // 240ml만 "2병" 표기 변형 추가
        if *capacity == "240ml" {
            entries.push((
                (
                    MIXED_SIKHYE.to_string(),
                    format!("서로 식혜: 단호박식혜 / 용량: {} {}병", capacity, count),
                ),
                ProductInfo::new(PRODUCT_PUMPKIN_SIKHYE, capacity, *count),
            ));
            entries.push((
                (
                    MIXED_SIKHYE.to_string(),
                    format!("서로 식혜: 일반식혜 / 용량: {} {}병", capacity, count),
                ),
                ProductInfo::new(PRODUCT_SIKHYE, capacity, *count),
            ));
        }
    }

    entries
}

/// 전체 매핑 테이블 구성
///
/// 키가 중복되면 말없이 덮어쓰지 않고 에러로 거부한다.
pub fn build_mapping_table() -> Result<HashMap<MappingKey, ProductInfo>> {
    let mut table = HashMap::new();

    let mut insert = |table: &mut HashMap<MappingKey, ProductInfo>,
                      key: MappingKey,
                      info: ProductInfo|
     -> Result<()> {
        if table.contains_key(&key) {
            return Err(Error::DuplicateMappingKey {
                product_name: key.0,
                option_name: key.1,
            });
        }
        table.insert(key, info);
        Ok(())
    };

    for (name, option, product_type, capacity, count) in literal_cases() {
        insert(
            &mut table,
            (name.to_string(), option.to_string()),
            ProductInfo::new(product_type, capacity, count),
        )?;
    }

    for (key, info) in capacity_pair_cases() {
        insert(&mut table, key, info)?;
    }

    for family in builtin_families() {
        for (key, info) in family.expand() {
            insert(&mut table, key, info)?;
        }
    }

    Ok(table)
}

/// 제품 매핑 처리기
///
/// 구성 후 불변. 프로세스당 한 번 만들어 주입해서 재사용한다.
#[derive(Debug, Clone)]
pub struct ProductMapper {
    table: HashMap<MappingKey, ProductInfo>,
}

impl ProductMapper {
    /// 내장 매핑 테이블로 초기화
    pub fn builtin() -> Result<Self> {
        Ok(Self {
            table: build_mapping_table()?,
        })
    }

    /// 정확 매핑 룩업 (이중 시도)
    ///
    /// 1차: 원본 키 그대로 (선두 공백 케이스 보존용)
    /// 2차: 양끝 공백을 제거한 키
    pub fn lookup(&self, product_name: &str, option_name: &str) -> Option<&ProductInfo> {
        let original_key = (product_name.to_string(), option_name.to_string());
        if let Some(info) = self.table.get(&original_key) {
            return Some(info);
        }

        let stripped_key = (
            product_name.trim().to_string(),
            option_name.trim().to_string(),
        );
        self.table.get(&stripped_key)
    }

    /// 통합 분류 진입점
    ///
    /// 정확 매핑을 먼저 시도하고, 실패하면 키워드 휴리스틱과
    /// 옵션 파서로 넘어간다. 양쪽 모두 실패하면 ("기타", "", 1).
    pub fn get_product_info(&self, product_name: &str, option_name: &str) -> ProductInfo {
        if let Some(info) = self.lookup(product_name, option_name) {
            return info.clone();
        }

        let product_type = keyword::classify_product(product_name, option_name);
        let (count, capacity) = parse_option_info(option_name);

        if product_type == PRODUCT_OTHER && capacity.is_empty() {
            return ProductInfo::other();
        }

        ProductInfo {
            product_type: product_type.to_string(),
            capacity,
            count,
        }
    }

    /// 매핑 테이블 통계
    pub fn stats(&self) -> MappingStats {
        let mut product_stats: HashMap<String, usize> = HashMap::new();
        for info in self.table.values() {
            *product_stats.entry(info.product_type.clone()).or_insert(0) += 1;
        }

        MappingStats {
            total_cases: self.table.len(),
            product_stats,
        }
    }

    /// 샘플 데이터로 매핑 검증
    pub fn validate_samples(&self, samples: &[(String, String)]) -> ValidationReport {
        let results: Vec<SampleResult> = samples
            .iter()
            .map(|(product_name, option_name)| {
                let result = self.get_product_info(product_name, option_name);
                let success = result.product_type != PRODUCT_OTHER;
                SampleResult {
                    product_name: product_name.clone(),
                    option_name: option_name.clone(),
                    result,
                    success,
                }
            })
            .collect();

        let success_count = results.iter().filter(|r| r.success).count();
        let total_count = results.len();
        let success_rate = if total_count > 0 {
            success_count as f64 / total_count as f64 * 100.0
        } else {
            0.0
        };

        ValidationReport {
            results,
            success_count,
            total_count,
            success_rate,
        }
    }
}

/// 샘플 검증의 개별 결과
#[derive(Debug, Clone)]
pub struct SampleResult {
    pub product_name: String,
    pub option_name: String,
    pub result: ProductInfo,
    pub success: bool,
}

/// 샘플 검증 결과
#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub results: Vec<SampleResult>,
    pub success_count: usize,
    pub total_count: usize,
    pub success_rate: f64,
}
