//! 옵션 문자열에서 수량·용량 추출
//!
//! "5개, 240ml", "용량 : 1L 2병" 같은 옵션 표기에서
//! (개수, 원시 용량)을 뽑아낸다.
//!
//! 패턴 우선순위가 동작을 결정한다: "5개, 240ml"는 패턴 1과
//! 패턴 5 양쪽에 걸리지만 더 구체적인 패턴 1로 해석되어야 한다.
//! 우선순위를 제어 흐름이 아니라 명시적 테이블로 둔다.

use lazy_static::lazy_static;
use regex::Regex;

/// 캡처 그룹의 순서
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CaptureOrder {
    /// (개수, 용량) 순서: "5개, 240ml"
    CountThenCapacity,
    /// (용량, 개수) 순서: "용량 : 1L 2병"
    CapacityThenCount,
    /// 용량만. 개수는 1로 본다
    CapacityOnly,
}

struct OptionPattern {
    regex: Regex,
    order: CaptureOrder,
}

impl OptionPattern {
    fn new(pattern: &str, order: CaptureOrder) -> Self {
        Self {
            regex: Regex::new(pattern).unwrap(),
            order,
        }
    }
}

lazy_static! {
    /// 우선순위 순서의 패턴 목록. 먼저 성공한 패턴이 이긴다.
    static ref OPTION_PATTERNS: Vec<OptionPattern> = vec![
        // 패턴 1: "5개, 240ml"
        OptionPattern::new(
            r"(\d+)개,\s*(\d+(?:\.\d+)?(?:ml|L))",
            CaptureOrder::CountThenCapacity,
        ),
        // 패턴 2: "2, 1L" ("개" 없음)
        OptionPattern::new(
            r"(\d+),\s*(\d+(?:\.\d+)?(?:ml|L))",
            CaptureOrder::CountThenCapacity,
        ),
        // 패턴 3: "용량 : 1L 2병" (용량과 개수가 역순)
        OptionPattern::new(
            r"용량\s*:\s*(\d+(?:\.\d+)?(?:ml|L))\s*(\d+)병",
            CaptureOrder::CapacityThenCount,
        ),
        // 패턴 4: "500ml 3병"
        OptionPattern::new(
            r"(\d+(?:\.\d+)?(?:ml|L))\s*(\d+)병",
            CaptureOrder::CapacityThenCount,
        ),
        // 패턴 5: 용량 토큰만 ("플레인 쌀요거트 1L")
        OptionPattern::new(
            r"(\d+(?:\.\d+)?(?:ml|L))",
            CaptureOrder::CapacityOnly,
        ),
    ];
}

/// 옵션 문자열에서 (개수, 원시 용량)을 추출
///
/// 어느 패턴에도 맞지 않거나 입력이 공란이면 (1, "")을 돌려준다.
/// 실패는 정의된 기본값이지 에러가 아니다.
pub fn parse_option_info(option_text: &str) -> (u32, String) {
    if option_text.is_empty() {
        return (1, String::new());
    }

    for pattern in OPTION_PATTERNS.iter() {
        if let Some(caps) = pattern.regex.captures(option_text) {
            return match pattern.order {
                CaptureOrder::CountThenCapacity => {
                    let count = caps[1].parse::<u32>().unwrap_or(1);
                    (count, caps[2].to_string())
                }
                CaptureOrder::CapacityThenCount => {
                    let count = caps[2].parse::<u32>().unwrap_or(1);
                    (count, caps[1].to_string())
                }
                CaptureOrder::CapacityOnly => (1, caps[1].to_string()),
            };
        }
    }

    (1, String::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern1_count_with_gae() {
        assert_eq!(parse_option_info("5개, 240ml"), (5, "240ml".to_string()));
        assert_eq!(parse_option_info("10개, 500ml"), (10, "500ml".to_string()));
        assert_eq!(parse_option_info("2개, 1000ml"), (2, "1000ml".to_string()));
    }

    #[test]
    fn test_pattern2_count_without_gae() {
        assert_eq!(parse_option_info("2, 1L"), (2, "1L".to_string()));
        assert_eq!(parse_option_info("4, 1L"), (4, "1L".to_string()));
    }

    #[test]
    fn test_pattern3_capacity_label_reversed() {
        // "용량 :" 표기는 용량이 먼저, 개수가 나중
        assert_eq!(parse_option_info("용량 : 1L 2병"), (2, "1L".to_string()));
        assert_eq!(
            parse_option_info("서로 단호박식혜 : 단호박식혜, 용량 : 240ml 5병"),
            (5, "240ml".to_string())
        );
    }

    #[test]
    fn test_pattern4_bottles() {
        assert_eq!(parse_option_info("500ml 3병"), (3, "500ml".to_string()));
        assert_eq!(parse_option_info("500ml 5병"), (5, "500ml".to_string()));
    }

    #[test]
    fn test_pattern5_bare_capacity() {
        assert_eq!(
            parse_option_info("플레인 쌀요거트 1L"),
            (1, "1L".to_string())
        );
        assert_eq!(parse_option_info("1.5L"), (1, "1.5L".to_string()));
    }

    #[test]
    fn test_priority_specific_wins() {
        // 패턴 1과 패턴 5 양쪽에 걸리는 입력은 패턴 1로 해석
        assert_eq!(parse_option_info("5개, 240ml"), (5, "240ml".to_string()));
        // 패턴 4보다 패턴 3이 우선
        assert_eq!(
            parse_option_info("서로 식혜 용량 : 1L 2병"),
            (2, "1L".to_string())
        );
    }

    #[test]
    fn test_no_match_defaults() {
        assert_eq!(parse_option_info(""), (1, String::new()));
        assert_eq!(parse_option_info("옵션 없음"), (1, String::new()));
    }
}
