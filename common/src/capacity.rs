//! 용량 표준화
//!
//! "1000ml", "1L", "200ml" 같은 원시 용량 토큰을
//! 다섯 가지 표준 라벨로 통일한다.
//!
//! 출고 현황용(Display)과 박스 계산용(Box)의 차이는 단 하나:
//! Box 모드는 200ml를 240ml로 접어 넣는다.

use lazy_static::lazy_static;
use regex::Regex;

/// 표준화 모드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityMode {
    /// 출고 현황용: 200ml를 그대로 유지
    Display,
    /// 박스 계산용: 200ml → 240ml 변환
    Box,
}

/// 우선순위 순서의 접두 패턴 테이블: (패턴, Display 라벨, Box 라벨)
///
/// 먼저 일치하는 패턴이 이긴다. "1L"보다 "1.5L"을 먼저 검사해야 한다.
struct CapacityPattern {
    regex: Regex,
    display: &'static str,
    for_box: &'static str,
}

impl CapacityPattern {
    fn new(pattern: &str, display: &'static str, for_box: &'static str) -> Self {
        Self {
            regex: Regex::new(pattern).unwrap(),
            display,
            for_box,
        }
    }
}

lazy_static! {
    static ref CAPACITY_PATTERNS: Vec<CapacityPattern> = vec![
        CapacityPattern::new(r"(?i)^1\.5L", "1.5L", "1.5L"),
        CapacityPattern::new(r"(?i)^(?:1L|1000ml)", "1L", "1L"),
        CapacityPattern::new(r"(?i)^500ml", "500ml", "500ml"),
        CapacityPattern::new(r"(?i)^240ml", "240ml", "240ml"),
        CapacityPattern::new(r"(?i)^200ml", "200ml", "240ml"),
    ];
}

/// 용량 토큰을 표준 라벨로 변환
///
/// 어느 패턴에도 맞지 않으면 입력을 그대로 돌려준다(에러 아님).
/// 빈 입력은 빈 문자열.
pub fn normalize_capacity(raw: &str, mode: CapacityMode) -> String {
    if raw.is_empty() {
        return String::new();
    }

    for pattern in CAPACITY_PATTERNS.iter() {
        if pattern.regex.is_match(raw) {
            return match mode {
                CapacityMode::Display => pattern.display.to_string(),
                CapacityMode::Box => pattern.for_box.to_string(),
            };
        }
    }

    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_display() {
        assert_eq!(normalize_capacity("1.5L", CapacityMode::Display), "1.5L");
        assert_eq!(normalize_capacity("1L", CapacityMode::Display), "1L");
        assert_eq!(normalize_capacity("1000ml", CapacityMode::Display), "1L");
        assert_eq!(normalize_capacity("500ml", CapacityMode::Display), "500ml");
        assert_eq!(normalize_capacity("240ml", CapacityMode::Display), "240ml");
        assert_eq!(normalize_capacity("200ml", CapacityMode::Display), "200ml");
    }

    #[test]
    fn test_normalize_box_folds_200ml() {
        // 200ml만 Box 모드에서 240ml로 접힌다
        assert_eq!(normalize_capacity("200ml", CapacityMode::Box), "240ml");

        for token in ["1000ml", "1L", "1.5L", "500ml", "240ml"] {
            assert_eq!(
                normalize_capacity(token, CapacityMode::Display),
                normalize_capacity(token, CapacityMode::Box),
                "Display/Box 불일치: {}",
                token
            );
        }
    }

    #[test]
    fn test_normalize_case_insensitive() {
        assert_eq!(normalize_capacity("1l", CapacityMode::Display), "1L");
        assert_eq!(normalize_capacity("500ML", CapacityMode::Display), "500ml");
        assert_eq!(normalize_capacity("1.5l", CapacityMode::Box), "1.5L");
    }

    #[test]
    fn test_normalize_prefix_priority() {
        // "1.5L"이 "1L"보다 먼저 검사되어야 한다
        assert_eq!(normalize_capacity("1.5L 페트", CapacityMode::Display), "1.5L");
        // 접두 일치이므로 뒤에 글자가 붙어도 인식된다
        assert_eq!(normalize_capacity("1L짜리", CapacityMode::Display), "1L");
    }

    #[test]
    fn test_normalize_passthrough() {
        // 모르는 토큰은 그대로 통과
        assert_eq!(normalize_capacity("300ml", CapacityMode::Display), "300ml");
        assert_eq!(normalize_capacity("대용량", CapacityMode::Box), "대용량");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize_capacity("", CapacityMode::Display), "");
        assert_eq!(normalize_capacity("", CapacityMode::Box), "");
    }
}
