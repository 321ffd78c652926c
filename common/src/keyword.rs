//! 키워드 기반 제품 분류 (휴리스틱)
//!
//! 정확 매핑 테이블에 없는 상품을 옵션이름(우선)과
//! 상품이름(보조)의 부분 문자열 검사로 분류한다.
//!
//! 식혜 판별 조건은 호출 지점마다 다르다:
//! - 옵션이름: "일반식혜" 포함, 또는 "식혜" 포함이면서 "단호박" 미포함
//! - 상품이름 대괄호: "진하고 깊은 식혜" 또는 "식혜" 포함
//! 두 조건을 하나로 합치지 않고 각각 유지한다.

use crate::types::{
    PRODUCT_OTHER, PRODUCT_PUMPKIN_SIKHYE, PRODUCT_RICE_YOGURT, PRODUCT_SIKHYE,
    PRODUCT_SUJEONGGWA,
};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// "[서로 <수식어>]" 형태의 대괄호 수식어
    static ref BRACKET_RE: Regex = Regex::new(r"\[서로\s+([^\]]+)\]").unwrap();
}

/// 옵션이름에서 제품분류 추출 (H열, 1차 신호)
pub fn classify_from_option(option_text: &str) -> &'static str {
    if option_text.is_empty() {
        return PRODUCT_OTHER;
    }

    let text = option_text.to_lowercase();

    if text.contains("단호박식혜") {
        PRODUCT_PUMPKIN_SIKHYE
    } else if text.contains("일반식혜") || (text.contains("식혜") && !text.contains("단호박")) {
        PRODUCT_SIKHYE
    } else if text.contains("수정과") {
        PRODUCT_SUJEONGGWA
    } else if text.contains("쌀요거트") || text.contains("요거트") || text.contains("플레인") {
        PRODUCT_RICE_YOGURT
    } else {
        PRODUCT_OTHER
    }
}

/// 상품이름에서 제품분류 추출 (G열, 보조용)
///
/// "[서로 <수식어>]" 대괄호가 있으면 수식어에 우선순위 검사를 적용하고,
/// 없거나 불일치하면 전체 문자열에서 요거트 계열만 검사한다.
pub fn classify_from_name(product_name: &str) -> &'static str {
    if product_name.is_empty() {
        return PRODUCT_OTHER;
    }

    let name = product_name.to_lowercase();

    if let Some(caps) = BRACKET_RE.captures(&name) {
        let product_key = caps[1].trim();

        if product_key.contains("단호박식혜") {
            return PRODUCT_PUMPKIN_SIKHYE;
        } else if product_key.contains("진하고 깊은 식혜") || product_key.contains("식혜") {
            return PRODUCT_SIKHYE;
        } else if product_key.contains("수정과") {
            return PRODUCT_SUJEONGGWA;
        } else if product_key.contains("쌀요거트") {
            return PRODUCT_RICE_YOGURT;
        }
    }

    if name.contains("쌀요거트") || name.contains("요거트") || name.contains("플레인") {
        return PRODUCT_RICE_YOGURT;
    }

    PRODUCT_OTHER
}

/// 옵션이름 우선, 상품이름 보조의 최종 분류
pub fn classify_product(product_name: &str, option_text: &str) -> &'static str {
    let from_option = classify_from_option(option_text);
    if from_option != PRODUCT_OTHER {
        return from_option;
    }
    classify_from_name(product_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_from_option_priority() {
        // 단호박식혜가 식혜보다 먼저
        assert_eq!(
            classify_from_option("서로 식혜: 단호박식혜 / 용량: 1L"),
            PRODUCT_PUMPKIN_SIKHYE
        );
        assert_eq!(
            classify_from_option("서로 식혜: 일반식혜 / 용량: 240ml"),
            PRODUCT_SIKHYE
        );
        assert_eq!(classify_from_option("수정과 500ml 3병"), PRODUCT_SUJEONGGWA);
        assert_eq!(
            classify_from_option("플레인 쌀요거트 200ml"),
            PRODUCT_RICE_YOGURT
        );
    }

    #[test]
    fn test_classify_from_option_sikhye_marker() {
        // "단호박"이 없는 "식혜"는 일반 식혜
        assert_eq!(classify_from_option("전통 수제 식혜 1L"), PRODUCT_SIKHYE);
        // "단호박" 단독 언급(식혜 없음)은 단호박식혜로 보지 않는다
        assert_eq!(classify_from_option("단호박 1L"), PRODUCT_OTHER);
    }

    #[test]
    fn test_classify_from_option_empty() {
        assert_eq!(classify_from_option(""), PRODUCT_OTHER);
        assert_eq!(classify_from_option("모름"), PRODUCT_OTHER);
    }

    #[test]
    fn test_classify_from_name_bracket() {
        assert_eq!(
            classify_from_name("[서로 단호박식혜] 수제 전통 1L 국산 엿기름"),
            PRODUCT_PUMPKIN_SIKHYE
        );
        assert_eq!(
            classify_from_name("[서로 진하고 깊은 식혜] 전통 국산 수제 식혜"),
            PRODUCT_SIKHYE
        );
        assert_eq!(classify_from_name("[서로 수정과] 수제 전통"), PRODUCT_SUJEONGGWA);
        assert_eq!(
            classify_from_name("[서로 쌀요거트] 무설탕 수제 비건 마시는요거트"),
            PRODUCT_RICE_YOGURT
        );
    }

    #[test]
    fn test_classify_from_name_fallback_yogurt_only() {
        // 대괄호가 없으면 요거트 계열만 전체 문자열 검사
        assert_eq!(classify_from_name("플레인 200ml"), PRODUCT_RICE_YOGURT);
        assert_eq!(classify_from_name("서로 식혜"), PRODUCT_OTHER);
    }

    #[test]
    fn test_classify_product_option_wins() {
        // 옵션이 기타가 아니면 상품이름은 보지 않는다
        assert_eq!(
            classify_product("[서로 수정과] 수제 전통", "플레인 쌀요거트 1L"),
            PRODUCT_RICE_YOGURT
        );
        // 옵션이 기타면 상품이름으로 보조 분류
        assert_eq!(
            classify_product("[서로 수정과] 수제 전통", ""),
            PRODUCT_SUJEONGGWA
        );
        assert_eq!(classify_product("없는제품", "없는옵션"), PRODUCT_OTHER);
    }
}
