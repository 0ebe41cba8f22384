//! # 문자열 유틸리티
//!
//! 쿼리 파라미터처럼 느슨하게 들어오는 문자열 값을 정리하는 함수들입니다.

/// 앞뒤 공백을 제거하고 빈 문자열은 `None`으로 바꿉니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 양의 정수로 해석하고, 없거나 숫자가 아니거나 0이면 `default`를 반환합니다.
pub fn parse_positive_or(value: Option<&str>, default: u64) -> u64 {
    value
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(default)
}

/// `"true"` / `"false"`만 불리언으로 인정합니다. 그 외 값은 무시합니다.
pub fn parse_strict_bool(value: Option<&str>) -> Option<bool> {
    match value {
        Some("true") => Some(true),
        Some("false") => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(clean_optional_string(Some("Sales".to_string())), Some("Sales".to_string()));
        assert_eq!(clean_optional_string(Some("  IT  ".to_string())), Some("IT".to_string()));
        assert_eq!(clean_optional_string(Some("".to_string())), None);
        assert_eq!(clean_optional_string(Some("   ".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_parse_positive_or() {
        assert_eq!(parse_positive_or(Some("2"), 1), 2);
        assert_eq!(parse_positive_or(Some(" 5 "), 20), 5);
        assert_eq!(parse_positive_or(Some("0"), 20), 20);
        assert_eq!(parse_positive_or(Some("-3"), 1), 1);
        assert_eq!(parse_positive_or(Some("abc"), 1), 1);
        assert_eq!(parse_positive_or(None, 20), 20);
    }

    #[test]
    fn test_parse_strict_bool() {
        assert_eq!(parse_strict_bool(Some("true")), Some(true));
        assert_eq!(parse_strict_bool(Some("false")), Some(false));
        assert_eq!(parse_strict_bool(Some("TRUE")), None);
        assert_eq!(parse_strict_bool(Some("1")), None);
        assert_eq!(parse_strict_bool(None), None);
    }
}
