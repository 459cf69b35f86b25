use chrono::{NaiveDate, NaiveDateTime};
use model::core::value::Value;

const PHONE_PREFIX: &str = "+91";
const PHONE_DIGITS: usize = 10;

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d/%m/%Y",
    "%m/%d/%Y",
    "%d-%m-%Y",
    "%d %b %Y",
    "%B %d, %Y",
];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%d/%m/%Y %H:%M",
];

/// Keep only digits; fewer than ten digits means the number is
/// unrecoverable. Otherwise format the last ten with the fixed country
/// prefix.
pub fn normalize_phone(raw: &Value) -> Option<String> {
    if raw.is_null() {
        return None;
    }
    let digits: String = raw
        .coerce_string()
        .chars()
        .filter(|c| c.is_ascii_digit())
        .collect();
    if digits.len() < PHONE_DIGITS {
        return None;
    }
    let last = &digits[digits.len() - PHONE_DIGITS..];
    Some(format!("{PHONE_PREFIX}-{last}"))
}

/// Trim, lowercase, capitalize the first letter. Non-string input is
/// coerced to its string form first, so a null category becomes "None".
pub fn normalize_category(raw: &Value) -> String {
    let coerced = raw.coerce_string();
    let lowered = coerced.trim().to_lowercase();
    let mut chars = lowered.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => lowered,
    }
}

/// Tolerant calendar-date parsing. A parse failure is a data-quality event,
/// so the result is simply `None`.
pub fn parse_date(raw: &Value) -> Option<NaiveDate> {
    match raw {
        Value::Date(d) => Some(*d),
        Value::Null => None,
        other => {
            let text = other.as_string()?;
            let text = text.trim();
            for fmt in DATE_FORMATS {
                if let Ok(date) = NaiveDate::parse_from_str(text, fmt) {
                    return Some(date);
                }
            }
            for fmt in DATETIME_FORMATS {
                if let Ok(dt) = NaiveDateTime::parse_from_str(text, fmt) {
                    return Some(dt.date());
                }
            }
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_keeps_last_ten_digits() {
        let raw = Value::String("(0091) 98765-43210".into());
        assert_eq!(normalize_phone(&raw), Some("+91-9876543210".into()));

        let long = Value::String("00919876543210".into());
        assert_eq!(normalize_phone(&long), Some("+91-9876543210".into()));
    }

    #[test]
    fn short_or_null_phone_is_unrecoverable() {
        assert_eq!(normalize_phone(&Value::String("12345".into())), None);
        assert_eq!(normalize_phone(&Value::Null), None);
        assert_eq!(normalize_phone(&Value::String("no digits here".into())), None);
    }

    #[test]
    fn category_is_trimmed_and_capitalized() {
        assert_eq!(
            normalize_category(&Value::String("  electronics ".into())),
            "Electronics"
        );
        assert_eq!(
            normalize_category(&Value::String("HOME APPLIANCES".into())),
            "Home appliances"
        );
    }

    #[test]
    fn category_coerces_non_strings() {
        assert_eq!(normalize_category(&Value::Int(42)), "42");
        assert_eq!(normalize_category(&Value::Null), "None");
        assert_eq!(normalize_category(&Value::String("   ".into())), "");
    }

    #[test]
    fn dates_parse_under_tolerant_formats() {
        let expected = NaiveDate::from_ymd_opt(2023, 4, 13).unwrap();
        for text in [
            "2023-04-13",
            "2023/04/13",
            "13/04/2023",
            "13-04-2023",
            "13 Apr 2023",
            "April 13, 2023",
            "2023-04-13 10:30:00",
        ] {
            assert_eq!(parse_date(&Value::String(text.into())), Some(expected), "{text}");
        }
        // Month-first resolves when day-first is impossible
        assert_eq!(parse_date(&Value::String("04/13/2023".into())), Some(expected));
    }

    #[test]
    fn unparseable_date_is_null_not_error() {
        assert_eq!(parse_date(&Value::String("not a date".into())), None);
        assert_eq!(parse_date(&Value::String("2023-13-45".into())), None);
        assert_eq!(parse_date(&Value::Null), None);
    }
}
