pub const DEFAULT_COVER_COUNT: usize = 46;
/// Upper bound for the configured count; the grid is all eager markup.
pub const MAX_COVER_COUNT: usize = 500;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cover {
    pub src: String,
    pub alt: String,
}

/// Integer-prefix parse of a count: leading whitespace, optional sign,
/// decimal digits, anything after the digits ignored. Only positive values
/// count.
pub fn parse_count(raw: &str) -> Option<usize> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..digits_end];
    if digits.is_empty() || negative {
        return None;
    }
    // Too many digits for usize is still "very large", not invalid.
    let value = digits.parse::<usize>().unwrap_or(usize::MAX);
    (value > 0).then_some(value)
}

/// Number of covers to show: configured override, else the caller's
/// default, else [`DEFAULT_COVER_COUNT`].
pub fn resolve_count(override_raw: Option<&str>, default: Option<i64>) -> usize {
    let total = override_raw
        .and_then(parse_count)
        .or_else(|| default.filter(|d| *d > 0).and_then(|d| usize::try_from(d).ok()))
        .unwrap_or(DEFAULT_COVER_COUNT);
    total.min(MAX_COVER_COUNT)
}

pub fn covers(total: usize) -> Vec<Cover> {
    (1..=total)
        .map(|n| Cover {
            src: format!("/discography/{}.jpg", n),
            alt: format!("Cover {}", n),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_of_twelve_yields_twelve_covers() {
        let total = resolve_count(Some("12"), None);
        assert_eq!(total, 12);
        let list = covers(total);
        assert_eq!(list.len(), 12);
        assert_eq!(list[0].src, "/discography/1.jpg");
        assert_eq!(list[0].alt, "Cover 1");
        assert_eq!(list[11].src, "/discography/12.jpg");
    }

    #[test]
    fn invalid_override_uses_default_or_constant() {
        assert_eq!(resolve_count(Some("-5"), Some(20)), 20);
        assert_eq!(resolve_count(Some("abc"), Some(20)), 20);
        assert_eq!(resolve_count(Some("-5"), None), DEFAULT_COVER_COUNT);
        assert_eq!(resolve_count(Some("abc"), None), 46);
        assert_eq!(resolve_count(Some("0"), None), 46);
        assert_eq!(resolve_count(Some(""), None), 46);
    }

    #[test]
    fn invalid_default_uses_constant() {
        assert_eq!(resolve_count(None, Some(0)), 46);
        assert_eq!(resolve_count(None, Some(-3)), 46);
        assert_eq!(resolve_count(None, None), 46);
        assert_eq!(resolve_count(None, Some(8)), 8);
    }

    #[test]
    fn parses_integer_prefix() {
        assert_eq!(parse_count("12"), Some(12));
        assert_eq!(parse_count("  7"), Some(7));
        assert_eq!(parse_count("+3"), Some(3));
        assert_eq!(parse_count("12.9"), Some(12));
        assert_eq!(parse_count("30px"), Some(30));
        assert_eq!(parse_count("px30"), None);
        assert_eq!(parse_count("-1"), None);
        assert_eq!(parse_count("-"), None);
    }

    #[test]
    fn huge_counts_are_clamped() {
        assert_eq!(resolve_count(Some("100000"), None), MAX_COVER_COUNT);
        assert_eq!(resolve_count(Some("99999999999999999999999999"), None), MAX_COVER_COUNT);
        assert_eq!(resolve_count(None, Some(i64::MAX)), MAX_COVER_COUNT);
    }

    #[test]
    fn zero_covers_is_empty() {
        assert!(covers(0).is_empty());
    }
}
