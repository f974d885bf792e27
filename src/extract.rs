//! Best-effort numeric extraction from free-text dataset fields.
//!
//! The database stores counts and money inside descriptive strings
//! ("150 (80 physical, 70 virtual)", "$45M annually", "50 routers, 200
//! switches"). These helpers pull the numbers out for aggregation. They
//! never fail: absent or malformed input degrades to 0, because the
//! consumers are display aggregates, not validators.

use regex::Regex;
use std::sync::OnceLock;

fn re_integer() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+").unwrap())
}

fn re_grouped_integer() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\d,]+").unwrap())
}

/// Value of the first contiguous digit run in `text`, or 0 when there is
/// none (or the run overflows u64).
#[must_use]
pub fn first_integer(text: &str) -> u64 {
    re_integer()
        .find(text)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

/// Finds `<integer> <label>` (case-insensitive, optional whitespace) and
/// returns the integer, or 0 when the label never appears with a count.
#[must_use]
pub fn labeled_count(text: &str, label: &str) -> u64 {
    let pattern = format!(r"(?i)(\d+)\s*{}", regex::escape(label));
    let Ok(re) = Regex::new(&pattern) else {
        return 0;
    };
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

/// [`labeled_count`] for several labels at once, one entry per requested
/// label in label order, zero where unmatched.
#[must_use]
pub fn labeled_counts(text: &str, labels: &[&str]) -> Vec<(String, u64)> {
    labels
        .iter()
        .map(|label| ((*label).to_string(), labeled_count(text, label)))
        .collect()
}

/// First run of digits and thousands separators, commas stripped, parsed
/// as an integer. Currency symbols and magnitude suffixes are ignored, so
/// "$45M annually" yields 45.
///
/// A decimal point terminates the digit run: "$1.2B (Budget)" yields 1.
/// That matches the observed behavior of the dashboard this data comes
/// from and is kept deliberately.
#[must_use]
pub fn currency_amount(text: &str) -> u64 {
    re_grouped_integer()
        .find(text)
        .and_then(|m| m.as_str().replace(',', "").parse().ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_integer_basic() {
        assert_eq!(first_integer("2500"), 2500);
        assert_eq!(first_integer("150 (80 physical, 70 virtual)"), 150);
        assert_eq!(first_integer("approx 42 units"), 42);
    }

    #[test]
    fn test_first_integer_degrades_to_zero() {
        assert_eq!(first_integer(""), 0);
        assert_eq!(first_integer("abc"), 0);
        assert_eq!(first_integer("no digits here"), 0);
    }

    #[test]
    fn test_first_integer_overflow_degrades_to_zero() {
        assert_eq!(first_integer("99999999999999999999999999"), 0);
    }

    #[test]
    fn test_labeled_count() {
        let text = "50 routers, 200 switches, 25 firewalls, MPLS network";
        assert_eq!(labeled_count(text, "routers"), 50);
        assert_eq!(labeled_count(text, "switches"), 200);
        assert_eq!(labeled_count(text, "firewalls"), 25);
        assert_eq!(labeled_count(text, "servers"), 0);
    }

    #[test]
    fn test_labeled_count_case_insensitive() {
        assert_eq!(labeled_count("80 Routers", "routers"), 80);
        assert_eq!(labeled_count("600 switches (stores)", "SWITCHES"), 600);
    }

    #[test]
    fn test_labeled_count_no_space() {
        assert_eq!(labeled_count("12routers", "routers"), 12);
    }

    #[test]
    fn test_labeled_counts_order_and_zeros() {
        let counts = labeled_counts(
            "50 routers, 200 switches, 25 firewalls",
            &["routers", "switches"],
        );
        assert_eq!(
            counts,
            vec![("routers".to_string(), 50), ("switches".to_string(), 200)]
        );

        let counts = labeled_counts("no gear listed", &["routers", "switches"]);
        assert_eq!(
            counts,
            vec![("routers".to_string(), 0), ("switches".to_string(), 0)]
        );
    }

    #[test]
    fn test_currency_amount() {
        assert_eq!(currency_amount("$45M annually"), 45);
        assert_eq!(currency_amount("$1,500,000"), 1500000);
        assert_eq!(currency_amount("$800K/year with TechSoup"), 800);
        assert_eq!(currency_amount(""), 0);
        assert_eq!(currency_amount("TBD"), 0);
    }

    #[test]
    fn test_currency_amount_decimal_truncates() {
        // Known limitation: the digit run stops at the decimal point, so
        // fractional figures lose everything past the leading group.
        assert_eq!(currency_amount("$1.2B (Budget)"), 1);
        assert_eq!(currency_amount("$1.5M/year with regional MSP"), 1);
    }

    #[test]
    fn test_extractors_never_panic_on_odd_input() {
        for text in ["", ",,,,", "(((", "\u{1F600} 7 routers", "\0\0"] {
            let _ = first_integer(text);
            let _ = currency_amount(text);
            let _ = labeled_count(text, "routers");
        }
        // A label full of regex metacharacters must not build a bad pattern.
        assert_eq!(labeled_count("5 a+b", "a+b"), 5);
    }
}
