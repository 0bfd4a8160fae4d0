// Formatting and ordering helpers shared by the engine and any presentation layer.
use std::cell::RefCell;
use std::cmp::Ordering;

use feruca::Collator;

const INTEGER_TOLERANCE: f64 = 1e-9;

thread_local! {
    static COLLATOR: RefCell<Collator> = RefCell::new(Collator::default());
}

/// Renders an amount the way every view shows it: no decimals when the value
/// is within 1e-9 of an integer, otherwise exactly two. Never uses thousands
/// separators.
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let rounded = value.round();
    if (value - rounded).abs() < INTEGER_TOLERANCE {
        // `+ 0.0` turns -0.0 into 0.0
        return format!("{:.0}", rounded + 0.0);
    }
    let formatted = format!("{:.2}", value);
    if formatted == "-0.00" {
        "0.00".to_string()
    } else {
        formatted
    }
}

/// Display ordering for group and region keys: Unicode collation with the
/// CLDR root locale, then the raw string so distinct keys never compare equal.
pub fn compare_keys(a: &str, b: &str) -> Ordering {
    COLLATOR
        .with(|collator| collator.borrow_mut().collate(a, b))
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_integers() {
        assert_eq!(format_amount(510.0), "510");
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(-0.0), "0");
        assert_eq!(format_amount(1_000_000.0), "1000000");
        assert_eq!(format_amount(42.0000000001), "42");
    }

    #[test]
    fn test_format_amount_fractions() {
        assert_eq!(format_amount(3.06), "3.06");
        assert_eq!(format_amount(0.5), "0.50");
        assert_eq!(format_amount(1234.567), "1234.57");
        assert_eq!(format_amount(-12.25), "-12.25");
    }

    #[test]
    fn test_format_amount_tiny_negative_has_no_sign() {
        assert_eq!(format_amount(-0.004), "0.00");
        assert_eq!(format_amount(-0.001), "0.00");
        assert_eq!(format_amount(-0.006), "-0.01");
    }

    #[test]
    fn test_format_amount_non_finite() {
        assert_eq!(format_amount(f64::NAN), "0");
    }

    #[test]
    fn test_compare_keys() {
        assert_eq!(compare_keys("apple", "Banana"), Ordering::Less);
        assert_eq!(compare_keys("apple", "Apple"), Ordering::Less);
        assert_eq!(compare_keys("Éclair", "Zebra"), Ordering::Less);
        assert_eq!(compare_keys("eclair", "Éclair"), Ordering::Less);
        assert_eq!(compare_keys("same", "same"), Ordering::Equal);
    }

    #[test]
    fn test_compare_keys_sorts_accented_keys_in_place() {
        let mut keys = vec!["Zebra", "Éclair", "apple", "Apple"];
        keys.sort_by(|a, b| compare_keys(a, b));
        assert_eq!(keys, vec!["apple", "Apple", "Éclair", "Zebra"]);
    }
}
