//! Number formatting helpers for tables and stat cards.

/// Formats a rupee amount with the Indian digit grouping: the last three
/// digits form one group, every group above that has two digits.
///
/// `format_inr(1234567.89)` -> `"₹12,34,567.89"`
pub fn format_inr(amount: f64) -> String {
    let negative = amount < 0.0;
    let rounded = (amount.abs() * 100.0).round() / 100.0;
    let integer = rounded.trunc() as i64;
    let paise = ((rounded - rounded.trunc()) * 100.0).round() as i64;

    let grouped = group_indian(integer);
    let sign = if negative { "-" } else { "" };
    if paise > 0 {
        format!("{sign}₹{grouped}.{paise:02}")
    } else {
        format!("{sign}₹{grouped}")
    }
}

/// Compact rupee form for stat cards: crores above 1,00,00,000 and lakhs
/// above 1,00,000, one decimal place each.
///
/// `format_inr_compact(25_000_000.0)` -> `"₹2.5Cr"`
pub fn format_inr_compact(amount: f64) -> String {
    let abs = amount.abs();
    let sign = if amount < 0.0 { "-" } else { "" };
    if abs >= 10_000_000.0 {
        format!("{sign}₹{:.1}Cr", abs / 10_000_000.0)
    } else if abs >= 100_000.0 {
        format!("{sign}₹{:.1}L", abs / 100_000.0)
    } else {
        format_inr(amount)
    }
}

/// Market share with one decimal, e.g. `"37.5%"`.
pub fn format_share(share: f64) -> String {
    format!("{share:.1}%")
}

fn group_indian(value: i64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<String> = Vec::new();
    let head_chars: Vec<char> = head.chars().rev().collect();
    for chunk in head_chars.chunks(2) {
        groups.push(chunk.iter().rev().collect());
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indian_grouping() {
        assert_eq!(format_inr(0.0), "₹0");
        assert_eq!(format_inr(999.0), "₹999");
        assert_eq!(format_inr(1_000.0), "₹1,000");
        assert_eq!(format_inr(100_000.0), "₹1,00,000");
        assert_eq!(format_inr(1_234_567.89), "₹12,34,567.89");
        assert_eq!(format_inr(-45_000.5), "-₹45,000.50");
    }

    #[test]
    fn test_compact_form() {
        assert_eq!(format_inr_compact(25_000_000.0), "₹2.5Cr");
        assert_eq!(format_inr_compact(350_000.0), "₹3.5L");
        assert_eq!(format_inr_compact(9_500.0), "₹9,500");
    }

    #[test]
    fn test_share() {
        assert_eq!(format_share(37.54), "37.5%");
        assert_eq!(format_share(0.0), "0.0%");
    }
}
