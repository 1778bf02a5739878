//! Display formatting for table cells

/// Fees with a rupee sign and comma thousands separators, e.g. `₹ 1,209,550`
pub fn format_fee(fees: u64) -> String {
    format!("₹ {}", group_thousands(fees))
}

/// Rating out of ten. Missing ratings show as `-/10`.
pub fn format_rating(rating: Option<f64>) -> String {
    match rating {
        Some(r) => format!("{}/10", r),
        None => "-/10".to_string(),
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_fee() {
        assert_eq!(format_fee(0), "₹ 0");
        assert_eq!(format_fee(999), "₹ 999");
        assert_eq!(format_fee(1000), "₹ 1,000");
        assert_eq!(format_fee(209550), "₹ 209,550");
        assert_eq!(format_fee(1234567), "₹ 1,234,567");
    }

    #[test]
    fn test_format_rating() {
        assert_eq!(format_rating(Some(8.5)), "8.5/10");
        assert_eq!(format_rating(Some(9.0)), "9/10");
        assert_eq!(format_rating(None), "-/10");
    }
}
