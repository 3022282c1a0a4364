//! Display formatting for payout reports
//!
//! Incentive amounts are whole-rupee figures rendered with Indian digit
//! grouping (last three digits, then groups of two): 368500 → ₹3,68,500.

/// Format an amount as Indian Rupees with no fraction digits.
pub fn format_inr(amount: f64) -> String {
    let rupees = amount.abs().round() as u64;
    let digits = rupees.to_string();

    let grouped = if digits.len() <= 3 {
        digits
    } else {
        let (head, tail) = digits.split_at(digits.len() - 3);
        let mut groups: Vec<&str> = Vec::new();
        let bytes = head.as_bytes();
        let mut start = bytes.len() % 2;
        if start == 1 {
            groups.push(&head[..1]);
        }
        while start < bytes.len() {
            groups.push(&head[start..start + 2]);
            start += 2;
        }
        format!("{},{}", groups.join(","), tail)
    };

    if amount < -0.5 {
        format!("-₹{grouped}")
    } else {
        format!("₹{grouped}")
    }
}

/// Format a ratio or percentage with two decimal places.
pub fn format_decimal(value: f64) -> String {
    format!("{value:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inr_grouping() {
        assert_eq!(format_inr(0.0), "₹0");
        assert_eq!(format_inr(500.0), "₹500");
        assert_eq!(format_inr(5_000.0), "₹5,000");
        assert_eq!(format_inr(34_200.0), "₹34,200");
        assert_eq!(format_inr(368_500.0), "₹3,68,500");
        assert_eq!(format_inr(3_000_000.0), "₹30,00,000");
        assert_eq!(format_inr(100_000_000.0), "₹10,00,00,000");
    }

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_decimal(1.02), "1.02");
        assert_eq!(format_decimal(88.09), "88.09");
        assert_eq!(format_decimal(0.8), "0.80");
    }
}
