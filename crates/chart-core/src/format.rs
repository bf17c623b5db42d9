// File: crates/chart-core/src/format.rs
// Summary: Tick label formatting and the ASCII-safe text fallback.

/// `≥1000` → thousands-separated integer, `≥10` → one decimal, else two.
pub fn format_tick_value(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude >= 1000.0 {
        group_thousands(&format!("{value:.0}"))
    } else if magnitude >= 10.0 {
        format!("{value:.1}")
    } else {
        format!("{value:.2}")
    }
}

fn group_thousands(digits: &str) -> String {
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push_str(sign);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Replace every non-ASCII character with its `U+XXXX` code point.
/// Adjacent code points are separated by a space; ASCII text passes through.
pub fn ascii_fallback(text: &str) -> String {
    if text.is_ascii() {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len() * 2);
    let mut prev_escaped = false;
    for c in text.chars() {
        if c.is_ascii() {
            out.push(c);
            prev_escaped = false;
        } else {
            if prev_escaped {
                out.push(' ');
            }
            out.push_str(&format!("U+{:04X}", c as u32));
            prev_escaped = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_values_by_magnitude() {
        assert_eq!(format_tick_value(1234567.4), "1,234,567");
        assert_eq!(format_tick_value(1000.0), "1,000");
        assert_eq!(format_tick_value(-2500.0), "-2,500");
        assert_eq!(format_tick_value(999.94), "999.9");
        assert_eq!(format_tick_value(10.0), "10.0");
        assert_eq!(format_tick_value(9.999), "10.00");
        assert_eq!(format_tick_value(0.5), "0.50");
    }

    #[test]
    fn fallback_escapes_only_non_ascii() {
        assert_eq!(ascii_fallback("2025-09-01"), "2025-09-01");
        assert_eq!(ascii_fallback("钢盔"), "U+94A2 U+76D4");
        assert_eq!(ascii_fallback("钢盔 (x60)"), "U+94A2 U+76D4 (x60)");
        assert!(ascii_fallback("老式钢盔×60").is_ascii());
    }
}
