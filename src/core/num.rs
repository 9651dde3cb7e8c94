// src/core/num.rs
// Display-number coercion. The site shows counters like "1,234" and
// "96%"; sums and averages need them back as plain numbers.

/// Undo display formatting: drop every character that is not a digit or
/// a decimal point, then parse the longest leading numeric run. No
/// digits → NaN. Never fails; NaN is the sink for every unreadable
/// field and propagates through the aggregates untouched.
pub fn unformat(text: &str) -> f64 {
    let mut cleaned = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_ascii_digit() || ch == '.' {
            cleaned.push(ch);
        }
    }

    // Longest leading run: digits with at most one dot.
    let mut end = 0;
    let mut seen_dot = false;
    for (i, ch) in cleaned.char_indices() {
        if ch == '.' {
            if seen_dot {
                break;
            }
            seen_dot = true;
        }
        end = i + 1;
    }

    cleaned[..end].parse::<f64>().unwrap_or(f64::NAN)
}

/// Render with comma thousands separators and a fixed number of decimal
/// places ("1,234" / "6.00"). Non-finite values print as-is ("NaN").
pub fn format_grouped(val: f64, decimals: usize) -> String {
    if !val.is_finite() {
        return val.to_string();
    }

    let s = format!("{:.*}", decimals, val.abs());
    let (int_part, frac) = match s.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (s.as_str(), None),
    };

    let digits = int_part.len();
    let mut out = String::with_capacity(s.len() + digits / 3 + 1);
    if val.is_sign_negative() && val != 0.0 {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(f) = frac {
        out.push('.');
        out.push_str(f);
    }
    out
}
