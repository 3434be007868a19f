/// Format an amount as Indonesian Rupiah with no fractional digits.
///
/// `1500000.0` becomes `Rp1.500.000`. Rounding is half away from zero and
/// negative amounts put the sign before the symbol (`-Rp2.500`).
pub fn format_rupiah(amount: f64) -> String {
    if amount.is_nan() {
        return "RpNaN".to_string();
    }
    if amount.is_infinite() {
        let sign = if amount < 0.0 { "-" } else { "" };
        return format!("{sign}Rp\u{221e}");
    }

    let rounded = amount.round();
    let grouped = group_thousands(&format!("{:.0}", rounded.abs()));
    // -0.0 compares equal to 0.0, so amounts rounding to zero stay unsigned.
    if rounded < 0.0 {
        format!("-Rp{grouped}")
    } else {
        format!("Rp{grouped}")
    }
}

/// Quantity as shown next to an item name: `2`, `1.5`.
pub fn format_quantity(quantity: f64) -> String {
    format!("{quantity}")
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}
