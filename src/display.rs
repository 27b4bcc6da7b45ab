//! Formatting helpers for a consuming UI.

use crate::field::M2_PER_HA;

const ACRES_PER_HA: f64 = 2.47105;

/// Round to the nearest whole currency unit and insert thousands separators.
/// E.g. `12345.6` → `"12,346"`.
pub fn format_money(amount: f64) -> String {
    let whole = amount.round() as i64;
    let digits = whole.abs().to_string();
    let mut out = String::new();
    let len = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if whole < 0 {
        format!("-{out}")
    } else {
        out
    }
}

/// Coordinates to 5 decimal places: "62.02720, 129.73210".
pub fn format_lat_lng(lat: f64, lng: f64) -> String {
    format!("{lat:.5}, {lng:.5}")
}

/// Area in hectares with acres in parentheses. Acres get two decimals below
/// one hectare, one decimal otherwise.
pub fn format_area(area_m2: f64) -> String {
    let ha = area_m2 / M2_PER_HA;
    let acres = ha * ACRES_PER_HA;
    if ha < 1.0 {
        format!("{ha:.2} ha ({acres:.2} ac)")
    } else {
        format!("{ha:.2} ha ({acres:.1} ac)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_separators() {
        assert_eq!(format_money(0.0), "0");
        assert_eq!(format_money(999.4), "999");
        assert_eq!(format_money(1000.0), "1,000");
        assert_eq!(format_money(1234567.0), "1,234,567");
        assert_eq!(format_money(249999.6), "250,000");
    }

    #[test]
    fn test_lat_lng_precision() {
        assert_eq!(format_lat_lng(62.0272, 129.7321), "62.02720, 129.73210");
        assert_eq!(format_lat_lng(-1.5, 0.123456), "-1.50000, 0.12346");
    }

    #[test]
    fn test_area_formats() {
        assert_eq!(format_area(20_000.0), "2.00 ha (4.9 ac)");
        assert_eq!(format_area(5_000.0), "0.50 ha (1.24 ac)");
    }
}
