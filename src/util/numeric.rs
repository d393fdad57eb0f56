//! Precision and step selection for numeric inputs

/// Decimal places worth showing for a value of this magnitude
pub fn decimal_points_for_value(value: f64) -> usize {
    if value <= 0.001 {
        5
    } else if value <= 0.01 {
        4
    } else if value <= 1.0 {
        3
    } else if value <= 100.0 {
        2
    } else if value <= 1000.0 {
        1
    } else {
        0
    }
}

pub fn decimal_points_for_range(min: f64, max: f64) -> usize {
    decimal_points_for_value(max - min)
}

/// Spin-box step for a range of values
pub fn increment_for_range(min: f64, max: f64) -> f64 {
    let range = max - min;

    if range <= 0.001 {
        0.0001
    } else if range <= 0.01 {
        0.001
    } else if range <= 1.0 {
        0.01
    } else if range <= 100.0 {
        0.1
    } else if range <= 1000.0 {
        10.0
    } else if range <= 10000.0 {
        100.0
    } else if range <= 100000.0 {
        1000.0
    } else {
        100000.0
    }
}

/// True when `text` parses as a number with no fractional part that fits
/// in 32 bits
pub fn is_int(text: &str) -> bool {
    match text.trim().parse::<f64>() {
        Ok(x) => x.is_finite() && x.fract() == 0.0 && x >= i32::MIN as f64 && x <= i32::MAX as f64,
        Err(_) => false,
    }
}

pub fn is_numeric(text: &str) -> bool {
    text.trim().parse::<f64>().is_ok_and(f64::is_finite)
}
