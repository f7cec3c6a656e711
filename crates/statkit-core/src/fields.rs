/// Get-or-default accessors over loosely-shaped transcript records.
/// Absent fields and fields of the wrong shape read as zero / absent.
use serde_json::Value;

pub fn u64_field(v: &Value, key: &str) -> u64 {
    v.get(key).and_then(|x| x.as_u64()).unwrap_or(0)
}

pub fn f64_field(v: &Value, key: &str) -> f64 {
    v.get(key).and_then(|x| x.as_f64()).unwrap_or(0.0)
}

pub fn str_field<'a>(v: &'a Value, key: &str) -> Option<&'a str> {
    v.get(key).and_then(|x| x.as_str())
}

/// Round a currency amount to 4 decimal places, half away from zero.
pub fn round4(amount: f64) -> f64 {
    (amount * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numeric_fields_default_to_zero() {
        let v = json!({"input": 10, "output": "many", "cost": {}});
        assert_eq!(u64_field(&v, "input"), 10);
        assert_eq!(u64_field(&v, "output"), 0);
        assert_eq!(u64_field(&v, "missing"), 0);
        assert_eq!(f64_field(&v, "output"), 0.0);
        assert_eq!(f64_field(&v, "missing"), 0.0);
    }

    #[test]
    fn str_field_ignores_wrong_shapes() {
        let v = json!({"timestamp": "2026-08-01T00:00:00Z", "count": 3});
        assert_eq!(str_field(&v, "timestamp"), Some("2026-08-01T00:00:00Z"));
        assert_eq!(str_field(&v, "count"), None);
        assert_eq!(str_field(&v, "missing"), None);
    }

    #[test]
    fn round4_rounds_half_up_at_the_fourth_decimal() {
        assert_eq!(round4(0.00005), 0.0001);
        assert_eq!(round4(0.00004), 0.0);
        assert_eq!(round4(0.123456), 0.1235);
        assert_eq!(round4(0.002), 0.002);
        assert_eq!(round4(2.5), 2.5);
        assert_eq!(round4(0.0), 0.0);
    }
}
