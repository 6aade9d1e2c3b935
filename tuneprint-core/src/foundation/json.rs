//! JSON number helpers.

/// Serialize an `f64` as a JSON integer when it has no fractional part.
///
/// Keeps sidecars written from integral inputs (`"unique_score": 85`) free of a trailing `.0`.
/// Deserialization into `f64` accepts both forms, so round-trips are lossless.
pub(crate) fn serialize_compact<S>(v: &f64, ser: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    // 2^53: beyond this not every integer is representable, so fall back to the float form.
    const EXACT_INT_LIMIT: f64 = 9_007_199_254_740_992.0;
    if v.is_finite() && v.fract() == 0.0 && v.abs() <= EXACT_INT_LIMIT {
        ser.serialize_i64(*v as i64)
    } else {
        ser.serialize_f64(*v)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/json.rs"]
mod tests;
