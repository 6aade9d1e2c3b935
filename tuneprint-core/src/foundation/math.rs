/// Truncate toward zero into an `i64`.
///
/// Non-finite inputs collapse to the saturating `as` semantics (`NaN -> 0`, `±inf -> min/max`),
/// which keeps the pipeline total for out-of-range attributes.
pub(crate) fn trunc_i64(v: f64) -> i64 {
    v.trunc() as i64
}

/// Floor into an `i64` with the same saturating semantics as [`trunc_i64`].
pub(crate) fn floor_i64(v: f64) -> i64 {
    v.floor() as i64
}

pub(crate) fn clamp_channel(v: i64) -> u8 {
    v.clamp(0, 255) as u8
}

/// `a * (1 - t) + b * t`, truncated toward zero. `t` is not clamped.
pub(crate) fn lerp_trunc(a: i64, b: i64, t: f64) -> i64 {
    trunc_i64(a as f64 * (1.0 - t) + b as f64 * t)
}

pub(crate) fn mul_div255(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
