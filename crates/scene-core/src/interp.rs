//! Scalar interpolation helpers used by every timeline stage.

use glam::Vec3;

/// Linear interpolation between `start` and `end`.
///
/// `alpha` is not clamped; values outside \[0, 1\] extrapolate.
#[inline]
pub fn lerp(start: f32, end: f32, alpha: f32) -> f32 {
    (1.0 - alpha) * start + alpha * end
}

/// Component-wise [`lerp`] over vectors.
#[inline]
pub fn lerp_vec3(start: Vec3, end: Vec3, alpha: f32) -> Vec3 {
    Vec3::new(
        lerp(start.x, end.x, alpha),
        lerp(start.y, end.y, alpha),
        lerp(start.z, end.z, alpha),
    )
}

/// Map `progress` into the unit interval of `[range_start, range_end]`.
///
/// Precondition: `range_start != range_end`. A zero-width range divides by
/// zero and yields NaN or infinity; `Timeline::new` rejects such ranges.
#[inline]
pub fn scale_percent(range_start: f32, range_end: f32, progress: f32) -> f32 {
    (progress - range_start) / (range_end - range_start)
}
