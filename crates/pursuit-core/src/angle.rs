use std::f64::consts::PI;

use crate::Vector2;

/// Convert degrees to radians.
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees.
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Wrap a bearing in degrees into `[0, 360)`.
pub fn normalize_bearing(deg: f64) -> f64 {
    let wrapped = deg.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360, and keeps -0
    if wrapped >= 360.0 || wrapped == 0.0 {
        0.0
    } else {
        wrapped
    }
}

/// Velocity of a body moving at `speed` along the navigation bearing `bearing_deg`.
///
/// Bearing 0° points north (+y) and grows clockwise towards east (+x).
pub fn velocity_components(speed: f64, bearing_deg: f64) -> Vector2 {
    let (sin, cos) = deg_to_rad(bearing_deg).sin_cos();
    Vector2::new(speed * sin, speed * cos)
}

/// Navigation bearing of a vector, in degrees in `[0, 360)`.
///
/// The vector must not be zero; the bearing of the origin is meaningless.
pub fn heading_from_vector(v: Vector2) -> f64 {
    normalize_bearing(rad_to_deg(v.x.atan2(v.y)))
}
