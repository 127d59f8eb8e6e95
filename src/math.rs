//! Math utility functions.

use euclid::default::Vector3D;
use num_traits::Float;

use crate::color::Component;

/// The three RGB channels as a vector, so they can be blended together.
pub type Channels = Vector3D<Component>;

/// Linearly interpolate from `a` to `b`. `t` is not limited to `0..=1`.
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

/// Blend two sets of channels: `from * (1 - weight) + to * weight`.
pub fn mix(from: Channels, to: Channels, weight: Component) -> Channels {
    from.lerp(to, weight)
}

pub fn almost_zero<T: Float>(value: T) -> bool {
    value.abs() < T::epsilon()
}

/// Bring a hue in degrees into the `[0, 360)` range.
pub fn normalize_hue<T: Float>(hue: T) -> T {
    let full = T::from(360.0).unwrap_or_else(T::zero);
    let hue = hue % full;
    if hue < T::zero() {
        hue + full
    } else {
        hue
    }
}

/// Round a channel value and clamp it into the `u8` range.
pub fn to_channel(value: Component) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}
