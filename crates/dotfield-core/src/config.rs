use crate::color::Rgb;

/// Immutable per-instance settings for a dot field.
///
/// Supplied at construction and never mutated afterwards; the `Default` impl
/// encodes the canonical tuning for the site background.
#[derive(Clone, Debug)]
pub struct FieldConfig {
    /// Diameter of each rendered dot (CSS px).
    pub dot_size: f32,
    /// Spacing between adjacent dot edges (CSS px).
    pub gap: f32,
    /// Resting fill color.
    pub base_color: Rgb,
    /// Fill color directly under the pointer.
    pub active_color: Rgb,
    /// Radius within which color interpolates and motion kicks are checked.
    pub proximity: f32,
    /// Minimum pointer speed (px/s) for a motion kick.
    pub speed_trigger: f32,
    /// Radius affected by a click/tap shock.
    pub shock_radius: f32,
    /// Multiplier on shock displacement magnitude.
    pub shock_strength: f32,
    /// Clamp on the estimated pointer speed (px/s).
    pub max_speed: f32,
    /// Divisor turning displacement magnitude into tween duration.
    pub resistance: f32,
    /// Elastic return-to-rest duration (seconds).
    pub return_duration: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            dot_size: 6.0,
            gap: 12.0,
            base_color: Rgb::from_hex_or_black("#200e56"),
            active_color: Rgb::from_hex_or_black("#ff0fff"),
            proximity: 120.0,
            speed_trigger: 100.0,
            shock_radius: 250.0,
            shock_strength: 5.0,
            max_speed: 5000.0,
            resistance: 750.0,
            return_duration: 1.5,
        }
    }
}
