/// Displacement tuning constants.
///
/// These express intended behavior (duration clamps, velocity weighting) and
/// keep magic numbers out of the trigger logic.
// Fraction of pointer velocity mixed into a motion kick's push direction
pub const KICK_VELOCITY_BIAS: f32 = 0.005;

// Motion-kick duration bounds (seconds); raw duration is |target| / resistance
pub const KICK_DURATION_MIN: f32 = 0.18;
pub const KICK_DURATION_MAX: f32 = 0.8;

// Shock (click/tap) duration bounds (seconds)
pub const SHOCK_DURATION_MIN: f32 = 0.2;
pub const SHOCK_DURATION_MAX: f32 = 0.9;

// Assumed frame delta for the very first pointer sample (milliseconds),
// so a stale origin never produces a huge initial velocity spike
pub const FIRST_SAMPLE_DT_MS: f32 = 16.0;
