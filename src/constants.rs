// Structural contract with the host page: one container holding one canvas.
// Validated once at mount; there are no fallback selector chains.
pub const CONTAINER_ID: &str = "dot-field";
pub const CANVAS_ID: &str = "dot-field-canvas";

// Minimum spacing between processed mousemove samples (wall-clock ms).
// Touch moves are deliberately not throttled.
pub const POINTER_THROTTLE_MS: f64 = 50.0;
