use crate::constants::FIRST_SAMPLE_DT_MS;
use glam::Vec2;

/// Last known pointer sample, mutated in place on every move event.
///
/// `pos` is canvas-relative (the space the proximity test runs in); velocity
/// is estimated from consecutive client-space samples and clamped so `speed`
/// never exceeds the configured maximum.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerState {
    pub pos: Vec2,
    pub vel: Vec2,
    pub speed: f32,
    last_sample_ms: Option<f64>,
    last_client: Vec2,
}

impl PointerState {
    /// Fold a new sample into the state. `now_ms` is wall-clock milliseconds
    /// from any monotonic source; only deltas between samples are used.
    pub fn sample(&mut self, canvas_pos: Vec2, client_pos: Vec2, now_ms: f64, max_speed: f32) {
        let dt_ms = match self.last_sample_ms {
            Some(last) => (now_ms - last) as f32,
            None => FIRST_SAMPLE_DT_MS,
        };
        // Duplicate timestamps must not blow up the velocity estimate
        let dt_ms = dt_ms.max(1.0e-3);

        let mut vel = (client_pos - self.last_client) / dt_ms * 1000.0;
        let mut speed = vel.length();
        if speed > max_speed {
            vel *= max_speed / speed;
            speed = max_speed;
        }

        self.last_sample_ms = Some(now_ms);
        self.last_client = client_pos;
        self.pos = canvas_pos;
        self.vel = vel;
        self.speed = speed;
    }
}
