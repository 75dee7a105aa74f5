//! The dot field engine: owns the point set, pointer state and displacement
//! tweens, and implements the trigger rules for motion kicks and shocks.

use crate::color::Rgb;
use crate::config::FieldConfig;
use crate::constants::{
    KICK_DURATION_MAX, KICK_DURATION_MIN, KICK_VELOCITY_BIAS, SHOCK_DURATION_MAX,
    SHOCK_DURATION_MIN,
};
use crate::grid::{build_grid, GridLayout, GridPoint};
use crate::pointer::PointerState;
use crate::tween::Tweens;
use glam::Vec2;
use smallvec::SmallVec;

/// Indices of dots displaced by a single input event.
pub type Displaced = SmallVec<[usize; 8]>;

pub struct DotField {
    config: FieldConfig,
    points: Vec<GridPoint>,
    layout: GridLayout,
    pointer: PointerState,
    /// The animation facility. `None` degrades gracefully: pointer state and
    /// proximity coloring keep working, displacement triggers become no-ops.
    tweens: Option<Tweens>,
    size: Vec2,
}

impl DotField {
    pub fn new(config: FieldConfig) -> Self {
        Self {
            config,
            points: Vec::new(),
            layout: GridLayout::default(),
            pointer: PointerState::default(),
            tweens: Some(Tweens::default()),
            size: Vec2::ZERO,
        }
    }

    /// Build a field with displacement disabled.
    pub fn without_tweens(config: FieldConfig) -> Self {
        Self {
            tweens: None,
            ..Self::new(config)
        }
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn points(&self) -> &[GridPoint] {
        &self.points
    }

    pub fn layout(&self) -> GridLayout {
        self.layout
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    /// Container size from the last `resize`, in CSS px.
    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Rebuild the layout for a new container size. The previous point set is
    /// discarded wholesale, so any in-flight tweens are dropped with it.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.size = Vec2::new(width, height);
        let (points, layout) = build_grid(width, height, self.config.dot_size, self.config.gap);
        if let Some(tweens) = &mut self.tweens {
            tweens.clear();
        }
        log::debug!(
            "[grid] rebuilt {}x{} -> {} cols x {} rows ({} dots)",
            width,
            height,
            layout.cols,
            layout.rows,
            points.len()
        );
        self.points = points;
        self.layout = layout;
    }

    /// Advance in-flight displacement tweens by `dt_sec`, writing dot offsets
    /// and clearing `animating` as return legs settle.
    pub fn tick(&mut self, dt_sec: f32) {
        let Some(tweens) = &mut self.tweens else {
            return;
        };
        let points = &mut self.points;
        tweens.advance(dt_sec, |index, offset, finished| {
            if let Some(point) = points.get_mut(index) {
                point.offset = offset;
                if finished {
                    point.animating = false;
                }
            }
        });
    }

    /// Fold in a pointer sample and kick nearby dots when the pointer is
    /// moving fast enough. Returns the kicked indices.
    pub fn on_pointer_move(&mut self, canvas_pos: Vec2, client_pos: Vec2, now_ms: f64) -> Displaced {
        self.pointer
            .sample(canvas_pos, client_pos, now_ms, self.config.max_speed);

        let mut kicked = Displaced::new();
        let Some(tweens) = &mut self.tweens else {
            return kicked;
        };
        if self.pointer.speed <= self.config.speed_trigger {
            return kicked;
        }

        let pointer = self.pointer.pos;
        let bias = self.pointer.vel * KICK_VELOCITY_BIAS;
        for (index, point) in self.points.iter_mut().enumerate() {
            if point.animating {
                continue;
            }
            if point.rest.distance(pointer) >= self.config.proximity {
                continue;
            }
            point.animating = true;
            tweens.cancel(index);

            // Push away from the pointer, biased by velocity direction
            let target = (point.rest - pointer) + bias;
            let duration = (target.length() / self.config.resistance)
                .clamp(KICK_DURATION_MIN, KICK_DURATION_MAX);
            tweens.kick(index, point.offset, target, duration, self.config.return_duration);
            kicked.push(index);
        }
        kicked
    }

    /// Click/tap shock: radially displace every idle dot within
    /// `shock_radius`, scaled by linear falloff from the tap point.
    pub fn on_activate(&mut self, pos: Vec2) -> Displaced {
        let mut shocked = Displaced::new();
        let Some(tweens) = &mut self.tweens else {
            return shocked;
        };

        for (index, point) in self.points.iter_mut().enumerate() {
            if point.animating {
                continue;
            }
            let dist = point.rest.distance(pos);
            if dist >= self.config.shock_radius {
                continue;
            }
            point.animating = true;
            tweens.cancel(index);

            let falloff = (1.0 - dist / self.config.shock_radius).max(0.0);
            let target = (point.rest - pos) * self.config.shock_strength * falloff;
            let duration = (target.length() / self.config.resistance)
                .clamp(SHOCK_DURATION_MIN, SHOCK_DURATION_MAX);
            tweens.kick(index, point.offset, target, duration, self.config.return_duration);
            shocked.push(index);
        }
        shocked
    }

    /// Proximity coloring against the dot's rest position: pure base color at
    /// (and beyond) the proximity rim, pure active color at the pointer.
    pub fn dot_color(&self, point: &GridPoint) -> Rgb {
        let proximity = self.config.proximity;
        let dist_sq = point.rest.distance_squared(self.pointer.pos);
        if dist_sq <= proximity * proximity {
            let t = 1.0 - dist_sq.sqrt() / proximity;
            self.config.base_color.lerp(self.config.active_color, t)
        } else {
            self.config.base_color
        }
    }
}
