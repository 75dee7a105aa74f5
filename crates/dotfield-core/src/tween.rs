//! Per-dot displacement tweens.
//!
//! Each displaced dot walks an explicit two-phase state machine:
//! `Displacing` (cubic ease-out toward the kick target) then `Returning`
//! (elastic ease-out back to rest). "Idle" is represented by absence from
//! the registry, so cancellation is a single map removal and a trigger can
//! always cancel-then-restart without two tweens fighting over one dot.

use fnv::FnvHashMap;
use glam::Vec2;

/// Cubic ease-out: fast start, gentle settle.
#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

// Elastic period; amplitude is fixed at 1
const ELASTIC_PERIOD: f32 = 0.75;

/// Elastic ease-out with amplitude 1 and period 0.75 — overshoots past the
/// target and rings down, giving the return leg its springiness.
#[inline]
pub fn ease_out_elastic(t: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    let p = ELASTIC_PERIOD;
    (2.0_f32).powf(-10.0 * t) * ((t - p / 4.0) * std::f32::consts::TAU / p).sin() + 1.0
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TweenPhase {
    Displacing,
    Returning,
}

#[derive(Clone, Copy, Debug)]
struct PointTween {
    phase: TweenPhase,
    from: Vec2,
    target: Vec2,
    elapsed: f32,
    duration: f32,
    return_duration: f32,
}

/// Registry of in-flight per-dot tweens, keyed by dot index.
#[derive(Default)]
pub struct Tweens {
    active: FnvHashMap<usize, PointTween>,
}

impl Tweens {
    /// Start a displacement for `index`, replacing any in-flight tween.
    pub fn kick(&mut self, index: usize, from: Vec2, target: Vec2, duration: f32, return_duration: f32) {
        self.active.insert(
            index,
            PointTween {
                phase: TweenPhase::Displacing,
                from,
                target,
                elapsed: 0.0,
                duration: duration.max(f32::EPSILON),
                return_duration,
            },
        );
    }

    /// Drop the in-flight tween for `index`, if any.
    pub fn cancel(&mut self, index: usize) {
        self.active.remove(&index);
    }

    pub fn clear(&mut self) {
        self.active.clear();
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Step every tween by `dt_sec`, invoking `apply(index, offset, finished)`
    /// for each. `finished` is true exactly once per tween, when the return
    /// leg settles at zero offset; the tween is removed at that point.
    pub fn advance(&mut self, dt_sec: f32, mut apply: impl FnMut(usize, Vec2, bool)) {
        self.active.retain(|&index, tw| {
            tw.elapsed += dt_sec;
            let t = (tw.elapsed / tw.duration).min(1.0);
            match tw.phase {
                TweenPhase::Displacing => {
                    let offset = tw.from + (tw.target - tw.from) * ease_out_cubic(t);
                    if t >= 1.0 {
                        tw.phase = TweenPhase::Returning;
                        tw.from = tw.target;
                        tw.target = Vec2::ZERO;
                        tw.elapsed = 0.0;
                        tw.duration = tw.return_duration.max(f32::EPSILON);
                    }
                    apply(index, offset, false);
                    true
                }
                TweenPhase::Returning => {
                    let done = t >= 1.0;
                    let offset = if done {
                        Vec2::ZERO
                    } else {
                        tw.from + (tw.target - tw.from) * ease_out_elastic(t)
                    };
                    apply(index, offset, done);
                    !done
                }
            }
        });
    }
}
