//! Animated scroll motion for the pager.
//!
//! Eases the vertical scroll offset toward its target over a configurable
//! duration and easing curve. Rapid inputs within one frame are batched
//! into a single retargeted animation. This motion lives entirely in the
//! host; the progress tracker downstream stays unthrottled and simply sees
//! the offsets the animation produces each frame.

use std::time::{Duration, Instant};

use scrollmark_core::{EasingType, ScrollConfig};

/// Easing curve evaluation.
pub trait EasingTypeExt {
    /// Map progress `t` in `[0, 1]` through the curve, staying in `[0, 1]`.
    fn apply(&self, t: f64) -> f64;
}

impl EasingTypeExt for EasingType {
    #[inline]
    fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingType::None => {
                if t < 1.0 {
                    0.0
                } else {
                    1.0
                }
            }
            EasingType::Linear => t,
            EasingType::Cubic => cubic_ease_out(t),
            EasingType::Quintic => quintic_ease_out(t),
            EasingType::EaseOut => exponential_ease_out(t),
        }
    }
}

/// Cubic ease-out: f(t) = 1 - (1-t)³
#[inline]
fn cubic_ease_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// Quintic ease-out: f(t) = 1 - (1-t)⁵
#[inline]
fn quintic_ease_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv * inv * inv
}

/// Exponential ease-out: f(t) = 1 - 2^(-10t)
#[inline]
fn exponential_ease_out(t: f64) -> f64 {
    if t >= 1.0 {
        1.0
    } else {
        1.0 - 2.0_f64.powf(-10.0 * t)
    }
}

/// Utility methods over the scroll configuration.
pub trait ScrollConfigExt {
    fn animation_duration(&self) -> Duration;

    /// Frame interval while an animation is running.
    fn animation_tick_duration(&self) -> Duration;

    /// Whether animation is effectively enabled.
    fn is_smooth(&self) -> bool;
}

impl ScrollConfigExt for ScrollConfig {
    #[inline]
    fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    #[inline]
    fn animation_tick_duration(&self) -> Duration {
        if self.animation_fps == 0 {
            Duration::from_millis(16) // ~60fps fallback
        } else {
            Duration::from_millis(1000 / u64::from(self.animation_fps))
        }
    }

    #[inline]
    fn is_smooth(&self) -> bool {
        self.smooth_enabled && self.animation_duration_ms > 0
    }
}

/// One in-flight animation between two offsets.
#[derive(Debug, Clone)]
struct Motion {
    start: Instant,
    from: u16,
    to: u16,
    duration: Duration,
    easing: EasingType,
}

impl Motion {
    fn ratio(&self) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.start.elapsed().as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    fn is_complete(&self) -> bool {
        self.start.elapsed() >= self.duration
    }
}

/// Controller easing one scroll offset toward its target.
///
/// Call a `scroll_by`/`jump_to` mutation on input, then `update()` every
/// frame to advance the interpolation and read the current offset.
#[derive(Debug, Clone)]
pub struct ScrollMotion {
    config: ScrollConfig,
    motion: Option<Motion>,
    current: u16,
    /// Deltas accumulated since the last frame, retargeted in `update`
    pending: i32,
}

impl ScrollMotion {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            config,
            motion: None,
            current: 0,
            pending: 0,
        }
    }

    /// Current interpolated offset.
    #[inline]
    pub fn current(&self) -> u16 {
        self.current
    }

    /// Final offset once the active animation (if any) completes.
    pub fn target(&self) -> u16 {
        self.motion.as_ref().map(|m| m.to).unwrap_or(self.current)
    }

    /// Whether there is pending work; the host should tick at animation
    /// rate while this holds.
    #[inline]
    pub fn is_moving(&self) -> bool {
        self.motion.is_some() || self.pending != 0
    }

    /// Lines moved by one scroll step.
    pub fn step_lines(&self) -> i32 {
        if self.config.is_smooth() {
            1 // fine-grained steps chain smoothly
        } else {
            i32::from(self.config.scroll_lines)
        }
    }

    /// Move immediately to `offset` (clamped), cancelling any animation.
    pub fn jump_to(&mut self, offset: u16, max: u16) {
        self.motion = None;
        self.pending = 0;
        self.current = offset.min(max);
    }

    /// Scroll by a delta (positive = down). Batched while animating.
    pub fn scroll_by(&mut self, delta: i32, max: u16) {
        if !self.config.is_smooth() {
            self.current = clamp_offset(i32::from(self.current) + delta, max);
            self.motion = None;
            return;
        }
        self.pending += delta;
    }

    /// Advance the animation and return the current offset.
    pub fn update(&mut self, max: u16) -> u16 {
        if self.pending != 0 {
            let target = clamp_offset(i32::from(self.target()) + self.pending, max);
            self.pending = 0;
            if target != self.current {
                self.motion = Some(Motion {
                    start: Instant::now(),
                    from: self.current,
                    to: target,
                    duration: self.config.animation_duration(),
                    easing: self.config.easing,
                });
            }
        }

        if let Some(ref motion) = self.motion {
            if motion.is_complete() {
                self.current = motion.to.min(max);
                self.motion = None;
            } else {
                let eased = motion.easing.apply(motion.ratio());
                self.current = lerp_u16(motion.from, motion.to, eased).min(max);
            }
        }

        self.current
    }
}

fn clamp_offset(offset: i32, max: u16) -> u16 {
    offset.clamp(0, i32::from(max)) as u16
}

/// Linear interpolation between two offsets.
#[inline]
fn lerp_u16(from: u16, to: u16, t: f64) -> u16 {
    (f64::from(from) + (f64::from(to) - f64::from(from)) * t).round() as u16
}
