//! Animated cursor moves.
//!
//! A glide splits the move from the current position to a target into
//! frames at a fixed rate, spaced along an easing curve. The last frame is
//! always exactly the target.

use std::time::Duration;

use nudge_platform_core::Point;

/// Frame rate of a glide.
pub const GLIDE_FPS: u32 = 120;

/// Upper bound on frames in one glide; longer glides get a slower frame rate.
pub const MAX_GLIDE_FRAMES: u32 = GLIDE_FPS * 60;

/// Interpolation curve for glides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Curve {
    /// Constant velocity.
    Linear,
    /// Cubic ease-in-out (smooth acceleration and deceleration).
    #[default]
    EaseInOut,
}

impl Curve {
    /// Map progress `t` in `[0, 1]` onto the curve.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Curve::Linear => t,
            Curve::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// A planned glide: the frames to visit and the pause between them.
#[derive(Debug, Clone, PartialEq)]
pub struct Glide {
    pub frames: Vec<Point>,
    pub frame_delay: Duration,
}

impl Glide {
    /// Plan a glide from `from` to `to` lasting `duration`.
    ///
    /// Degenerates to a single jump when the duration covers at most one
    /// frame or the cursor is already on target.
    pub fn plan(from: Point, to: Point, duration: Duration, curve: Curve) -> Self {
        let frames = (duration.as_secs_f64() * f64::from(GLIDE_FPS))
            .ceil()
            .min(f64::from(MAX_GLIDE_FRAMES)) as u32;
        if frames <= 1 || from == to {
            return Self::jump(to);
        }

        let dx = f64::from(to.x - from.x);
        let dy = f64::from(to.y - from.y);
        let mut points: Vec<Point> = (1..=frames)
            .map(|i| {
                let progress = curve.apply(f64::from(i) / f64::from(frames));
                from.offset(
                    (dx * progress).round() as i32,
                    (dy * progress).round() as i32,
                )
            })
            .collect();

        if let Some(last) = points.last_mut() {
            *last = to;
        }

        Self {
            frames: points,
            frame_delay: duration / frames,
        }
    }

    /// Move straight to `to` without animation.
    pub fn jump(to: Point) -> Self {
        Self {
            frames: vec![to],
            frame_delay: Duration::ZERO,
        }
    }
}
