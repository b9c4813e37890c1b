//! The decorative movement pattern.
//!
//! A traversal walks four phases anchored at the screen center:
//!
//! 1. **Shaft:** a vertical line going down from the anchor, one pixel per step
//! 2. **Head:** a half circle at the bottom of the shaft, 0°..=180° in 5° steps
//! 3. **Left ball:** a full circle up and left of the anchor, 0°..=360° in 10° steps
//! 4. **Right ball:** the mirror image on the right
//!
//! Circle offsets are truncated toward zero, not rounded, so the path is
//! pixel-identical across runs and platforms.

use std::f64::consts::PI;
use std::iter::FusedIterator;

use nudge_platform_core::Point;

const HEAD_SWEEP_DEG: u32 = 180;
const HEAD_STEP_DEG: u32 = 5;
const BALL_SWEEP_DEG: u32 = 360;
const BALL_STEP_DEG: u32 = 10;

/// Waypoints in the head phase (both sweep ends included).
pub const HEAD_POINTS: usize = (HEAD_SWEEP_DEG / HEAD_STEP_DEG + 1) as usize;

/// Waypoints in each ball phase (both sweep ends included).
pub const BALL_POINTS: usize = (BALL_SWEEP_DEG / BALL_STEP_DEG + 1) as usize;

/// Shape dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternGeometry {
    /// Length of the vertical shaft.
    pub shaft_length: u32,
    /// Radius of the half-circle head.
    pub head_radius: i32,
    /// Radius of each ball.
    pub ball_radius: i32,
    /// Horizontal distance from the anchor to each ball center.
    pub ball_offset: i32,
    /// Vertical distance the ball centers sit above the anchor.
    pub ball_rise: i32,
}

impl Default for PatternGeometry {
    fn default() -> Self {
        Self {
            shaft_length: 200,
            head_radius: 50,
            ball_radius: 30,
            ball_offset: 40,
            ball_rise: 20,
        }
    }
}

/// Section of the path a waypoint belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Shaft,
    Head,
    LeftBall,
    RightBall,
}

impl Phase {
    /// Phases in traversal order.
    pub const ALL: [Phase; 4] = [Phase::Shaft, Phase::Head, Phase::LeftBall, Phase::RightBall];

    fn next(self) -> Option<Phase> {
        match self {
            Phase::Shaft => Some(Phase::Head),
            Phase::Head => Some(Phase::LeftBall),
            Phase::LeftBall => Some(Phase::RightBall),
            Phase::RightBall => None,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Shaft => "shaft",
            Phase::Head => "head",
            Phase::LeftBall => "left ball",
            Phase::RightBall => "right ball",
        };
        f.write_str(name)
    }
}

/// One point of the path, tagged with its phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Waypoint {
    pub phase: Phase,
    pub point: Point,
}

/// The pattern anchored at a fixed point.
///
/// `Pattern` is `Copy` and holds no iteration state; every call to
/// [`Pattern::waypoints`] starts a fresh walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    anchor: Point,
    geometry: PatternGeometry,
}

impl Pattern {
    /// Pattern with the default geometry.
    pub fn new(anchor: Point) -> Self {
        Self::with_geometry(anchor, PatternGeometry::default())
    }

    pub fn with_geometry(anchor: Point, geometry: PatternGeometry) -> Self {
        Self { anchor, geometry }
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn geometry(&self) -> &PatternGeometry {
        &self.geometry
    }

    /// Center of the head semicircle (bottom of the shaft).
    pub fn head_center(&self) -> Point {
        self.anchor.offset(0, self.geometry.shaft_length as i32)
    }

    pub fn left_ball_center(&self) -> Point {
        self.anchor
            .offset(-self.geometry.ball_offset, -self.geometry.ball_rise)
    }

    pub fn right_ball_center(&self) -> Point {
        self.anchor
            .offset(self.geometry.ball_offset, -self.geometry.ball_rise)
    }

    /// Number of waypoints in one traversal.
    pub fn len(&self) -> usize {
        Phase::ALL.iter().map(|p| self.phase_len(*p)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of waypoints in one phase.
    pub fn phase_len(&self, phase: Phase) -> usize {
        match phase {
            Phase::Shaft => self.geometry.shaft_length as usize,
            Phase::Head => HEAD_POINTS,
            Phase::LeftBall | Phase::RightBall => BALL_POINTS,
        }
    }

    /// Lazily walk the whole path.
    pub fn waypoints(&self) -> Waypoints {
        Waypoints {
            pattern: *self,
            phase: Some(Phase::Shaft),
            step: 0,
        }
    }

    /// The path as bare coordinates.
    pub fn points(&self) -> impl Iterator<Item = Point> {
        self.waypoints().map(|w| w.point)
    }

    fn point_at(&self, phase: Phase, step: usize) -> Point {
        match phase {
            Phase::Shaft => self.anchor.offset(0, step as i32),
            Phase::Head => circle_point(
                self.head_center(),
                self.geometry.head_radius,
                step as u32 * HEAD_STEP_DEG,
            ),
            Phase::LeftBall => circle_point(
                self.left_ball_center(),
                self.geometry.ball_radius,
                step as u32 * BALL_STEP_DEG,
            ),
            Phase::RightBall => circle_point(
                self.right_ball_center(),
                self.geometry.ball_radius,
                step as u32 * BALL_STEP_DEG,
            ),
        }
    }
}

/// Point on a circle at `degrees`, offsets truncated toward zero.
fn circle_point(center: Point, radius: i32, degrees: u32) -> Point {
    let radians = f64::from(degrees) * PI / 180.0;
    let r = f64::from(radius);
    center.offset((r * radians.cos()) as i32, (r * radians.sin()) as i32)
}

/// Iterator over the waypoints of one traversal.
#[derive(Debug, Clone)]
pub struct Waypoints {
    pattern: Pattern,
    phase: Option<Phase>,
    step: usize,
}

impl Waypoints {
    fn remaining(&self) -> usize {
        let Some(current) = self.phase else {
            return 0;
        };
        let mut total = self.pattern.phase_len(current).saturating_sub(self.step);
        let mut next = current.next();
        while let Some(phase) = next {
            total += self.pattern.phase_len(phase);
            next = phase.next();
        }
        total
    }
}

impl Iterator for Waypoints {
    type Item = Waypoint;

    fn next(&mut self) -> Option<Waypoint> {
        loop {
            let phase = self.phase?;
            if self.step < self.pattern.phase_len(phase) {
                let point = self.pattern.point_at(phase, self.step);
                self.step += 1;
                return Some(Waypoint { phase, point });
            }
            self.phase = phase.next();
            self.step = 0;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for Waypoints {}

impl FusedIterator for Waypoints {}

#[cfg(test)]
mod tests {
    use super::*;

    fn phase_points(pattern: &Pattern, phase: Phase) -> Vec<Point> {
        pattern
            .waypoints()
            .filter(|w| w.phase == phase)
            .map(|w| w.point)
            .collect()
    }

    #[test]
    fn default_pattern_has_311_waypoints() {
        let pattern = Pattern::new(Point::new(960, 540));
        assert_eq!(pattern.len(), 200 + 37 + 37 + 37);
        assert_eq!(pattern.waypoints().count(), 311);
        assert_eq!(pattern.waypoints().len(), 311);
    }

    #[test]
    fn phases_come_in_order() {
        let pattern = Pattern::new(Point::new(100, 100));
        let mut seen = Vec::new();
        for w in pattern.waypoints() {
            if seen.last() != Some(&w.phase) {
                seen.push(w.phase);
            }
        }
        assert_eq!(seen, Phase::ALL.to_vec());
    }

    #[test]
    fn shaft_runs_straight_down_from_anchor() {
        let pattern = Pattern::new(Point::new(960, 540));
        let shaft = phase_points(&pattern, Phase::Shaft);
        assert_eq!(shaft.len(), 200);
        for (i, p) in shaft.iter().enumerate() {
            assert_eq!(*p, Point::new(960, 540 + i as i32));
        }
        assert_eq!(shaft.first(), Some(&Point::new(960, 540)));
        assert_eq!(shaft.last(), Some(&Point::new(960, 739)));
    }

    #[test]
    fn head_key_angles() {
        let pattern = Pattern::new(Point::new(960, 540));
        let head = phase_points(&pattern, Phase::Head);
        assert_eq!(head.len(), 37);
        // 0°, 90°, 180°
        assert_eq!(head[0], Point::new(1010, 740));
        assert_eq!(head[18], Point::new(960, 790));
        assert_eq!(head[36], Point::new(910, 740));
    }

    #[test]
    fn balls_close_on_themselves() {
        let pattern = Pattern::new(Point::new(960, 540));
        for phase in [Phase::LeftBall, Phase::RightBall] {
            let ball = phase_points(&pattern, phase);
            assert_eq!(ball.len(), 37);
            assert_eq!(ball.first(), ball.last());
        }
        assert_eq!(phase_points(&pattern, Phase::LeftBall)[0], Point::new(950, 520));
        assert_eq!(phase_points(&pattern, Phase::RightBall)[0], Point::new(1030, 520));
    }

    #[test]
    fn ball_quarter_points_use_truncation() {
        let pattern = Pattern::new(Point::new(0, 0));
        let left = phase_points(&pattern, Phase::LeftBall);
        // 90° and 270°: cos is a tiny non-zero float that must truncate to 0
        assert_eq!(left[9], Point::new(-40, 10));
        assert_eq!(left[27], Point::new(-40, -50));
    }

    #[test]
    fn circle_point_truncates_toward_zero() {
        // 30 * cos(150°) = -25.98..., rounding would give -26
        let p = circle_point(Point::new(0, 0), 30, 150);
        assert_eq!(p.x, -25);
        // 50 * cos(45°) = 35.35...
        let p = circle_point(Point::new(0, 0), 50, 45);
        assert_eq!(p, Point::new(35, 35));
    }

    #[test]
    fn zero_length_shaft_skips_to_head() {
        let geometry = PatternGeometry {
            shaft_length: 0,
            ..PatternGeometry::default()
        };
        let pattern = Pattern::with_geometry(Point::new(0, 0), geometry);
        let first = pattern.waypoints().next().unwrap();
        assert_eq!(first.phase, Phase::Head);
        assert_eq!(first.point, Point::new(50, 0));
        assert_eq!(pattern.len(), 111);
    }

    #[test]
    fn size_hint_tracks_progress() {
        let pattern = Pattern::new(Point::new(0, 0));
        let mut it = pattern.waypoints();
        for _ in 0..205 {
            it.next();
        }
        assert_eq!(it.len(), 311 - 205);
        it.by_ref().for_each(drop);
        assert_eq!(it.len(), 0);
        assert!(it.next().is_none());
    }
}
