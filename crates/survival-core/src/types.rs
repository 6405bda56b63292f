//! Fundamental geometric and simulation types.
//!
//! Screen-style coordinates: x grows to the right, y grows downward.
//! Angles are in degrees, 0 = "up" (negative y), increasing counter-clockwise,
//! so a heading of 90 points toward negative x.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::TICK_RATE;

/// 2D position in world units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Per-tick displacement in world units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

/// Toroidal arena bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldBounds {
    pub width: f64,
    pub height: f64,
}

/// Integer health pool. Every mutation clamps into `[0, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    current: i32,
    max: i32,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

/// Normalize an angle in degrees into `[0, 360)`.
pub fn normalize_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance, ignoring wrap-around.
    pub fn distance_to(&self, other: &Position) -> f64 {
        (other.as_dvec2() - self.as_dvec2()).length()
    }

    /// Heading (degrees) that points from `self` toward `other`.
    pub fn bearing_to(&self, other: &Position) -> f64 {
        Velocity::new(other.x - self.x, other.y - self.y).heading()
    }

    pub fn as_dvec2(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

impl Velocity {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Velocity of something moving at `speed` along `heading_deg`.
    pub fn from_heading(heading_deg: f64, speed: f64) -> Self {
        let rad = heading_deg.to_radians();
        Self {
            x: -speed * rad.sin(),
            y: -speed * rad.cos(),
        }
    }

    /// Heading in degrees `[0, 360)`. A zero vector reports 0.
    pub fn heading(&self) -> f64 {
        if self.x == 0.0 && self.y == 0.0 {
            return 0.0;
        }
        normalize_degrees((-self.x).atan2(-self.y).to_degrees())
    }
}

impl Aabb {
    /// Box of `width` x `height` centred on `center`.
    pub fn from_center(center: &Position, width: f64, height: f64) -> Self {
        let hw = width / 2.0;
        let hh = height / 2.0;
        Self {
            min_x: center.x - hw,
            min_y: center.y - hh,
            max_x: center.x + hw,
            max_y: center.y + hh,
        }
    }

    /// Axis-aligned bound of a `width` x `height` box rotated by `angle_deg`.
    pub fn rotated(center: &Position, width: f64, height: f64, angle_deg: f64) -> Self {
        let rad = angle_deg.to_radians();
        let (sin, cos) = (rad.sin().abs(), rad.cos().abs());
        Self::from_center(center, width * cos + height * sin, width * sin + height * cos)
    }

    /// Strict overlap: boxes that merely touch along an edge do not collide.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min_x < other.max_x
            && other.min_x < self.max_x
            && self.min_y < other.max_y
            && other.min_y < self.max_y
    }

    /// True when the box lies entirely outside `bounds`.
    pub fn is_outside(&self, bounds: &WorldBounds) -> bool {
        self.max_y < 0.0 || self.min_y > bounds.height || self.min_x > bounds.width || self.max_x < 0.0
    }
}

impl WorldBounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Map any position onto the torus `[0, width) x [0, height)`.
    pub fn wrap(&self, pos: Position) -> Position {
        Position {
            x: wrap_axis(pos.x, self.width),
            y: wrap_axis(pos.y, self.height),
        }
    }

    pub fn contains(&self, pos: &Position) -> bool {
        (0.0..self.width).contains(&pos.x) && (0.0..self.height).contains(&pos.y)
    }

    pub fn center(&self) -> Position {
        Position::new((self.width / 2.0).floor(), (self.height / 2.0).floor())
    }
}

fn wrap_axis(value: f64, bound: f64) -> f64 {
    let wrapped = value.rem_euclid(bound);
    if wrapped >= bound {
        0.0
    } else {
        wrapped
    }
}

impl Health {
    /// Full health pool. Negative maxima are treated as zero.
    pub fn new(max: i32) -> Self {
        let max = max.max(0);
        Self { current: max, max }
    }

    pub fn current(&self) -> i32 {
        self.current
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0
    }

    /// Subtract `amount` and return the remaining health.
    pub fn damage(&mut self, amount: i32) -> i32 {
        self.set(i64::from(self.current) - i64::from(amount))
    }

    /// Add `amount` (capped at max) and return the resulting health.
    pub fn heal(&mut self, amount: i32) -> i32 {
        self.set(i64::from(self.current) + i64::from(amount))
    }

    fn set(&mut self, value: i64) -> i32 {
        // Clamped into [0, max], so the narrowing cast is lossless.
        self.current = value.clamp(0, i64::from(self.max)) as i32;
        self.current
    }
}

impl SimTime {
    /// Advance by one tick. Elapsed time is derived from the tick count so it
    /// never drifts.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs = self.tick as f64 / TICK_RATE as f64;
    }
}
