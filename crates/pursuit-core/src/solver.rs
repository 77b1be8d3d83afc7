use serde::{Deserialize, Serialize};

use crate::{heading_from_vector, velocity_components, Point, Vector2};

/// Absolute tolerance used by the degeneracy checks of the solver.
///
/// Problem coordinates are expected to be of order 1 to 1e5, where an absolute
/// tolerance is as good as a relative one.
pub const EPSILON: f64 = 1e-9;

/// A snapshot of both bodies at time zero.
///
/// Both bodies are assumed to keep their speed (and the target its heading) forever.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PursuitRequest {
    /// Start position of the hunter
    pub hunter_position: Point,
    /// Scalar speed of the hunter, in units per second
    pub hunter_speed: f64,
    /// Start position of the target
    pub target_position: Point,
    /// Scalar speed of the target, in units per second
    pub target_speed: f64,
    /// Navigation bearing of the target in degrees (0° = north, clockwise)
    pub target_heading: f64,
}

impl PursuitRequest {
    /// Velocity of the target on the east/north plane.
    pub fn target_velocity(&self) -> Vector2 {
        velocity_components(self.target_speed, self.target_heading)
    }

    /// Position of the target `time` seconds after the snapshot.
    pub fn target_position_at(&self, time: f64) -> Point {
        self.target_position + self.target_velocity() * time
    }

    /// Shorthand for [`solve`].
    pub fn solve(&self) -> PursuitOutcome {
        solve(self)
    }
}

impl Default for PursuitRequest {
    fn default() -> Self {
        Self {
            hunter_position: Point::new(0.0, 0.0),
            hunter_speed: 15.0,
            target_position: Point::new(100.0, 0.0),
            target_speed: 8.0,
            target_heading: 45.0,
        }
    }
}

/// Where, when and how the hunter catches the target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Intercept {
    /// Time until interception, in seconds
    pub time: f64,
    /// Navigation bearing the hunter has to hold, in degrees in `[0, 360)`
    pub hunter_heading: f64,
    /// Point where both bodies meet
    pub point: Point,
    /// Distance covered by the hunter
    pub distance: f64,
}

/// Result of [`solve`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PursuitOutcome {
    /// The hunter catches the target.
    Found(Intercept),
    /// No interception exists under constant-velocity motion.
    NotFound,
}

impl PursuitOutcome {
    /// The intercept, if there is one.
    pub fn intercept(&self) -> Option<&Intercept> {
        match self {
            PursuitOutcome::Found(intercept) => Some(intercept),
            PursuitOutcome::NotFound => None,
        }
    }

    /// Whether an intercept exists.
    pub fn is_found(&self) -> bool {
        matches!(self, PursuitOutcome::Found(_))
    }
}

/// Computes the earliest interception of the target by the hunter.
///
/// The hunter has to reach the moving point `target_position + t * v` in exactly `t`
/// seconds, so
///
/// ```text
/// |Δ + t * v| = hunter_speed * t          Δ = target_position - hunter_position
/// ```
///
/// Squaring gives `a * t² + b * t + c = 0` with `a = |v|² - hunter_speed²`,
/// `b = 2 * Δ · v` and `c = |Δ|²`, which is solved in closed form.
///
/// Unsolvable geometries are reported as [`PursuitOutcome::NotFound`]; this function
/// never panics for finite input.
pub fn solve(request: &PursuitRequest) -> PursuitOutcome {
    let delta = request.target_position - request.hunter_position;
    let dist_sq = delta.norm_squared();

    // Already co-located, the heading is arbitrary
    if dist_sq < EPSILON * EPSILON {
        return PursuitOutcome::Found(Intercept {
            time: 0.0,
            hunter_heading: 0.0,
            point: request.hunter_position,
            distance: 0.0,
        });
    }

    if request.hunter_speed < EPSILON {
        return PursuitOutcome::NotFound;
    }

    let target_velocity = request.target_velocity();
    let a = target_velocity.norm_squared() - request.hunter_speed * request.hunter_speed;
    let b = 2.0 * delta.dot(&target_velocity);
    let c = dist_sq;
    log::trace!("Intercept quadratic: a = {}, b = {}, c = {}", a, b, c);

    let time = match earliest_positive_root(a, b, c) {
        Some(time) => time,
        None => return PursuitOutcome::NotFound,
    };

    let point = request.target_position + target_velocity * time;
    PursuitOutcome::Found(Intercept {
        time,
        hunter_heading: heading_from_vector(point - request.hunter_position),
        point,
        distance: request.hunter_speed * time,
    })
}

/// Finds the smallest root of `a * t² + b * t + c = 0` that is greater than [`EPSILON`].
///
/// When `|a| < EPSILON` the equation is treated as linear. A vanishing `b` in that
/// case means the separation never changes and there is no root.
pub(crate) fn earliest_positive_root(a: f64, b: f64, c: f64) -> Option<f64> {
    if a.abs() < EPSILON {
        if b.abs() < EPSILON {
            log::trace!("Linear intercept equation has no root");
            return None;
        }
        let t = -c / b;
        log::trace!("Linear intercept equation, t = {}", t);
        return (t > EPSILON).then_some(t);
    }

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        log::trace!("Negative discriminant {}", discriminant);
        return None;
    }

    let sqrt_disc = discriminant.sqrt();
    let t1 = (-b - sqrt_disc) / (2.0 * a);
    let t2 = (-b + sqrt_disc) / (2.0 * a);
    log::trace!("Quadratic roots t1 = {}, t2 = {}", t1, t2);

    [t1, t2]
        .into_iter()
        .filter(|t| *t > EPSILON)
        .min_by(|x, y| x.total_cmp(y))
}
