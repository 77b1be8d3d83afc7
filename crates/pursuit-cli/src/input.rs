//! Command line input for a single pursuit, and the bounds every input has to
//! respect before it is handed to the solver.

use anyhow::{bail, Result};
use clap::Args;
use pursuit_core::{Point, PursuitRequest};

/// Largest accepted absolute value of a coordinate.
pub const COORDINATE_LIMIT: f64 = 1e5;

/// Largest accepted speed.
pub const SPEED_LIMIT: f64 = 1e5;

/// Largest accepted number of track samples.
pub const TRACK_SAMPLE_LIMIT: usize = 10_000;

/// The five inputs of a pursuit. Anything left out takes its value from
/// [`PursuitRequest::default`].
#[derive(Debug, Clone, Args)]
pub struct RequestArgs {
    /// East coordinate of the hunter's start position.
    #[clap(long, allow_hyphen_values = true)]
    pub hunter_x: Option<f64>,
    /// North coordinate of the hunter's start position.
    #[clap(long, allow_hyphen_values = true)]
    pub hunter_y: Option<f64>,
    /// Speed of the hunter, in units per second.
    #[clap(long)]
    pub hunter_speed: Option<f64>,

    /// East coordinate of the target's start position.
    #[clap(long, allow_hyphen_values = true)]
    pub target_x: Option<f64>,
    /// North coordinate of the target's start position.
    #[clap(long, allow_hyphen_values = true)]
    pub target_y: Option<f64>,
    /// Speed of the target, in units per second.
    #[clap(long)]
    pub target_speed: Option<f64>,
    /// Navigation bearing of the target in degrees (0 = north, 90 = east).
    #[clap(long, allow_hyphen_values = true)]
    pub target_heading: Option<f64>,
}

impl RequestArgs {
    pub fn into_request(self) -> PursuitRequest {
        let default = PursuitRequest::default();
        PursuitRequest {
            hunter_position: Point::new(
                self.hunter_x.unwrap_or(default.hunter_position.x),
                self.hunter_y.unwrap_or(default.hunter_position.y),
            ),
            hunter_speed: self.hunter_speed.unwrap_or(default.hunter_speed),
            target_position: Point::new(
                self.target_x.unwrap_or(default.target_position.x),
                self.target_y.unwrap_or(default.target_position.y),
            ),
            target_speed: self.target_speed.unwrap_or(default.target_speed),
            target_heading: self.target_heading.unwrap_or(default.target_heading),
        }
    }
}

/// Checks that a request is within the bounds this tool accepts.
pub fn validate(request: &PursuitRequest) -> Result<()> {
    check_coordinate("Hunter x", request.hunter_position.x)?;
    check_coordinate("Hunter y", request.hunter_position.y)?;
    check_coordinate("Target x", request.target_position.x)?;
    check_coordinate("Target y", request.target_position.y)?;
    check_speed("Hunter speed", request.hunter_speed)?;
    check_speed("Target speed", request.target_speed)?;
    if !request.target_heading.is_finite() {
        bail!(
            "Target heading must be a finite number of degrees, got {}",
            request.target_heading
        );
    }
    Ok(())
}

/// Checks that a requested number of track samples is within the bounds this tool
/// accepts.
pub fn validate_track_samples(samples: usize) -> Result<()> {
    if samples > TRACK_SAMPLE_LIMIT {
        bail!(
            "Track samples must be at most {}, got {}",
            TRACK_SAMPLE_LIMIT,
            samples
        );
    }
    Ok(())
}

fn check_coordinate(name: &str, value: f64) -> Result<()> {
    if !(-COORDINATE_LIMIT..=COORDINATE_LIMIT).contains(&value) {
        bail!(
            "{} must be within ±{}, got {}",
            name,
            COORDINATE_LIMIT,
            value
        );
    }
    Ok(())
}

fn check_speed(name: &str, value: f64) -> Result<()> {
    if !(0.0..=SPEED_LIMIT).contains(&value) {
        bail!("{} must be within [0, {}], got {}", name, SPEED_LIMIT, value);
    }
    Ok(())
}
