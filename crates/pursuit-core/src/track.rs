//! Straight-line tracks of both bodies, for plotting a solved pursuit.

use serde::{Deserialize, Serialize};

use crate::{Point, PursuitOutcome, PursuitRequest};

/// How far the target track is extrapolated when there is no intercept, in seconds.
pub const NO_INTERCEPT_HORIZON: f64 = 10.0;

/// How far past the intercept time the target track is extrapolated, as a factor of
/// the intercept time.
pub const INTERCEPT_OVERSHOOT: f64 = 1.2;

/// Positions of both bodies at a single point in time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackSample {
    pub time: f64,
    pub target: Point,
    /// Position of the hunter on its intercept course, `None` if there is no intercept.
    pub hunter: Option<Point>,
}

/// The time up to which tracks of this outcome are worth plotting.
pub fn track_horizon(outcome: &PursuitOutcome) -> f64 {
    match outcome {
        PursuitOutcome::Found(intercept) => intercept.time * INTERCEPT_OVERSHOOT,
        PursuitOutcome::NotFound => NO_INTERCEPT_HORIZON,
    }
}

/// Samples both tracks at `samples` evenly spaced times in `[0, track_horizon]`.
///
/// The hunter flies straight at the intercept point and stays there once it is
/// reached.
pub fn sample_tracks(
    request: &PursuitRequest,
    outcome: &PursuitOutcome,
    samples: usize,
) -> Vec<TrackSample> {
    let horizon = track_horizon(outcome);
    let step = if samples > 1 {
        horizon / (samples - 1) as f64
    } else {
        0.0
    };

    (0..samples)
        .map(|i| {
            let time = step * i as f64;
            let hunter = outcome.intercept().map(|intercept| {
                if time >= intercept.time {
                    intercept.point
                } else {
                    let progress = time / intercept.time;
                    request.hunter_position
                        + (intercept.point - request.hunter_position) * progress
                }
            });
            TrackSample {
                time,
                target: request.target_position_at(time),
                hunter,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::Vector2;

    #[test]
    fn test_horizon() {
        assert_eq!(track_horizon(&PursuitOutcome::NotFound), NO_INTERCEPT_HORIZON);

        let req = PursuitRequest {
            target_speed: 0.0,
            ..Default::default()
        };
        // 100 units at speed 15
        assert_relative_eq!(
            track_horizon(&req.solve()),
            100.0 / 15.0 * 1.2,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_sample_count() {
        let req = PursuitRequest::default();
        let outcome = req.solve();
        assert!(sample_tracks(&req, &outcome, 0).is_empty());

        let single = sample_tracks(&req, &outcome, 1);
        assert_eq!(single.len(), 1);
        assert_eq!(single[0].time, 0.0);
        assert_eq!(single[0].target, req.target_position);
        assert_eq!(single[0].hunter, Some(req.hunter_position));

        let samples = sample_tracks(&req, &outcome, 11);
        assert_eq!(samples.len(), 11);
        assert_relative_eq!(samples[10].time, track_horizon(&outcome), epsilon = 1e-9);
    }

    #[test]
    fn test_tracks_meet_at_intercept() {
        let req = PursuitRequest {
            hunter_position: Vector2::new(0.0, 0.0),
            hunter_speed: 5.0,
            target_position: Vector2::new(100.0, 0.0),
            target_speed: 20.0,
            target_heading: 270.0,
        };
        let outcome = req.solve();
        let intercept = *outcome.intercept().unwrap();

        // Horizon is 4.8 s, so samples land on 0.0, 0.4, ..., 4.8 and include t = 4
        let samples = sample_tracks(&req, &outcome, 13);
        let at_intercept = samples
            .iter()
            .find(|s| (s.time - intercept.time).abs() < 1e-9)
            .unwrap();
        let hunter = at_intercept.hunter.unwrap();
        assert_relative_eq!(hunter.x, at_intercept.target.x, epsilon = 1e-6);
        assert_relative_eq!(hunter.y, at_intercept.target.y, epsilon = 1e-6);

        // Halfway there the hunter has covered half the distance
        let halfway = samples.iter().find(|s| (s.time - 2.0).abs() < 1e-9).unwrap();
        assert_relative_eq!(halfway.hunter.unwrap().x, 10.0, epsilon = 1e-6);

        // The hunter holds the intercept point afterwards
        let last = samples.last().unwrap();
        assert_eq!(last.hunter, Some(intercept.point));
        assert_relative_eq!(last.target.x, 100.0 - 20.0 * 4.8, epsilon = 1e-6);
    }

    #[test]
    fn test_no_intercept_has_no_hunter_track() {
        let req = PursuitRequest {
            hunter_speed: 0.0,
            ..Default::default()
        };
        let outcome = req.solve();
        let samples = sample_tracks(&req, &outcome, 5);
        assert_eq!(samples.len(), 5);
        assert!(samples.iter().all(|s| s.hunter.is_none()));
        assert_relative_eq!(samples[4].time, NO_INTERCEPT_HORIZON);
        assert_relative_eq!(
            (samples[4].target - req.target_position).norm(),
            8.0 * NO_INTERCEPT_HORIZON,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_co_located_tracks() {
        let req = PursuitRequest {
            target_position: Vector2::new(0.0, 0.0),
            ..Default::default()
        };
        let outcome = req.solve();
        let samples = sample_tracks(&req, &outcome, 3);
        assert!(samples.iter().all(|s| s.time == 0.0));
        assert!(samples.iter().all(|s| s.hunter == Some(req.hunter_position)));
    }
}
