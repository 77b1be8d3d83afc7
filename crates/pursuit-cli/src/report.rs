use pursuit_core::{normalize_bearing, PursuitOutcome, PursuitRequest, TrackSample};

const NONE: &str = "—";

/// Describes the inputs of a pursuit, one body per line.
pub fn render_request(request: &PursuitRequest) -> String {
    format!(
        "Hunter:    ({:.2}, {:.2}) at speed {:.2}\n\
         Target:    ({:.2}, {:.2}) at speed {:.2}, heading {:.1}°\n",
        request.hunter_position.x,
        request.hunter_position.y,
        request.hunter_speed,
        request.target_position.x,
        request.target_position.y,
        request.target_speed,
        normalize_bearing(request.target_heading),
    )
}

/// Describes the outcome of a pursuit the way the results panel shows it.
pub fn render_outcome(outcome: &PursuitOutcome) -> String {
    match outcome {
        PursuitOutcome::Found(intercept) => format!(
            "Status:    INTERCEPT FOUND\n\
             Time (s):  {:.4}\n\
             Heading:   {:.2}°\n\
             Intercept: ({:.2}, {:.2})\n\
             Distance:  {:.2}\n",
            intercept.time,
            intercept.hunter_heading,
            intercept.point.x,
            intercept.point.y,
            intercept.distance,
        ),
        PursuitOutcome::NotFound => format!(
            "Status:    NO SOLUTION\n\
             Time (s):  {NONE}\n\
             Heading:   {NONE}\n\
             Intercept: {NONE}\n\
             Distance:  {NONE}\n"
        ),
    }
}

/// Renders track samples as a table.
pub fn render_tracks(samples: &[TrackSample]) -> String {
    let header = format!("{:>10}  {:>22}  {:>22}\n", "t", "target", "hunter");
    let rows = samples
        .iter()
        .map(|sample| {
            let target = format!("({:.2}, {:.2})", sample.target.x, sample.target.y);
            let hunter = match sample.hunter {
                Some(hunter) => format!("({:.2}, {:.2})", hunter.x, hunter.y),
                None => NONE.to_string(),
            };
            format!("{:>10.4}  {:>22}  {:>22}\n", sample.time, target, hunter)
        })
        .collect::<String>();
    header + &rows
}
