use anyhow::Result;
use pursuit_core::{sample_tracks, PursuitOutcome, PursuitRequest, TrackSample};
use serde::Serialize;

use crate::{
    cli::OutputFormat,
    input::{validate, validate_track_samples, RequestArgs},
    report::{render_outcome, render_request, render_tracks},
};

#[derive(Debug, Serialize)]
struct SolveReport {
    request: PursuitRequest,
    outcome: PursuitOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    tracks: Option<Vec<TrackSample>>,
}

/// Solves the pursuit given on the command line and renders the result.
pub fn solve(args: RequestArgs, track: Option<usize>, format: OutputFormat) -> Result<String> {
    let request = args.into_request();
    validate(&request)?;
    if let Some(samples) = track {
        validate_track_samples(samples)?;
    }

    tracing::debug!("Solving {:?}", request);
    let outcome = request.solve();
    tracing::debug!("Outcome: {:?}", outcome);

    let report = SolveReport {
        request,
        outcome,
        tracks: track.map(|samples| sample_tracks(&request, &outcome, samples)),
    };

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&report)? + "\n"),
        OutputFormat::Text => {
            let mut out = render_request(&report.request);
            out.push('\n');
            out.push_str(&render_outcome(&report.outcome));
            if let Some(tracks) = &report.tracks {
                out.push('\n');
                out.push_str(&render_tracks(tracks));
            }
            Ok(out)
        }
    }
}
