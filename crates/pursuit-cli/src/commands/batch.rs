use std::path::Path;

use anyhow::{Context, Result};
use pursuit_core::{PursuitOutcome, PursuitRequest, ScenarioFile};
use serde::Serialize;

use crate::{
    cli::OutputFormat,
    input::validate,
    report::{render_outcome, render_request},
};

#[derive(Debug, Serialize)]
struct BatchEntry<'a> {
    name: &'a str,
    request: PursuitRequest,
    outcome: PursuitOutcome,
}

/// Solves every scenario in a scenario file.
///
/// All scenarios are validated before any of them is solved.
pub fn batch(path: &Path, format: OutputFormat) -> Result<String> {
    let file = ScenarioFile::load(path)?;
    for scenario in &file.scenarios {
        validate(&scenario.request)
            .with_context(|| format!("Invalid scenario '{}'", scenario.name))?;
    }

    let entries: Vec<_> = file
        .scenarios
        .iter()
        .map(|scenario| BatchEntry {
            name: &scenario.name,
            request: scenario.request,
            outcome: scenario.request.solve(),
        })
        .collect();
    let found = entries.iter().filter(|e| e.outcome.is_found()).count();
    tracing::info!(
        "Solved {} scenarios from {}, {} with an intercept",
        entries.len(),
        path.display(),
        found
    );

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&entries)? + "\n"),
        OutputFormat::Text => {
            let sections: Vec<_> = entries
                .iter()
                .map(|entry| {
                    format!(
                        "[{}]\n{}{}",
                        entry.name,
                        render_request(&entry.request),
                        render_outcome(&entry.outcome)
                    )
                })
                .collect();
            Ok(sections.join("\n"))
        }
    }
}
