use std::path::Path;

use anyhow::{bail, Result};
use pursuit_core::ScenarioFile;

/// Writes the example scenarios to `path`.
pub fn init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Scenario file already exists: {} (use --force to overwrite)",
            path.display()
        );
    }
    ScenarioFile::example().store(path)?;
    tracing::info!("Wrote example scenarios to {}", path.display());
    Ok(())
}
