use anyhow::Context;
use itertools::Itertools;

use crate::cli_args::{CliArgs, InspectArgs};

pub fn inspect(_top_args: &CliArgs, inspect_args: &InspectArgs) -> anyhow::Result<()> {
    let path = match &inspect_args.path {
        Some(p) => p.clone(),
        None => hrtf_data_processor::export::output_path(&inspect_args.repo.repo_root()),
    };

    let db = hrtf_datasets::load_dataset(&path)
        .with_context(|| format!("While loading {}", path.display()))?;

    // Validation guarantees at least one elevation.
    let first = db.elevations.first().map_or(0.0, |e| e.angle);
    let last = db.elevations.last().map_or(0.0, |e| e.angle);
    let counts = db.elevations.iter().map(|e| e.azimuths.len()).join(", ");

    println!("{}", path.display());
    println!("Elevations: {} ({first} to {last})", db.elevations.len());
    println!("Azimuths per elevation: {counts}");
    println!("Total azimuths: {}", db.azimuth_count());
    println!("Impulse length: {}", db.impulse_length().unwrap_or(0));
    Ok(())
}
