use anyhow::Context;
use hrtf_data_processor::{DatasetSource, MitKemarDirectory};

use crate::cli_args::{CliArgs, ExportArgs};

pub fn export(_top_args: &CliArgs, export_args: &ExportArgs) -> anyhow::Result<()> {
    let source = MitKemarDirectory::new(&export_args.data_dir);
    let db = source
        .compute_hrtf_data()
        .context("While computing the HRTF dataset")?;

    log::info!(
        "Dataset has {} elevations starting at {} in steps of {}, impulse length {:?}",
        db.num_elevations(),
        db.elev_min,
        db.elev_increment,
        db.impulse_length()
    );

    let repo_root = export_args.repo.repo_root();
    let report = hrtf_data_processor::export_to_repo(&db, &repo_root).with_context(|| {
        format!(
            "While exporting the HRTF dataset into {}",
            repo_root.display()
        )
    })?;

    println!(
        "Wrote {} bytes to {}",
        report.bytes_written,
        report.path.display()
    );
    Ok(())
}
