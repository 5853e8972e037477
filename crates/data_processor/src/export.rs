//! Shaping a [SourceDataset] into the serialized `HrtfDataset` message and writing it where the datasets crate expects
//! it.
//!
//! The output is `<repo_root>/crates/datasets/src/bin_protos/mit_kemar.bin`, the standard protobuf encoding of one
//! `HrtfDataset`.  Elevation and azimuth order is exactly the order of the source rows and entries.
use std::io::Write;
use std::path::{Path, PathBuf};

use hrtf_protos::hrtf as proto;
use prost::Message;

use crate::error::{Error, InvalidInputError, Result};
use crate::source::SourceDataset;

/// Where the exported file lands, relative to the repository root.
pub fn output_dir(repo_root: &Path) -> PathBuf {
    repo_root
        .join("crates")
        .join("datasets")
        .join("src")
        .join(hrtf_datasets::BIN_PROTOS_DIR)
}

pub fn output_path(repo_root: &Path) -> PathBuf {
    output_dir(repo_root).join(hrtf_datasets::MIT_KEMAR_FILE)
}

/// What [export_to_repo] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub path: PathBuf,
    pub bytes_written: usize,
}

fn build_elevation(
    db: &SourceDataset,
    row: usize,
    entries: &[Vec<f32>],
) -> Result<proto::HrtfElevation> {
    let angle = db.elevation_angle(row);
    if entries.is_empty() {
        return Err(InvalidInputError::EmptyRow { row, angle }.into());
    }

    let count = entries.len() as f64;
    let azimuths = entries
        .iter()
        .enumerate()
        .map(|(j, impulse)| proto::HrtfAzimuth {
            angle: j as f64 * 360.0 / count,
            impulse: impulse.clone(),
        })
        .collect();

    Ok(proto::HrtfElevation { angle, azimuths })
}

/// Build the message for a dataset.
///
/// Fails if any row has no azimuths, since there is then no way to space them around the circle.
pub fn build_message(db: &SourceDataset) -> Result<proto::HrtfDataset> {
    let elevations = db
        .azimuths
        .iter()
        .enumerate()
        .map(|(row, entries)| build_elevation(db, row, entries))
        .collect::<Result<Vec<_>>>()?;

    Ok(proto::HrtfDataset { elevations })
}

pub fn encode_message(message: &proto::HrtfDataset) -> Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(message.encoded_len());
    message.encode(&mut buf)?;
    Ok(buf)
}

fn encode_dataset(db: &SourceDataset) -> Result<Vec<u8>> {
    let message = build_message(db)?;
    log::debug!(
        "Built message with {} elevations and {} azimuths",
        message.elevations.len(),
        message
            .elevations
            .iter()
            .map(|e| e.azimuths.len())
            .sum::<usize>()
    );
    encode_message(&message)
}

/// Build, encode, and write the dataset to `dest`, returning the number of bytes written.
///
/// Nothing is written unless the whole dataset encodes.
pub fn export_to_writer(db: &SourceDataset, mut dest: impl Write) -> Result<usize> {
    let bytes = encode_dataset(db)?;
    dest.write_all(&bytes[..]).map_err(Error::write)?;
    dest.flush().map_err(Error::write)?;
    Ok(bytes.len())
}

/// Export the dataset to its fixed location under `repo_root`, replacing whatever was there.
///
/// Missing directories are created.  Input is validated before the filesystem is touched, so a bad dataset leaves no
/// trace.
pub fn export_to_repo(db: &SourceDataset, repo_root: &Path) -> Result<ExportReport> {
    let bytes = encode_dataset(db)?;

    let dir = output_dir(repo_root);
    std::fs::create_dir_all(&dir).map_err(|e| Error::create_dir(&dir, e))?;

    let path = output_path(repo_root);
    {
        let mut file = std::fs::File::create(&path).map_err(|e| Error::write_file(&path, e))?;
        file.write_all(&bytes[..])
            .map_err(|e| Error::write_file(&path, e))?;
        file.sync_all().map_err(|e| Error::write_file(&path, e))?;
    }

    log::info!("Wrote {} bytes to {}", bytes.len(), path.display());

    Ok(ExportReport {
        path,
        bytes_written: bytes.len(),
    })
}
