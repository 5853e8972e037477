//! Runtime access to the HRTF datasets produced by `hrtf_data_processor`.
//!
//! Datasets are stored as serialized protocol buffers in `src/bin_protos`.  This crate decodes them, checks that they
//! are usable, and hands back plain owned structs.
mod hrtf;
mod validate;

pub use hrtf::*;
pub use validate::validate;

use std::path::Path;

use prost::Message;

/// Name of the directory, relative to this crate's `src`, holding serialized datasets.
pub const BIN_PROTOS_DIR: &str = "bin_protos";

/// File name of the MIT KEMAR dataset within [BIN_PROTOS_DIR].
pub const MIT_KEMAR_FILE: &str = "mit_kemar.bin";

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("Unable to read {}: {source}", .path.display())]
    Io {
        path: std::path::PathBuf,
        source: std::io::Error,
    },

    #[error("Dataset is not a valid HrtfDataset message: {0}")]
    Decode(#[from] prost::DecodeError),

    #[error("Dataset failed validation: {0}")]
    Invalid(String),
}

/// Decode a serialized `HrtfDataset` message and validate it.
pub fn decode_dataset(bytes: &[u8]) -> Result<HrtfDataset, DatasetError> {
    let proto = hrtf_protos::hrtf::HrtfDataset::decode(bytes)?;
    let dataset = HrtfDataset::from(proto);
    validate(&dataset)?;
    log::debug!(
        "Decoded HRTF dataset with {} elevations and {} azimuths",
        dataset.elevations.len(),
        dataset.azimuth_count()
    );
    Ok(dataset)
}

/// Read, decode, and validate the dataset at `path`.
pub fn load_dataset(path: impl AsRef<Path>) -> Result<HrtfDataset, DatasetError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| DatasetError::Io {
        path: path.to_owned(),
        source,
    })?;
    decode_dataset(&bytes[..])
}
