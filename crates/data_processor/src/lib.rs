//! Tooling which turns HRTF measurements into the serialized datasets shipped in `hrtf_datasets`.
//!
//! The flow is: a [DatasetSource] produces a [SourceDataset], then [export::export_to_repo] maps it onto the
//! `HrtfDataset` protobuf message and writes it to `crates/datasets/src/bin_protos/mit_kemar.bin`.  Computing the
//! HRTF data itself is not done here; [MitKemarDirectory] loads the raw measurements as-is.
mod error;
pub mod export;
mod mit_kemar;
mod source;

pub use error::*;
pub use export::{export_to_repo, export_to_writer, ExportReport};
pub use mit_kemar::{MitKemarDirectory, SR};
pub use source::{DatasetSource, SourceDataset};
