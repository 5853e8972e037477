//! Protocol buffer definitions shared by the tools which produce HRTF datasets and the code which reads them.

/// Messages from `hrtf.proto`.
pub mod hrtf {
    include!(concat!(env!("OUT_DIR"), "/hrtf.rs"));
}
