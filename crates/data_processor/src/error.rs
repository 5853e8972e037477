use std::path::PathBuf;

#[derive(Debug, derive_more::Display, derive_more::IsVariant)]
enum ErrorPayload {
    #[display(fmt = "Invalid input dataset: {}", _0)]
    InvalidInput(InvalidInputError),

    #[display(fmt = "Unable to load source dataset: {}", _0)]
    Source(SourceError),

    #[display(fmt = "Unable to serialize dataset: {}", _0)]
    Serialization(prost::EncodeError),

    #[display(fmt = "Unable to read source data: {}", _0)]
    Read(IoError),

    #[display(fmt = "Unable to create output directory: {}", _0)]
    CreateDir(IoError),

    #[display(fmt = "Unable to write dataset file: {}", _0)]
    WriteFile(IoError),

    #[display(fmt = "Unable to write dataset: {}", _0)]
    Write(std::io::Error),
}

/// The source dataset cannot be mapped onto the output message.
#[derive(Debug, thiserror::Error)]
pub enum InvalidInputError {
    #[error("Elevation row {row} (angle {angle}) has no azimuths")]
    EmptyRow { row: usize, angle: f64 },
}

/// The raw data backing a source dataset is malformed.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("{}: unable to decode wave file: {source}", .path.display())]
    Wave {
        path: PathBuf,
        source: hound::Error,
    },

    #[error(
        "{}: expected a mono 16-bit wave file at {expected_sr} HZ, got {channels} channels of {bits}-bit {format:?} at {sr} HZ",
        .path.display()
    )]
    WaveFormat {
        path: PathBuf,
        expected_sr: u32,
        channels: u16,
        bits: u16,
        format: hound::SampleFormat,
        sr: u32,
    },

    /// Fewer than 3 elevations.  The increment is measured from the first pair and then checked against the rest, so
    /// with only 2 there is nothing to check it against.
    #[error("Found {0} elevations, but at least 3 are required")]
    TooFewElevations(usize),

    #[error("Elevation {0} is not between -90 and 90")]
    ElevationOutOfRange(i32),

    #[error("Elevations must be equidistant: expected increment {expected}, but {from} is followed by {to}")]
    ElevationsNotEquidistant { expected: i64, from: i32, to: i32 },

    #[error(
        "{}: found a second impulse for elevation {elevation} azimuth {azimuth}",
        .path.display()
    )]
    DuplicateEntry {
        path: PathBuf,
        elevation: i32,
        azimuth: i32,
    },
}

/// A filesystem operation failed.
#[derive(Debug, thiserror::Error)]
#[error("{}: {source}", .path.display())]
pub struct IoError {
    pub path: PathBuf,
    pub source: std::io::Error,
}

#[derive(Debug, thiserror::Error)]
#[error("{payload}")]
pub struct Error {
    payload: ErrorPayload,
}

macro_rules! conv {
    ($variant: ident, $from_err: path) => {
        impl From<$from_err> for Error {
            fn from(value: $from_err) -> Error {
                Error {
                    payload: ErrorPayload::$variant(value),
                }
            }
        }
    };
}

conv!(InvalidInput, InvalidInputError);
conv!(Source, SourceError);
conv!(Serialization, prost::EncodeError);

/// Filesystem failures go through these rather than `From`, so that the message says which step failed.
impl Error {
    fn from_payload(payload: ErrorPayload) -> Error {
        Error { payload }
    }

    pub(crate) fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Error {
        Self::from_payload(ErrorPayload::Read(IoError {
            path: path.into(),
            source,
        }))
    }

    pub(crate) fn create_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Error {
        Self::from_payload(ErrorPayload::CreateDir(IoError {
            path: path.into(),
            source,
        }))
    }

    pub(crate) fn write_file(path: impl Into<PathBuf>, source: std::io::Error) -> Error {
        Self::from_payload(ErrorPayload::WriteFile(IoError {
            path: path.into(),
            source,
        }))
    }

    /// Writing to a caller-supplied writer failed.
    pub(crate) fn write(source: std::io::Error) -> Error {
        Self::from_payload(ErrorPayload::Write(source))
    }

    /// Was the source dataset unusable, e.g. because a row had no azimuths?
    pub fn is_invalid_input(&self) -> bool {
        self.payload.is_invalid_input()
    }

    /// Did loading the raw data behind a source fail?
    pub fn is_source(&self) -> bool {
        self.payload.is_source()
    }

    pub fn is_serialization(&self) -> bool {
        self.payload.is_serialization()
    }

    /// Did a filesystem operation fail?
    pub fn is_io(&self) -> bool {
        self.payload.is_read()
            || self.payload.is_create_dir()
            || self.payload.is_write_file()
            || self.payload.is_write()
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
