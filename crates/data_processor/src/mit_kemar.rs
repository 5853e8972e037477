//! Loading of the raw MIT KEMAR measurements.
//!
//! The dataset is distributed as a directory per elevation, `elev<angle>`, each containing one wave file per azimuth
//! named `L<elevation>e<azimuth>a.wav`.  We only read the left ear; the right ear is the mirror image.  No processing
//! is done here: the impulses come out exactly as measured, scaled to `-1.0..1.0`.
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use regex::Regex;

use crate::error::{Error, Result, SourceError};
use crate::source::{DatasetSource, SourceDataset};

/// The sampling rate of the measurements.
pub const SR: u32 = 44100;

lazy_static::lazy_static! {
    static ref FILE_NAME: Regex = Regex::new(r"^L(-?\d+)e(\d+)a\.wav$").expect("Regex is a valid literal");
}

/// elevation -> azimuth -> impulse.
type Measurements = BTreeMap<i32, BTreeMap<i32, Vec<f32>>>;

/// A [DatasetSource] reading the MIT KEMAR "full" layout from a directory.
#[derive(Clone, Debug)]
pub struct MitKemarDirectory {
    data_dir: PathBuf,
}

impl MitKemarDirectory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn load_measurements(&self) -> Result<Measurements> {
        let mut measurements = Measurements::new();

        for elev_dir in read_dir(&self.data_dir)? {
            let is_elev = elev_dir
                .file_name()
                .and_then(|n| n.to_str())
                .map_or(false, |n| n.starts_with("elev"));
            if !is_elev || !elev_dir.is_dir() {
                continue;
            }

            for file in read_dir(&elev_dir)? {
                let Some((elevation, azimuth)) = parse_file_name(&file) else {
                    log::debug!("Skipping {}", file.display());
                    continue;
                };

                let impulse = read_impulse(&file)?;
                let previous = measurements
                    .entry(elevation)
                    .or_default()
                    .insert(azimuth, impulse);
                if previous.is_some() {
                    return Err(SourceError::DuplicateEntry {
                        path: file,
                        elevation,
                        azimuth,
                    }
                    .into());
                }
            }
        }

        Ok(measurements)
    }
}

impl DatasetSource for MitKemarDirectory {
    fn compute_hrtf_data(&self) -> Result<SourceDataset> {
        log::info!("Loading MIT KEMAR data from {}", self.data_dir.display());
        let measurements = self.load_measurements()?;
        log::info!("Have {} elevations", measurements.len());
        unfold(measurements)
    }
}

fn read_dir(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| Error::read(dir, e))?;
    entries
        .map(|e| e.map(|e| e.path()).map_err(|err| Error::read(dir, err)))
        .collect()
}

/// Returns `(elevation, azimuth)`.
fn parse_file_name(path: &Path) -> Option<(i32, i32)> {
    let name = path.file_name()?.to_str()?;
    let caps = FILE_NAME.captures(name)?;
    let elevation = caps[1].parse().ok()?;
    let azimuth = caps[2].parse().ok()?;
    Some((elevation, azimuth))
}

fn read_impulse(path: &Path) -> Result<Vec<f32>> {
    let wave_err = |source: hound::Error| SourceError::Wave {
        path: path.to_owned(),
        source,
    };

    let mut reader = hound::WavReader::open(path).map_err(wave_err)?;
    let spec = reader.spec();
    if spec.channels != 1
        || spec.sample_rate != SR
        || spec.bits_per_sample != 16
        || spec.sample_format != hound::SampleFormat::Int
    {
        return Err(SourceError::WaveFormat {
            path: path.to_owned(),
            expected_sr: SR,
            channels: spec.channels,
            bits: spec.bits_per_sample,
            format: spec.sample_format,
            sr: spec.sample_rate,
        }
        .into());
    }

    let samples = reader
        .samples::<i16>()
        .map(|s| s.map(|s| s as f32 / 32768.0))
        .collect::<Result<Vec<_>, _>>()
        .map_err(wave_err)?;
    Ok(samples)
}

/// Check that elevations are in range and equidistant, then flatten the sorted map into rows.
fn unfold(measurements: Measurements) -> Result<SourceDataset> {
    let elev_angles = measurements.keys().copied().collect::<Vec<_>>();
    if elev_angles.len() < 3 {
        return Err(SourceError::TooFewElevations(elev_angles.len()).into());
    }

    if let Some(&bad) = elev_angles.iter().find(|e| !(-90..=90).contains(*e)) {
        return Err(SourceError::ElevationOutOfRange(bad).into());
    }

    // Widened so that differences can't overflow whatever the file names said.
    let increment = elev_angles[1] as i64 - elev_angles[0] as i64;
    for w in elev_angles.windows(2) {
        if w[1] as i64 - w[0] as i64 != increment {
            return Err(SourceError::ElevationsNotEquidistant {
                expected: increment,
                from: w[0],
                to: w[1],
            }
            .into());
        }
    }

    let azimuths = measurements
        .into_values()
        .map(|azs| azs.into_values().collect::<Vec<_>>())
        .collect::<Vec<_>>();

    Ok(SourceDataset {
        elev_min: elev_angles[0] as f64,
        elev_increment: increment as f64,
        azimuths,
    })
}
