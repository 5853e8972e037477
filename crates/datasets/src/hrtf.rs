use hrtf_protos::hrtf as proto;

/// A definition of an HRTF dataset.
#[derive(Clone, Debug, PartialEq)]
pub struct HrtfDataset {
    /// the elevations in this dataset, sorted from least to greatest.
    pub elevations: Vec<HrtfElevation>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HrtfElevation {
    /// The angle of this elevation angle in degrees where -90 is straight down and 90 striaght up.
    ///
    /// This slightly odd definition matches the literature and all of the HRTF datasets therein.
    pub angle: f64,

    /// the azimuths in this elevation sorted clockwise starting from 0.
    pub azimuths: Vec<HrtfAzimuth>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HrtfAzimuth {
    /// The angle of this azimuth in degrees starting from 0 and proceeding clockwise.
    ///
    /// We use degrees because every HRTF dataset in the literature uses degrees.
    pub angle: f64,
    pub impulse: Vec<f32>,
}

impl HrtfDataset {
    /// Length of the impulse responses, taken from the first azimuth of the first elevation.
    ///
    /// Validated datasets always have exactly one impulse length.
    pub fn impulse_length(&self) -> Option<usize> {
        self.elevations
            .first()
            .and_then(|e| e.azimuths.first())
            .map(|a| a.impulse.len())
    }

    /// Total number of azimuths across all elevations.
    pub fn azimuth_count(&self) -> usize {
        self.elevations.iter().map(|e| e.azimuths.len()).sum()
    }
}

impl From<proto::HrtfAzimuth> for HrtfAzimuth {
    fn from(value: proto::HrtfAzimuth) -> Self {
        HrtfAzimuth {
            angle: value.angle,
            impulse: value.impulse,
        }
    }
}

impl From<proto::HrtfElevation> for HrtfElevation {
    fn from(value: proto::HrtfElevation) -> Self {
        HrtfElevation {
            angle: value.angle,
            azimuths: value.azimuths.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<proto::HrtfDataset> for HrtfDataset {
    fn from(value: proto::HrtfDataset) -> Self {
        HrtfDataset {
            elevations: value.elevations.into_iter().map(Into::into).collect(),
        }
    }
}
