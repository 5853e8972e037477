use crate::error::Result;

/// An HRTF dataset as it comes out of processing, before being shaped into the serialized form.
///
/// Row `i` of `azimuths` is at elevation `elev_min + elev_increment * i`.  Entry `j` of a row with `n` entries is at
/// azimuth `j * 360 / n`, so azimuths are always equally spaced around the circle, but the count may vary per row.
#[derive(Clone, Debug, PartialEq)]
pub struct SourceDataset {
    /// Minimum elevation angle in degrees.
    pub elev_min: f64,

    /// Increment of the elevation in degrees.
    pub elev_increment: f64,

    /// Per elevation, per azimuth impulse responses.
    pub azimuths: Vec<Vec<Vec<f32>>>,
}

impl SourceDataset {
    pub fn num_elevations(&self) -> usize {
        self.azimuths.len()
    }

    /// The azimuth count of each elevation.
    pub fn num_azimuths(&self) -> Vec<usize> {
        self.azimuths.iter().map(|r| r.len()).collect()
    }

    /// Length of the first impulse of the first row, if there is one.
    pub fn impulse_length(&self) -> Option<usize> {
        self.azimuths
            .first()
            .and_then(|r| r.first())
            .map(|i| i.len())
    }

    /// Angle in degrees of elevation row `row`.
    pub fn elevation_angle(&self, row: usize) -> f64 {
        self.elev_min + self.elev_increment * row as f64
    }
}

/// Something which can produce a [SourceDataset].
///
/// This is the seam between computing HRTF data and exporting it.
pub trait DatasetSource {
    fn compute_hrtf_data(&self) -> Result<SourceDataset>;
}

impl DatasetSource for SourceDataset {
    fn compute_hrtf_data(&self) -> Result<SourceDataset> {
        Ok(self.clone())
    }
}
