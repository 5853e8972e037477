use crate::{DatasetError, HrtfDataset};

/// because is_sorted isn't stable yet.
fn check_sorted<T, K: PartialOrd>(slice: &[T], mut by_fn: impl FnMut(&T) -> K) -> bool {
    slice.windows(2).all(|w| by_fn(&w[0]) <= by_fn(&w[1]))
}

fn invalid(message: String) -> DatasetError {
    DatasetError::Invalid(message)
}

/// Check that a dataset can be used for HRTF panning.
///
/// The rules are:
///
/// - There is at least one elevation, and every elevation has at least one azimuth.
/// - All impulses have the same, non-zero length.
/// - Elevations are sorted and in `-90.0..=90.0`.
/// - Azimuths are sorted within their elevation and in `0.0..=360.0`.
pub fn validate(db: &HrtfDataset) -> Result<(), DatasetError> {
    if db.elevations.is_empty() {
        return Err(invalid("Found an HRTF dataset without any elevations".into()));
    }

    let expected_len = db.elevations[0]
        .azimuths
        .first()
        .ok_or_else(|| invalid("There must be at least one azimuth in each elevation".into()))?
        .impulse
        .len();

    if expected_len == 0 {
        return Err(invalid("The azimuth impulse length must not be 0".into()));
    }

    if !check_sorted(&db.elevations[..], |x| x.angle) {
        return Err(invalid("Elevations must be sorted".into()));
    }

    for (i, elev) in db.elevations.iter().enumerate() {
        if !(-90.0..=90.0).contains(&elev.angle) {
            return Err(invalid(format!(
                "Elevation {} has angle {}, but must be between -90 and 90",
                i, elev.angle
            )));
        }

        if elev.azimuths.is_empty() {
            return Err(invalid(format!("Elevation {} has no azimuths", i)));
        }

        if !check_sorted(&elev.azimuths[..], |x| x.angle) {
            return Err(invalid(format!("Elevation {}: azimuths are not sorted", i)));
        }

        for (az_i, az) in elev.azimuths.iter().enumerate() {
            if !(0.0..=360.0).contains(&az.angle) {
                return Err(invalid(format!(
                    "Azimuth {} of elevation {} has angle {} which is not in 0.0..=360.0",
                    az_i, i, az.angle
                )));
            }

            if az.impulse.len() != expected_len {
                return Err(invalid(format!(
                    "Azimuth {} of elevation {}: found impulse length {}, expected {}",
                    az_i,
                    i,
                    az.impulse.len(),
                    expected_len
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HrtfAzimuth, HrtfElevation};

    fn elev(angle: f64, az_angles: &[f64], len: usize) -> HrtfElevation {
        HrtfElevation {
            angle,
            azimuths: az_angles
                .iter()
                .map(|&angle| HrtfAzimuth {
                    angle,
                    impulse: vec![0.25; len],
                })
                .collect(),
        }
    }

    fn assert_invalid(db: &HrtfDataset) {
        let err = validate(db).unwrap_err();
        assert!(matches!(err, DatasetError::Invalid(_)), "{err:?}");
    }

    #[test]
    fn test_accepts_well_formed() {
        let db = HrtfDataset {
            elevations: vec![
                elev(-40.0, &[0.0, 90.0, 180.0, 270.0], 2),
                elev(-30.0, &[0.0, 180.0], 2),
            ],
        };
        validate(&db).unwrap();
    }

    #[test]
    fn test_check_sorted() {
        assert!(check_sorted(&[1, 2, 2, 3], |x| *x));
        assert!(check_sorted::<i32, i32>(&[], |x| *x));
        assert!(!check_sorted(&[1, 3, 2], |x| *x));
    }

    #[test]
    fn test_rejects_empty() {
        assert_invalid(&HrtfDataset { elevations: vec![] });
        assert_invalid(&HrtfDataset {
            elevations: vec![elev(0.0, &[], 2)],
        });
        assert_invalid(&HrtfDataset {
            elevations: vec![elev(0.0, &[0.0], 0)],
        });
        assert_invalid(&HrtfDataset {
            elevations: vec![elev(0.0, &[0.0], 2), elev(10.0, &[], 2)],
        });
    }

    #[test]
    fn test_rejects_unsorted() {
        assert_invalid(&HrtfDataset {
            elevations: vec![elev(10.0, &[0.0], 2), elev(0.0, &[0.0], 2)],
        });
        assert_invalid(&HrtfDataset {
            elevations: vec![elev(0.0, &[180.0, 0.0], 2)],
        });
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert_invalid(&HrtfDataset {
            elevations: vec![elev(-95.0, &[0.0], 2)],
        });
        assert_invalid(&HrtfDataset {
            elevations: vec![elev(0.0, &[0.0, 361.0], 2)],
        });
    }

    #[test]
    fn test_rejects_mismatched_lengths() {
        assert_invalid(&HrtfDataset {
            elevations: vec![elev(0.0, &[0.0], 2), elev(10.0, &[0.0], 3)],
        });
    }
}
