use super::model::{ArfCurve, ArfError, PlotSeries, XAxis};

// ---------------------------------------------------------------------------
// Series transforms
// ---------------------------------------------------------------------------

/// hc in keV·Å: E [keV] = 12.398 / λ [Å].
pub const HC_KEV_ANGSTROM: f64 = 12.398;

/// Per-bin energy midpoints, 0.5 * (lo + hi).
pub fn energy_midpoints(lo: &[f64], hi: &[f64]) -> Vec<f64> {
    lo.iter().zip(hi).map(|(l, h)| 0.5 * (l + h)).collect()
}

/// Elementwise keV → Å conversion.
pub fn wavelengths(energy: &[f64]) -> Vec<f64> {
    energy.iter().map(|&e| HC_KEV_ANGSTROM / e).collect()
}

/// Elementwise ratio of `specresp` to the reference's baseline.
///
/// Meaningful only when both ARFs share one energy grid, so differing
/// lengths are rejected rather than silently truncated.
pub fn ratio_to_baseline(specresp: &[f64], baseline: &[f64]) -> Result<Vec<f64>, ArfError> {
    if specresp.len() != baseline.len() {
        return Err(ArfError::GridMismatch {
            curve: specresp.len(),
            reference: baseline.len(),
        });
    }
    Ok(specresp.iter().zip(baseline).map(|(s, b)| s / b).collect())
}

/// Derive the drawable series for one curve under the active modes.
pub fn to_series(
    label: &str,
    curve: &ArfCurve,
    x_axis: XAxis,
    baseline: Option<&[f64]>,
) -> Result<PlotSeries, ArfError> {
    let x = match x_axis {
        XAxis::Energy => curve.energy.clone(),
        XAxis::Wavelength => wavelengths(&curve.energy),
    };
    let y = match baseline {
        Some(baseline) => ratio_to_baseline(&curve.specresp, baseline)?,
        None => curve.specresp.clone(),
    };
    Ok(PlotSeries {
        label: label.to_string(),
        x,
        y,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn midpoints_average_bin_edges() {
        assert_eq!(energy_midpoints(&[1.0, 2.0], &[3.0, 4.0]), [2.0, 3.0]);
    }

    #[test]
    fn one_kev_is_12_398_angstrom() {
        let wav = wavelengths(&[1.0, 2.0]);
        assert_relative_eq!(wav[0], 12.398);
        assert_relative_eq!(wav[1], 6.199);
    }

    #[test]
    fn ratio_divides_elementwise() {
        let r = ratio_to_baseline(&[10.0, 20.0], &[5.0, 10.0]).unwrap();
        assert_eq!(r, [2.0, 2.0]);
    }

    #[test]
    fn ratio_rejects_mismatched_grids() {
        let err = ratio_to_baseline(&[1.0, 2.0, 3.0], &[1.0, 2.0]).unwrap_err();
        assert!(matches!(
            err,
            ArfError::GridMismatch {
                curve: 3,
                reference: 2
            }
        ));
    }

    #[test]
    fn series_applies_both_modes() {
        let curve = ArfCurve {
            energy: vec![1.0, 2.0],
            specresp: vec![10.0, 20.0],
        };
        let s = to_series("m", &curve, XAxis::Wavelength, Some(&[5.0, 10.0])).unwrap();
        assert_relative_eq!(s.x[0], 12.398);
        assert_relative_eq!(s.x[1], 6.199);
        assert_eq!(s.y, [2.0, 2.0]);
    }

    #[test]
    fn series_defaults_pass_through() {
        let curve = ArfCurve {
            energy: vec![1.0, 2.0],
            specresp: vec![10.0, 20.0],
        };
        let s = to_series("m", &curve, XAxis::Energy, None).unwrap();
        assert_eq!(s.x, curve.energy);
        assert_eq!(s.y, curve.specresp);
    }
}
