use std::path::Path;

use anyhow::{Context, Result};
use fitsio::FitsFile;

use super::model::{ArfCurve, ArfError};
use super::transform::energy_midpoints;

// ---------------------------------------------------------------------------
// FITS ARF reader
// ---------------------------------------------------------------------------

/// Read an ARF from a FITS file.
///
/// Expects a binary-table extension named `SPECRESP` (case-insensitive, per
/// cfitsio) with numeric columns `ENERG_LO`, `ENERG_HI` and `SPECRESP`.
/// Returns the per-bin energy midpoints and the effective-area column.
/// Any missing file, extension, or column propagates as an error.
pub fn read_arf(path: &Path) -> Result<ArfCurve> {
    let mut fptr = FitsFile::open(path)
        .with_context(|| format!("opening FITS file {}", path.display()))?;

    let hdu = fptr
        .hdu("SPECRESP")
        .context("locating SPECRESP extension")?;

    let energ_lo: Vec<f64> = hdu
        .read_col(&mut fptr, "ENERG_LO")
        .context("reading ENERG_LO column")?;
    let energ_hi: Vec<f64> = hdu
        .read_col(&mut fptr, "ENERG_HI")
        .context("reading ENERG_HI column")?;
    let specresp: Vec<f64> = hdu
        .read_col(&mut fptr, "SPECRESP")
        .context("reading SPECRESP column")?;

    if energ_lo.len() != energ_hi.len() || energ_lo.len() != specresp.len() {
        return Err(ArfError::ColumnLengthMismatch {
            lo: energ_lo.len(),
            hi: energ_hi.len(),
            specresp: specresp.len(),
        }
        .into());
    }

    Ok(ArfCurve {
        energy: energy_midpoints(&energ_lo, &energ_hi),
        specresp,
    })
}
