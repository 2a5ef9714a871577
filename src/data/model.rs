use thiserror::Error;

// ---------------------------------------------------------------------------
// ArfCurve – one ARF's response, as read from disk
// ---------------------------------------------------------------------------

/// An ARF's effective-area curve: per-bin energy midpoints and `SPECRESP`.
#[derive(Debug, Clone)]
pub struct ArfCurve {
    /// Energy bin midpoints, keV – 0.5 * (ENERG_LO + ENERG_HI).
    pub energy: Vec<f64>,
    /// Effective area per bin, cm².
    pub specresp: Vec<f64>,
}

impl ArfCurve {
    /// Number of energy bins.
    pub fn len(&self) -> usize {
        self.energy.len()
    }

    /// Whether the curve has no bins.
    pub fn is_empty(&self) -> bool {
        self.energy.is_empty()
    }
}

// ---------------------------------------------------------------------------
// PlotSeries – one drawable line
// ---------------------------------------------------------------------------

/// A derived (x, y) pair ready for drawing, with its legend label.
#[derive(Debug, Clone)]
pub struct PlotSeries {
    pub label: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

// ---------------------------------------------------------------------------
// View options
// ---------------------------------------------------------------------------

/// Which quantity runs along the X axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XAxis {
    Energy,
    Wavelength,
}

impl XAxis {
    pub fn label(self) -> &'static str {
        match self {
            XAxis::Energy => "Energy (keV)",
            XAxis::Wavelength => "λ (Å)",
        }
    }
}

/// Presentation flags shared by the file renderer and the viewer.
#[derive(Debug, Clone)]
pub struct ViewOptions {
    pub title: String,
    pub x_axis: XAxis,
    pub ratio: bool,
    pub xlog: bool,
    pub ylog: bool,
    pub xmin: Option<f64>,
    pub xmax: Option<f64>,
    pub ymin: Option<f64>,
    pub ymax: Option<f64>,
    /// Line width override; each renderer keeps its default when unset.
    pub line_width: Option<f64>,
    /// Font size override; each renderer keeps its default when unset.
    pub font_size: Option<f64>,
}

impl ViewOptions {
    pub fn x_label(&self) -> &'static str {
        self.x_axis.label()
    }

    /// The Y label is always effective area, even in ratio mode.
    pub fn y_label(&self) -> &'static str {
        "EA (cm²)"
    }

    /// Whether any explicit axis limit was given.
    pub fn has_limits(&self) -> bool {
        self.xmin.is_some() || self.xmax.is_some() || self.ymin.is_some() || self.ymax.is_some()
    }
}

// ---------------------------------------------------------------------------
// Data-layer errors
// ---------------------------------------------------------------------------

/// Structural problems in or between ARF tables.
#[derive(Debug, Error)]
pub enum ArfError {
    #[error(
        "SPECRESP table columns have unequal lengths: ENERG_LO {lo}, ENERG_HI {hi}, SPECRESP {specresp}"
    )]
    ColumnLengthMismatch {
        lo: usize,
        hi: usize,
        specresp: usize,
    },

    #[error("energy grid mismatch: curve has {curve} bins, reference has {reference}")]
    GridMismatch { curve: usize, reference: usize },
}
