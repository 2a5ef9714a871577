/// Data layer: core types, FITS loading, discovery, and series transforms.
///
/// Architecture:
/// ```text
///  reference .arf          <dir>/<stem>_<digit>*.*
///        │                          │
///        ▼                          ▼
///   ┌──────────┐              ┌──────────┐
///   │  loader   │◄────────────│ discover  │  stem glob → sorted paths
///   └──────────┘              └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ ArfCurve  │  energy midpoints + SPECRESP
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ transform │  wavelength / ratio → PlotSeries
///   └──────────┘
/// ```
pub mod discover;
pub mod loader;
pub mod model;
pub mod transform;
