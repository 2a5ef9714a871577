pub mod app;
pub mod cli;
pub mod color;
pub mod data;
pub mod render;
pub mod ui;

use anyhow::{Context, Result};
use log::{debug, info};

use crate::cli::Args;
use crate::data::model::PlotSeries;
use crate::data::{discover, loader, transform};

/// Run the full pipeline: read, discover, transform, render.
pub fn run(args: Args) -> Result<()> {
    let reference = loader::read_arf(&args.arf)
        .with_context(|| format!("reading reference ARF {}", args.arf.display()))?;

    // In ratio mode the reference's effective area divides every curve,
    // including the reference's own (which then plots as a flat 1.0 line).
    let baseline = args.ratio.then(|| reference.specresp.clone());

    let variants = discover::find_variants(&args.arf, &args.dir, args.n)?;
    info!(
        "found {} mutated ARF(s) in {}",
        variants.len(),
        args.dir.display()
    );

    let view = args.view_options();

    let mut series: Vec<PlotSeries> = Vec::with_capacity(variants.len());
    for path in &variants {
        debug!("reading {}", path.display());
        let curve = loader::read_arf(path)
            .with_context(|| format!("reading mutated ARF {}", path.display()))?;
        series.push(transform::to_series(
            &series_label(path),
            &curve,
            view.x_axis,
            baseline.as_deref(),
        )?);
    }

    let reference_series = transform::to_series(
        &series_label(&args.arf),
        &reference,
        view.x_axis,
        baseline.as_deref(),
    )?;

    match &args.outfile {
        Some(outfile) => {
            info!("saving figure to {}", outfile.display());
            render::save_figure(outfile, &series, &reference_series, &view)
        }
        None => app::show(series, reference_series, view),
    }
}

/// Legend label for a curve: the file name, falling back to the full path.
fn series_label(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
