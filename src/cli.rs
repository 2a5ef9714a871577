use std::path::PathBuf;

use clap::Parser;

use crate::data::model::{ViewOptions, XAxis};

/// Plot an ARF and its mutated variants.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Save the plot to the named file instead of opening a viewer
    #[arg(short, long)]
    pub outfile: Option<PathBuf>,

    /// Plot title
    #[arg(short, long, default_value = "Simulated ARFs")]
    pub title: String,

    /// Maximum number of mutated ARFs to plot
    #[arg(short)]
    pub n: Option<usize>,

    /// Plot against wavelength instead of energy
    #[arg(short, long)]
    pub wav: bool,

    /// Plot ratios to the reference ARF
    #[arg(short, long)]
    pub ratio: bool,

    /// Logarithmic X axis
    #[arg(long)]
    pub xlog: bool,

    /// Logarithmic Y axis
    #[arg(long)]
    pub ylog: bool,

    /// Lower X limit
    #[arg(long)]
    pub xmin: Option<f64>,

    /// Upper X limit
    #[arg(long)]
    pub xmax: Option<f64>,

    /// Lower Y limit
    #[arg(long)]
    pub ymin: Option<f64>,

    /// Upper Y limit
    #[arg(long)]
    pub ymax: Option<f64>,

    /// Line width
    #[arg(long)]
    pub lw: Option<f64>,

    /// Font size
    #[arg(long)]
    pub fs: Option<f64>,

    /// Reference ARF file
    pub arf: PathBuf,

    /// Directory containing mutated ARFs
    pub dir: PathBuf,
}

impl Args {
    /// Collect the presentation flags into the value threaded through both
    /// renderers.
    pub fn view_options(&self) -> ViewOptions {
        ViewOptions {
            title: self.title.clone(),
            x_axis: if self.wav {
                XAxis::Wavelength
            } else {
                XAxis::Energy
            },
            ratio: self.ratio,
            xlog: self.xlog,
            ylog: self.ylog,
            xmin: self.xmin,
            xmax: self.xmax,
            ymin: self.ymin,
            ymax: self.ymax,
            line_width: self.lw,
            font_size: self.fs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positionals_and_defaults() {
        let args = Args::parse_from(["arfplot", "ref.arf", "mutated"]);
        assert_eq!(args.arf, PathBuf::from("ref.arf"));
        assert_eq!(args.dir, PathBuf::from("mutated"));
        assert_eq!(args.title, "Simulated ARFs");
        assert!(args.outfile.is_none());
        assert!(!args.wav);
        assert!(!args.ratio);
        assert!(args.n.is_none());
    }

    #[test]
    fn parses_flags() {
        let args = Args::parse_from([
            "arfplot", "-o", "out.png", "-n", "5", "-w", "-r", "--xlog", "--ymax", "1.5",
            "--lw", "2.0", "ref.arf", "mutated",
        ]);
        assert_eq!(args.outfile, Some(PathBuf::from("out.png")));
        assert_eq!(args.n, Some(5));
        assert!(args.wav);
        assert!(args.ratio);
        assert!(args.xlog);
        assert!(!args.ylog);
        assert_eq!(args.ymax, Some(1.5));
        assert_eq!(args.lw, Some(2.0));

        let view = args.view_options();
        assert_eq!(view.x_axis, XAxis::Wavelength);
        assert!(view.ratio);
    }
}
