use clap::Parser;

use arfplot::cli::Args;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    arfplot::run(args)
}
