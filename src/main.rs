use anyhow::Result;
use app_icon_gen::icon_gen::{self, IconConfig, DEFAULT_OUTPUT};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "app-icon-gen",
    about = "Render the sparkle app icon as a 1024x1024 PNG"
)]
struct Args {
    /// Output PNG file. Its directory must already exist.
    #[clap(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    icon_gen::generate_icon(&IconConfig {
        output: args.output,
        ..IconConfig::default()
    })
}
