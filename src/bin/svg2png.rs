//! Fetch a remote SVG and rasterize it to PNG.
//!
//! ```bash
//! svg2png
//! svg2png --url https://example.org/logo.svg --output logo.png
//! ```

use clap::Parser;
use deckmint::raster::{DEFAULT_OUTPUT, DEFAULT_URL, RasterOptions, convert_url_to_png};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "svg2png")]
#[command(about = "Convert a remote SVG to PNG", long_about = None)]
struct Args {
    /// SVG to download
    #[arg(long, default_value = DEFAULT_URL)]
    url: String,

    /// PNG file to write
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let options = RasterOptions::new().with_url(args.url).with_output(args.output);
    convert_url_to_png(&options.url, &options.output)?;

    println!("SVG converted to PNG successfully!");
    Ok(())
}
