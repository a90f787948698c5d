//! Generate the icons and the ten-slide presentation.
//!
//! ```bash
//! make-deck
//! make-deck --output deck.pptx --icons-dir out/icons
//! ```

use clap::Parser;
use deckmint::deck::{DEFAULT_ICONS_DIR, DEFAULT_OUTPUT, DeckOptions, build_deck};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "make-deck")]
#[command(about = "Generate a ten-slide presentation with rendered icons", long_about = None)]
struct Args {
    /// Directory for the generated icons
    #[arg(long, default_value = DEFAULT_ICONS_DIR)]
    icons_dir: PathBuf,

    /// Presentation file to write
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Font family for icon labels
    #[arg(long, default_value = "Arial")]
    font_family: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let options = DeckOptions::new()
        .with_icons_dir(args.icons_dir)
        .with_output(args.output)
        .with_font_family(args.font_family);

    let output = build_deck(&options)?;
    println!(
        "✅ 10-slide techy, child-friendly PPT created: {}",
        output.display()
    );
    Ok(())
}
