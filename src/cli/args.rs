use clap::Parser;
use std::path::PathBuf;

/// Flags left unset fall back to `--config`, then to the built-in defaults.
#[derive(Parser, Debug, Default)]
#[command(
    name = "brandprep",
    version,
    about = "Generate the brand logo and nav mark for public/assets"
)]
pub struct CliArgs {
    /// Path to the full logo source [default: /home/joao/Downloads/solidus_logo.png]
    #[arg(long)]
    pub logo: Option<PathBuf>,

    /// Path to the small mark source [default: /home/joao/Downloads/solidus_small_logo.png]
    #[arg(long)]
    pub mark: Option<PathBuf>,

    /// Output directory, created if missing [default: public/assets]
    #[arg(long)]
    pub outdir: Option<PathBuf>,

    /// Target logo width in pixels [default: 720]
    #[arg(long)]
    pub logo_width: Option<u32>,

    /// Side of the square mark in pixels [default: 64]
    #[arg(long)]
    pub mark_size: Option<u32>,

    /// Crop ratio relative to min(image side) for the nav mark [default: 0.72]
    #[arg(long)]
    pub mark_crop_ratio: Option<f64>,

    /// JSON file with any of: logo_source, mark_source, output_dir,
    /// logo_width, mark_size, mark_crop_ratio
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Also write brand-assets.json describing the generated files
    #[arg(long, default_value_t = false)]
    pub manifest: bool,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
