use tracing::info;
use tracing_subscriber::EnvFilter;

use brandprep::{AssetParams, generate_assets};

use super::args::CliArgs;
use super::errors::AppError;

/// Layer explicit flags over the config file (if any) over the defaults.
pub fn resolve_params(args: &CliArgs) -> Result<AssetParams, AppError> {
    let mut params = match &args.config {
        Some(path) => AssetParams::from_json_file(path).map_err(|source| AppError::Config {
            path: path.clone(),
            source,
        })?,
        None => AssetParams::default(),
    };

    if let Some(logo) = &args.logo {
        params.logo_source = logo.clone();
    }
    if let Some(mark) = &args.mark {
        params.mark_source = mark.clone();
    }
    if let Some(outdir) = &args.outdir {
        params.output_dir = outdir.clone();
    }
    if let Some(width) = args.logo_width {
        params.logo_width = width;
    }
    if let Some(size) = args.mark_size {
        params.mark_size = size;
    }
    if let Some(ratio) = args.mark_crop_ratio {
        params.mark_crop_ratio = ratio;
    }
    Ok(params)
}

pub fn run(args: CliArgs) -> Result<(), AppError> {
    if args.log {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let params = resolve_params(&args)?;
    info!("Resolved parameters: {:?}", params);

    let report = generate_assets(&params, args.manifest)?;

    info!("Logo: {} -> {}", report.logo.source, report.logo.output);
    info!("Mark: {} -> {}", report.mark.source, report.mark.output);
    if let Some(path) = &report.manifest {
        info!("Manifest: {:?}", path);
    }
    info!("Brand assets written to {:?}", params.output_dir);
    Ok(())
}
