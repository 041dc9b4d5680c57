//! JSON sidecar describing one generation run.
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::params::AssetParams;
use crate::error::Result;
use crate::types::GeneratedAsset;

pub const MANIFEST_FILE_NAME: &str = "brand-assets.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub generated_at: String,
    pub params: AssetParams,
    pub assets: Vec<GeneratedAsset>,
}

impl Manifest {
    pub fn new(params: &AssetParams, assets: Vec<GeneratedAsset>) -> Self {
        Self {
            generated_at: chrono::Utc::now().to_rfc3339(),
            params: params.clone(),
            assets,
        }
    }
}

/// Write `manifest` as pretty JSON into `output_dir`, returning the file path.
pub fn write_manifest(output_dir: &Path, manifest: &Manifest) -> Result<PathBuf> {
    let path = output_dir.join(MANIFEST_FILE_NAME);
    let json = serde_json::to_string_pretty(manifest)?;
    fs::write(&path, json)?;
    info!("Manifest written: {:?}", path);
    Ok(path)
}
