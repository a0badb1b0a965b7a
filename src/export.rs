use crate::resolve::PositionMap;
use crate::tree::MoveTree;
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// One resolved node. `children` lists the tokens that both follow this one
/// in the move tree and resolved to a position, in source order, so a
/// gallery renderer can lay siblings out as the move list wrote them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub token: String,
    pub fen: String,
    pub children: Vec<String>,
}

/// Hand-off artifact for external image/gallery collaborators, entries in
/// discovery order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Manifest {
    pub entries: Vec<ManifestEntry>,
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("manifest serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn build_manifest(tree: &MoveTree, positions: &PositionMap) -> Manifest {
    let entries = positions
        .iter()
        .map(|(token, fen)| ManifestEntry {
            token: token.to_string(),
            fen: fen.to_string(),
            children: tree
                .children(token)
                .iter()
                .filter(|child| positions.contains(child))
                .cloned()
                .collect(),
        })
        .collect();
    Manifest { entries }
}

/// File stem for a token: tokens keep their input spelling (an annotated
/// `d4!?` still classifies as `d4`), so characters that are not portable in
/// file names are replaced with `_`.
fn file_stem(token: &str) -> String {
    token
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '=' | '+' | '#' | '!') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Write one `<token>.fen` file per entry plus `manifest.json` into `dir`,
/// creating the directory if needed.
pub fn write_outputs(dir: &Path, manifest: &Manifest) -> Result<(), ExportError> {
    if dir.exists() {
        info!("directory '{}' already exists", dir.display());
    } else {
        fs::create_dir_all(dir)?;
        info!("directory '{}' created", dir.display());
    }
    for entry in &manifest.entries {
        fs::write(
            dir.join(format!("{}.fen", file_stem(&entry.token))),
            format!("{}\n", entry.fen),
        )?;
    }
    let json = serde_json::to_string_pretty(manifest)?;
    fs::write(dir.join("manifest.json"), json)?;
    Ok(())
}
