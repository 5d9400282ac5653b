//! Block pack loading from ZIP files and directories.
//!
//! Expected layout, at the directory or archive root:
//!
//! ```text
//! pack.json            optional manifest: { "name": ..., "description": ... }
//! blocks/*.json        one block descriptor per file
//! textures/            texture files, never opened here
//! ```

use super::{BlockDescriptor, BlockPack};
use crate::error::{BlockPackError, Result};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

const MANIFEST_FILE: &str = "pack.json";

/// Options for pack loading.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Skip descriptors that fail to parse (with a warning) instead of
    /// failing the whole pack.
    pub skip_invalid: bool,
    /// Directory holding descriptor files.
    pub descriptor_dir: String,
    /// Directory holding texture files.
    pub texture_dir: String,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            skip_invalid: true,
            descriptor_dir: "blocks".to_string(),
            texture_dir: "textures".to_string(),
        }
    }
}

impl LoadOptions {
    /// Fail on the first unparsable descriptor.
    pub fn strict(mut self) -> Self {
        self.skip_invalid = false;
        self
    }

    pub fn with_descriptor_dir(mut self, dir: impl Into<String>) -> Self {
        self.descriptor_dir = dir.into();
        self
    }

    pub fn with_texture_dir(mut self, dir: impl Into<String>) -> Self {
        self.texture_dir = dir.into();
        self
    }
}

#[derive(Debug, Default, Deserialize)]
struct PackManifest {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

/// Load a block pack from a file path.
///
/// Supports both ZIP files and directories.
pub fn load_from_path<P: AsRef<Path>>(path: P, options: &LoadOptions) -> Result<BlockPack> {
    let path = path.as_ref();

    if path.is_dir() {
        load_from_directory(path, options)
    } else {
        let data = std::fs::read(path)?;
        let fallback_name = file_stem(path);
        load_from_bytes(&data, &fallback_name, options)
    }
}

/// Load a block pack from ZIP bytes. `fallback_name` names the pack when
/// the archive has no manifest (or its manifest has no name).
pub fn load_from_bytes(data: &[u8], fallback_name: &str, options: &LoadOptions) -> Result<BlockPack> {
    let cursor = std::io::Cursor::new(data);
    let mut archive = zip::ZipArchive::new(cursor)?;

    let mut manifest = PackManifest::default();
    let mut files: Vec<(String, String)> = Vec::new();

    for i in 0..archive.len() {
        let mut file = archive.by_index(i)?;
        if file.is_dir() {
            continue;
        }
        let file_path = file.name().to_string();

        if file_path == MANIFEST_FILE {
            let mut contents = String::new();
            file.read_to_string(&mut contents)?;
            manifest = serde_json::from_str(&contents)?;
        } else if let Some(file_name) = parse_descriptor_path(&file_path, &options.descriptor_dir) {
            let mut contents = String::new();
            file.read_to_string(&mut contents)?;
            files.push((file_name.to_string(), contents));
        }
    }

    let name = manifest.name.clone().unwrap_or_else(|| fallback_name.to_string());
    let texture_directory = format!("{}/{}", name, options.texture_dir);
    build_pack(name, manifest.description, texture_directory, files, options)
}

/// Load a block pack from a directory.
fn load_from_directory(path: &Path, options: &LoadOptions) -> Result<BlockPack> {
    let descriptors_path = path.join(&options.descriptor_dir);
    if !descriptors_path.is_dir() {
        return Err(BlockPackError::InvalidPack(format!(
            "No {} directory found in {}",
            options.descriptor_dir,
            path.display()
        )));
    }

    let manifest_path = path.join(MANIFEST_FILE);
    let manifest: PackManifest = if manifest_path.exists() {
        serde_json::from_str(&std::fs::read_to_string(&manifest_path)?)?
    } else {
        PackManifest::default()
    };

    let files = load_json_files(&descriptors_path)?;

    let name = manifest.name.clone().unwrap_or_else(|| file_stem(path));
    let texture_directory = path
        .join(&options.texture_dir)
        .to_string_lossy()
        .replace('\\', "/");
    build_pack(name, manifest.description, texture_directory, files, options)
}

fn build_pack(
    name: String,
    description: Option<String>,
    texture_directory: String,
    mut files: Vec<(String, String)>,
    options: &LoadOptions,
) -> Result<BlockPack> {
    // Directory and archive iteration order are both arbitrary
    files.sort_by(|a, b| a.0.cmp(&b.0));

    let mut pack = BlockPack::new(name, texture_directory);
    pack.description = description;

    for (file_name, contents) in files {
        match serde_json::from_str::<BlockDescriptor>(&contents) {
            Ok(descriptor) => pack.add_descriptor(descriptor)?,
            Err(e) if options.skip_invalid => {
                log::warn!("Skipping descriptor {} in pack {}: {}", file_name, pack.name, e);
            }
            Err(e) => {
                return Err(BlockPackError::InvalidDescriptor {
                    file: file_name,
                    message: e.to_string(),
                });
            }
        }
    }

    log::info!(
        "Loaded block pack {} ({} descriptors)",
        pack.name,
        pack.descriptor_count()
    );
    Ok(pack)
}

/// Match `<descriptor_dir>/<file>.json` inside an archive.
/// Returns the file name if valid.
fn parse_descriptor_path<'a>(file_path: &'a str, descriptor_dir: &str) -> Option<&'a str> {
    let (dir, file_name) = file_path.split_once('/')?;
    if dir == descriptor_dir && file_name.ends_with(".json") && !file_name.contains('/') {
        Some(file_name)
    } else {
        None
    }
}

/// Load JSON files from a directory.
fn load_json_files(dir: &Path) -> Result<Vec<(String, String)>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() && path.extension().map(|e| e == "json").unwrap_or(false) {
            let file_name = entry.file_name().to_string_lossy().to_string();
            let contents = std::fs::read_to_string(&path)?;
            files.push((file_name, contents));
        }
    }
    Ok(files)
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "pack".to_string())
}
