//! Texture handle registration.
//!
//! The host owns textures; this crate only hands it names. An
//! [`IconRegistry`] turns an icon name plus its texture location into an
//! opaque handle the renderer understands.

use serde::Serialize;
use std::collections::HashMap;

/// Opaque handle returned by a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TextureHandle(pub u32);

/// Registers icons with the host's texture system.
pub trait IconRegistry {
    /// Register `texture` from `pack_directory` under `name`.
    fn register_icon(&mut self, name: &str, pack_directory: &str, texture: &str) -> TextureHandle;
}

/// A registered icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisteredIcon {
    pub name: String,
    /// Texture file location, `<pack directory>/<texture>.png`.
    pub location: String,
}

/// Registry that keeps icons in memory. Registering a name twice returns
/// the first handle.
#[derive(Debug, Default, Clone)]
pub struct InMemoryIconRegistry {
    icons: Vec<RegisteredIcon>,
    by_name: HashMap<String, TextureHandle>,
}

impl InMemoryIconRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, handle: TextureHandle) -> Option<&RegisteredIcon> {
        self.icons.get(handle.0 as usize)
    }

    pub fn handle_of(&self, name: &str) -> Option<TextureHandle> {
        self.by_name.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    pub fn icons(&self) -> &[RegisteredIcon] {
        &self.icons
    }
}

impl IconRegistry for InMemoryIconRegistry {
    fn register_icon(&mut self, name: &str, pack_directory: &str, texture: &str) -> TextureHandle {
        if let Some(handle) = self.by_name.get(name) {
            return *handle;
        }

        let handle = TextureHandle(self.icons.len() as u32);
        let location = format!("{}/{}.png", pack_directory.trim_end_matches('/'), texture);
        self.icons.push(RegisteredIcon {
            name: name.to_string(),
            location,
        });
        self.by_name.insert(name.to_string(), handle);
        handle
    }
}
