use std::collections::HashMap;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use egui::{ColorImage, Context, TextureHandle, TextureId, TextureOptions};
use thiserror::Error;

use crate::model::ClothingItem;

/// Errors that can occur while turning an image reference into a thumbnail
#[derive(Error, Debug)]
pub enum ThumbnailError {
    #[error("Unsupported image reference: {0}")]
    Unsupported(String),
    #[error("Failed to read image: {0}")]
    Read(#[from] std::io::Error),
    #[error("Invalid base64 in data URI: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
}

/// Decode `bytes` and shrink the result to fit in `max_side` x `max_side`.
pub fn decode_thumbnail(bytes: &[u8], max_side: u32) -> Result<ColorImage, ThumbnailError> {
    let rgba = image::load_from_memory(bytes)?.thumbnail(max_side, max_side).to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}

fn unsupported(source: &str) -> ThumbnailError {
    ThumbnailError::Unsupported(source.chars().take(48).collect())
}

fn read_source(source: &str) -> Result<Vec<u8>, ThumbnailError> {
    if let Some(uri) = source.strip_prefix("data:") {
        return read_data_uri(uri).unwrap_or_else(|| Err(unsupported(source)));
    }
    if source.is_empty() || source.starts_with("http://") || source.starts_with("https://") {
        return Err(unsupported(source));
    }
    read_local(source)
}

/// Payload of a `data:<mime>;base64,<payload>` reference. `None` for data
/// URIs that are not base64 encoded.
fn read_data_uri(uri: &str) -> Option<Result<Vec<u8>, ThumbnailError>> {
    let (meta, payload) = uri.split_once(',')?;
    if !meta.ends_with(";base64") {
        return None;
    }
    Some(BASE64.decode(payload.trim()).map_err(ThumbnailError::from))
}

#[cfg(not(target_arch = "wasm32"))]
fn read_local(path: &str) -> Result<Vec<u8>, ThumbnailError> {
    Ok(std::fs::read(path)?)
}

// The browser build has no file system to read from
#[cfg(target_arch = "wasm32")]
fn read_local(path: &str) -> Result<Vec<u8>, ThumbnailError> {
    Err(ThumbnailError::Unsupported(path.to_owned()))
}

struct CachedThumbnail {
    source: String,
    /// `None` when loading failed; not retried until the reference changes
    texture: Option<TextureHandle>,
}

/// Per-item thumbnail textures, keyed by item id.
pub struct ThumbnailCache {
    entries: HashMap<String, CachedThumbnail>,
    max_side: u32,
}

impl Default for ThumbnailCache {
    fn default() -> Self {
        Self::new(96)
    }
}

impl ThumbnailCache {
    pub fn new(max_side: u32) -> Self {
        Self {
            entries: HashMap::new(),
            max_side,
        }
    }

    /// Texture for `item`'s image, loading it on first use
    pub fn texture_for(&mut self, ctx: &Context, item: &ClothingItem) -> Option<TextureId> {
        if let Some(cached) = self.entries.get(&item.id) {
            if cached.source == item.image {
                return cached.texture.as_ref().map(TextureHandle::id);
            }
        }

        let texture = match read_source(&item.image).and_then(|bytes| decode_thumbnail(&bytes, self.max_side)) {
            Ok(image) => Some(ctx.load_texture(format!("thumb_{}", item.id), image, TextureOptions::LINEAR)),
            Err(ThumbnailError::Unsupported(_)) => None,
            Err(err) => {
                log::warn!("No thumbnail for '{}': {}", item.name, err);
                None
            }
        };
        let id = texture.as_ref().map(TextureHandle::id);
        self.entries.insert(
            item.id.clone(),
            CachedThumbnail {
                source: item.image.clone(),
                texture,
            },
        );
        id
    }

    /// Drop textures of items that no longer exist
    pub fn retain(&mut self, keep: impl Fn(&str) -> bool) {
        self.entries.retain(|id, _| keep(id));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
