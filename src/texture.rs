use std::path::Path;

use anyhow::{Context, Result};
use log::{info, warn};

/// Decoded RGBA8 image ready for upload.
#[derive(Clone, Debug, PartialEq)]
pub struct TexturePixels {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
    pub is_fallback: bool,
}

impl TexturePixels {
    /// Single white texel: sampling it leaves the material color untouched.
    pub fn fallback() -> Self {
        Self {
            width: 1,
            height: 1,
            rgba: vec![255, 255, 255, 255],
            is_fallback: true,
        }
    }
}

pub fn load_texture(path: impl AsRef<Path>) -> Result<TexturePixels> {
    let path = path.as_ref();
    let image = image::open(path)
        .with_context(|| format!("Failed to load texture: {:?}", path))?
        .into_rgba8();
    let (width, height) = image.dimensions();

    Ok(TexturePixels {
        width,
        height,
        rgba: image.into_raw(),
        is_fallback: false,
    })
}

/// Loads the floor texture, falling back to an untextured floor when the
/// file is missing or unreadable.
pub fn load_floor_texture(path: Option<&Path>) -> TexturePixels {
    let Some(path) = path else {
        info!("Floor texture disabled");
        return TexturePixels::fallback();
    };

    match load_texture(path) {
        Ok(texture) => {
            info!("Floor texture loaded: {:?} ({}x{})", path, texture.width, texture.height);
            texture
        }
        Err(e) => {
            warn!("{:#}; rendering the floor untextured", e);
            TexturePixels::fallback()
        }
    }
}
