//! Sprites: a positioned rectangle drawn from a GPU texture
//!
//! Solid-color sprites share the built-in 1x1 white texture and carry their
//! color as a tint, so they need no GPU upload of their own.

use std::path::Path;

use anyhow::{Context, Result};
use glam::IVec2;

use super::vertex::{Color, colors};
use crate::sim::{Area, Body};

/// Handle to a texture owned by the render state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub(crate) usize);

impl TextureId {
    /// The 1x1 white texture every render state creates first
    pub const WHITE: TextureId = TextureId(0);
}

/// Decoded RGBA8 pixels
#[derive(Debug, Clone)]
pub struct ImageData {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl ImageData {
    pub fn white_pixel() -> Self {
        Self {
            width: 1,
            height: 1,
            rgba: vec![255; 4],
        }
    }

    /// Decode an image file (BMP, PNG)
    pub fn load(path: &Path) -> Result<Self> {
        let img = image::open(path)
            .with_context(|| format!("failed to load image {}", path.display()))?
            .to_rgba8();
        let (width, height) = img.dimensions();
        Ok(Self {
            width,
            height,
            rgba: img.into_raw(),
        })
    }
}

/// A drawable rectangle with a position, size and texture
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    body: Body,
    pub texture: TextureId,
    pub tint: Color,
}

impl Sprite {
    /// Solid-color sprite of `size` at the origin
    pub fn from_color(color: Color, size: IVec2) -> Self {
        Self {
            body: Body {
                pos: IVec2::ZERO,
                size,
            },
            texture: TextureId::WHITE,
            tint: color,
        }
    }

    /// Untinted sprite showing `texture` at the origin
    pub fn from_texture(texture: TextureId, size: IVec2) -> Self {
        Self {
            body: Body {
                pos: IVec2::ZERO,
                size,
            },
            texture,
            tint: colors::WHITE,
        }
    }

    pub fn position(&self) -> IVec2 {
        self.body.pos
    }

    pub fn set_position(&mut self, pos: IVec2) {
        self.body.pos = pos;
    }

    pub fn size(&self) -> IVec2 {
        self.body.size
    }

    /// Bounding box (left, top, right, bottom)
    pub fn area(&self) -> Area {
        self.body.area()
    }
}
