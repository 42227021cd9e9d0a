//! CPU-side frame description
//!
//! A `Frame` collects everything drawn this frame as vertex batches, one per
//! run of draws that share a texture. The pipeline uploads it in one go.

use glam::Vec2;

use super::shapes;
use super::sprite::{Sprite, TextureId};
use super::vertex::{Color, Vertex, colors};

/// A run of vertices sharing one texture
#[derive(Debug, Clone, PartialEq)]
pub struct Batch {
    pub texture: TextureId,
    pub vertices: Vec<Vertex>,
}

/// Everything to draw this frame, in painter's order
#[derive(Debug, Clone)]
pub struct Frame {
    pub clear: Color,
    pub batches: Vec<Batch>,
}

impl Default for Frame {
    fn default() -> Self {
        Self {
            clear: colors::BLACK,
            batches: Vec::new(),
        }
    }
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill the whole surface. Anything drawn before is covered, so it is dropped.
    pub fn fill(&mut self, color: Color) {
        self.clear = color;
        self.batches.clear();
    }

    /// Draw a line segment of `width` pixels
    pub fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color, width: f32) {
        let verts = shapes::line(from, to, width, color);
        self.push(TextureId::WHITE, &verts);
    }

    /// Blit a sprite at its current position
    pub fn blit(&mut self, sprite: &Sprite) {
        let pos = sprite.position().as_vec2();
        let size = sprite.size().as_vec2();
        let verts = shapes::rect(pos.x, pos.y, size.x, size.y, sprite.tint);
        self.push(sprite.texture, &verts);
    }

    pub fn vertex_count(&self) -> usize {
        self.batches.iter().map(|b| b.vertices.len()).sum()
    }

    fn push(&mut self, texture: TextureId, verts: &[Vertex]) {
        if verts.is_empty() {
            return;
        }
        match self.batches.last_mut() {
            Some(batch) if batch.texture == texture => batch.vertices.extend_from_slice(verts),
            _ => self.batches.push(Batch {
                texture,
                vertices: verts.to_vec(),
            }),
        }
    }
}
