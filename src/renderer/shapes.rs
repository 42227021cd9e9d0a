//! Shape generation for 2D primitives, in pixel coordinates

use glam::Vec2;

use super::vertex::{Color, Vertex};
use crate::consts::{NET_DASH, NET_SPACING};
use crate::sim::Fence;

/// Two triangles covering an axis-aligned rectangle, UVs spanning 0..1
pub fn rect(x: f32, y: f32, w: f32, h: f32, color: Color) -> [Vertex; 6] {
    let c = color.to_linear();
    let (x2, y2) = (x + w, y + h);
    [
        Vertex::new(x, y, 0.0, 0.0, c),
        Vertex::new(x, y2, 0.0, 1.0, c),
        Vertex::new(x2, y, 1.0, 0.0, c),
        Vertex::new(x2, y, 1.0, 0.0, c),
        Vertex::new(x, y2, 0.0, 1.0, c),
        Vertex::new(x2, y2, 1.0, 1.0, c),
    ]
}

/// A line segment of the given width, as a quad. Degenerate segments draw nothing.
pub fn line(from: Vec2, to: Vec2, width: f32, color: Color) -> Vec<Vertex> {
    let dir = (to - from).normalize_or_zero();
    if dir == Vec2::ZERO || width <= 0.0 {
        return Vec::new();
    }
    let c = color.to_linear();
    // Perpendicular for width
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);

    let a1 = from + perp;
    let a2 = from - perp;
    let b1 = to + perp;
    let b2 = to - perp;

    vec![
        Vertex::new(a1.x, a1.y, 0.0, 0.0, c),
        Vertex::new(a2.x, a2.y, 0.0, 1.0, c),
        Vertex::new(b1.x, b1.y, 1.0, 0.0, c),
        Vertex::new(b1.x, b1.y, 1.0, 0.0, c),
        Vertex::new(a2.x, a2.y, 0.0, 1.0, c),
        Vertex::new(b2.x, b2.y, 1.0, 1.0, c),
    ]
}

/// Dash endpoints of the center net, top to bottom
pub fn net_dashes(fence: &Fence) -> Vec<(Vec2, Vec2)> {
    let x = fence.center_x() as f32;
    (fence.miny..fence.maxy)
        .step_by(NET_SPACING as usize)
        .map(|y| {
            let end = (y + NET_DASH).min(fence.maxy);
            (Vec2::new(x, y as f32), Vec2::new(x, end as f32))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::vertex::colors;
    use crate::sim::COURT;

    #[test]
    fn test_rect_covers_corners() {
        let verts = rect(10.0, 20.0, 30.0, 40.0, colors::WHITE);
        let xs: Vec<f32> = verts.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = verts.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 10.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 40.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 20.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 60.0);
    }

    #[test]
    fn test_vertical_line_has_width() {
        let verts = line(Vec2::new(400.0, 0.0), Vec2::new(400.0, 5.0), 2.0, colors::WHITE);
        assert_eq!(verts.len(), 6);
        for v in &verts {
            assert!((v.position[0] - 400.0).abs() <= 1.0 + f32::EPSILON);
            assert!(v.position[1] == 0.0 || v.position[1] == 5.0);
        }
    }

    #[test]
    fn test_degenerate_line_is_empty() {
        let p = Vec2::new(3.0, 3.0);
        assert!(line(p, p, 1.0, colors::WHITE).is_empty());
        assert!(line(p, Vec2::ZERO, 0.0, colors::WHITE).is_empty());
    }

    #[test]
    fn test_net_dash_layout() {
        let dashes = net_dashes(&COURT);
        assert_eq!(dashes.len(), 60);
        assert_eq!(dashes[0], (Vec2::new(400.0, 0.0), Vec2::new(400.0, 5.0)));
        assert_eq!(dashes[1], (Vec2::new(400.0, 10.0), Vec2::new(400.0, 15.0)));
        assert_eq!(dashes[59].1, Vec2::new(400.0, 595.0));
    }
}
