//! Quad vertex form of a render cache, for GPU rasterizers.

use super::{DrawPrimitive, RenderCache, Rect};

/// Flag bit: the quad carries a meaningful clip rect.
pub const FLAG_CLIPPED: u32 = 0x1;

/// Vertex format for textured quads.
///
/// Each quad is 4 vertices. Interleaved layout so a rasterizer can upload
/// `bytemuck::cast_slice(&batch.vertices)` as one buffer.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct QuadVertex {
    /// Position in pixels from the top-left of the target surface.
    pub position: [f32; 2],
    /// Texture coordinates over the whole source image (0.0-1.0).
    pub tex_coords: [f32; 2],
    /// Vertex tint (RGBA, straight alpha).
    pub color: [f32; 4],
    /// Clip rect as x, y, width, height; ignored unless `FLAG_CLIPPED` is set.
    pub clip_rect: [f32; 4],
    pub flags: u32,
}

/// Vertices of the batch that sample one source image.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureRequest {
    /// Image name as referenced by the look.
    pub image: String,
    /// Starting vertex index (4 vertices per quad).
    pub vertex_start: u32,
    pub vertex_count: u32,
}

/// Batched quads built from one or more render caches.
#[derive(Debug, Default, Clone)]
pub struct QuadBatch {
    pub vertices: Vec<QuadVertex>,
    /// 6 indices per quad: 2 triangles.
    pub indices: Vec<u32>,
    pub texture_requests: Vec<TextureRequest>,
}

impl QuadBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(quad_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(quad_count * 4),
            indices: Vec::with_capacity(quad_count * 6),
            texture_requests: Vec::with_capacity(quad_count),
        }
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
        self.texture_requests.clear();
    }

    pub fn quad_count(&self) -> usize {
        self.indices.len() / 6
    }

    /// Append one image quad.
    pub fn push_image(&mut self, image: &str, bounds: Rect, color: [f32; 4], clip: Option<Rect>) {
        let base_index = self.vertices.len() as u32;

        // Four corners: top-left, top-right, bottom-right, bottom-left
        let positions = [
            [bounds.x, bounds.y],
            [bounds.right(), bounds.y],
            [bounds.right(), bounds.bottom()],
            [bounds.x, bounds.bottom()],
        ];
        let tex_coords = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
        let (clip_rect, flags) = match clip {
            Some(c) => ([c.x, c.y, c.width, c.height], FLAG_CLIPPED),
            None => ([0.0; 4], 0),
        };

        for i in 0..4 {
            self.vertices.push(QuadVertex {
                position: positions[i],
                tex_coords: tex_coords[i],
                color,
                clip_rect,
                flags,
            });
        }

        // Two triangles: TL-TR-BR and TL-BR-BL
        self.indices.extend_from_slice(&[
            base_index,
            base_index + 1,
            base_index + 2,
            base_index,
            base_index + 2,
            base_index + 3,
        ]);

        // Consecutive quads on the same image share one request.
        match self.texture_requests.last_mut() {
            Some(last) if last.image == image && last.vertex_start + last.vertex_count == base_index => {
                last.vertex_count += 4;
            }
            _ => self.texture_requests.push(TextureRequest {
                image: image.to_string(),
                vertex_start: base_index,
                vertex_count: 4,
            }),
        }
    }

    /// Append every image primitive of `cache`, in draw order.
    pub fn extend_from_cache(&mut self, cache: &RenderCache) {
        for primitive in cache {
            if let DrawPrimitive::Image(p) = primitive {
                if p.dest.is_empty() {
                    continue;
                }
                self.push_image(&p.image, p.dest, p.color.to_array(), p.clip);
            }
        }
    }
}

impl RenderCache {
    /// Vertex form of the image primitives. Text is left to the font collaborator.
    pub fn to_quad_batch(&self) -> QuadBatch {
        let mut batch = QuadBatch::with_capacity(self.len());
        batch.extend_from_cache(self);
        batch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Color;

    #[test]
    fn test_batch_merges_runs_of_same_image() {
        let mut cache = RenderCache::new();
        cache.push_image("a", Rect::new(0.0, 0.0, 10.0, 10.0), Color::WHITE, None);
        cache.push_image("a", Rect::new(10.0, 0.0, 10.0, 10.0), Color::WHITE, None);
        cache.push_image("b", Rect::new(0.0, 10.0, 10.0, 10.0), Color::WHITE, None);
        cache.push_text("label", Rect::new(0.0, 0.0, 30.0, 12.0), Color::WHITE, None);

        let batch = cache.to_quad_batch();
        assert_eq!(batch.quad_count(), 3);
        assert_eq!(batch.vertices.len(), 12);
        assert_eq!(batch.texture_requests.len(), 2);
        assert_eq!(batch.texture_requests[0].vertex_count, 8);
        assert_eq!(batch.texture_requests[1].image, "b");
    }

    #[test]
    fn test_batch_skips_empty_destinations() {
        let mut cache = RenderCache::new();
        cache.push_image("a", Rect::ZERO, Color::WHITE, None);
        assert_eq!(cache.to_quad_batch().quad_count(), 0);
    }

    #[test]
    fn test_vertices_cast_to_bytes() {
        let mut batch = QuadBatch::new();
        batch.push_image("a", Rect::new(1.0, 2.0, 3.0, 4.0), [1.0; 4], Some(Rect::new(0.0, 0.0, 2.0, 2.0)));
        let bytes: &[u8] = bytemuck::cast_slice(&batch.vertices);
        assert_eq!(bytes.len(), 4 * std::mem::size_of::<QuadVertex>());
        assert_eq!(batch.vertices[2].position, [4.0, 6.0]);
        assert_eq!(batch.vertices[0].flags, FLAG_CLIPPED);
    }
}
