use super::{Color, Rect};

/// An image draw: source image name, destination and tint.
#[derive(Debug, Clone, PartialEq)]
pub struct ImagePrimitive {
    pub image: String,
    pub dest: Rect,
    pub color: Color,
    /// Clip rect, set when the originating state imagery is clipped.
    pub clip: Option<Rect>,
}

/// A text run placed by a widget behavior (list items, captions).
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub dest: Rect,
    pub color: Color,
    pub clip: Option<Rect>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawPrimitive {
    Image(ImagePrimitive),
    Text(TextPrimitive),
}

impl DrawPrimitive {
    pub fn dest(&self) -> Rect {
        match self {
            Self::Image(p) => p.dest,
            Self::Text(p) => p.dest,
        }
    }

    pub fn as_image(&self) -> Option<&ImagePrimitive> {
        match self {
            Self::Image(p) => Some(p),
            Self::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&TextPrimitive> {
        match self {
            Self::Text(p) => Some(p),
            Self::Image(_) => None,
        }
    }
}

/// Ordered list of draw primitives for one widget; index order is draw order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderCache {
    primitives: Vec<DrawPrimitive>,
}

impl RenderCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.primitives.clear();
    }

    pub fn push(&mut self, primitive: DrawPrimitive) {
        self.primitives.push(primitive);
    }

    pub fn push_image(&mut self, image: impl Into<String>, dest: Rect, color: Color, clip: Option<Rect>) {
        self.primitives.push(DrawPrimitive::Image(ImagePrimitive {
            image: image.into(),
            dest,
            color,
            clip,
        }));
    }

    pub fn push_text(&mut self, text: impl Into<String>, dest: Rect, color: Color, clip: Option<Rect>) {
        self.primitives.push(DrawPrimitive::Text(TextPrimitive {
            text: text.into(),
            dest,
            color,
            clip,
        }));
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn primitives(&self) -> &[DrawPrimitive] {
        &self.primitives
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DrawPrimitive> {
        self.primitives.iter()
    }

    pub fn images(&self) -> impl Iterator<Item = &ImagePrimitive> {
        self.primitives.iter().filter_map(DrawPrimitive::as_image)
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.primitives.iter().filter_map(DrawPrimitive::as_text)
    }
}

impl<'a> IntoIterator for &'a RenderCache {
    type Item = &'a DrawPrimitive;
    type IntoIter = std::slice::Iter<'a, DrawPrimitive>;

    fn into_iter(self) -> Self::IntoIter {
        self.primitives.iter()
    }
}
