use scrollstack_common::{PanelId, Size};

/// A panel as the embedding application describes it to a host: its handle,
/// a display title and the size its content asks for.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub id: PanelId,
    pub title: String,
    pub size: Size,
}

impl Panel {
    pub fn new(id: PanelId, title: impl Into<String>, size: Size) -> Self {
        Self {
            id,
            title: title.into(),
            size,
        }
    }

    /// A panel of fixed `height` that stretches across a vertical stack.
    pub fn with_height(id: PanelId, title: impl Into<String>, height: f64) -> Self {
        Self::new(id, title, Size::new(0.0, height))
    }

    /// A panel of fixed `width` that stretches across a horizontal stack.
    pub fn with_width(id: PanelId, title: impl Into<String>, width: f64) -> Self {
        Self::new(id, title, Size::new(width, 0.0))
    }
}
