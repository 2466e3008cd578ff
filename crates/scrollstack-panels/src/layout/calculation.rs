//! Layout calculation: stacking items along the main axis.

use scrollstack_common::{Axis, EdgeInsets, Rect, Size};

use super::{ItemFrame, LayoutEngine, LayoutItem, StackLayout};

impl LayoutEngine {
    pub fn compute(&self, items: &[LayoutItem], viewport: Size) -> StackLayout {
        let border = self.border_width.max(0.0);
        let cross_extent = (viewport.cross(self.axis) - 2.0 * border).max(0.0);

        let mut frames = Vec::with_capacity(items.len());
        let mut cursor = border;
        let mut placed_visible = false;

        for item in items {
            // Hidden items keep their slot in the list but take no space.
            let extent = if item.hidden {
                0.0
            } else {
                if placed_visible {
                    cursor += self.spacing;
                }
                placed_visible = true;
                let padding = item.insets.map_or(0.0, |i| main_padding(i, self.axis));
                (item.size.main(self.axis) + padding).max(0.0)
            };

            let outer = along(self.axis, cursor, border, extent, cross_extent);
            let inner = match item.insets {
                Some(insets) => outer.inset_by(insets),
                None => outer,
            };
            frames.push(ItemFrame {
                panel: item.panel,
                outer,
                inner,
            });
            cursor += extent;
        }

        let content_main = cursor + border;
        let content_size = match self.axis {
            Axis::Vertical => Size::new(viewport.width, content_main),
            Axis::Horizontal => Size::new(content_main, viewport.height),
        };

        StackLayout {
            frames,
            content_size,
        }
    }
}

fn main_padding(insets: EdgeInsets, axis: Axis) -> f64 {
    match axis {
        Axis::Vertical => insets.vertical(),
        Axis::Horizontal => insets.horizontal(),
    }
}

/// Build a rect from main/cross coordinates.
fn along(axis: Axis, main: f64, cross: f64, main_len: f64, cross_len: f64) -> Rect {
    match axis {
        Axis::Vertical => Rect {
            x: cross,
            y: main,
            width: cross_len,
            height: main_len,
        },
        Axis::Horizontal => Rect {
            x: main,
            y: cross,
            width: main_len,
            height: cross_len,
        },
    }
}
