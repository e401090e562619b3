//! Sizing and placement for view trees. Deliberately not a flex engine:
//! dropdown trees are columns of fixed-height rows, so measurement is a
//! bottom-up pass and placement is plain stacking.

use crate::node::Node;
use crate::text::display_width;
use crate::types::Border;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn from_size(width: u16, height: u16) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    pub const fn right(&self) -> u16 {
        self.x + self.width
    }

    pub const fn bottom(&self) -> u16 {
        self.y + self.height
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Inset by `amount` cells on every side.
    pub fn shrink(self, amount: u16) -> Self {
        Self {
            x: self.x.saturating_add(amount),
            y: self.y.saturating_add(amount),
            width: self.width.saturating_sub(amount * 2),
            height: self.height.saturating_sub(amount * 2),
        }
    }

    pub fn intersect(self, other: Self) -> Self {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        Self {
            x,
            y,
            width: right.saturating_sub(x),
            height: bottom.saturating_sub(y),
        }
    }
}

/// Intrinsic size of a node in cells, borders included. Buttons pad their
/// label by one cell on each side; checkboxes prefix `[x] `.
pub fn measure<M>(node: &Node<M>) -> (u16, u16) {
    let (width, height) = match node {
        Node::Empty => (0, 0),
        Node::Text { content, .. } => (display_width(content) as u16, 1),
        Node::Button { label, .. } => (display_width(label) as u16 + 2, 1),
        Node::Checkbox { label, .. } => (display_width(label) as u16 + 4, 1),
        Node::Row { children, gap, .. } => {
            let mut width: u16 = 0;
            let mut height: u16 = 0;
            let mut placed: u16 = 0;
            for child in children {
                let (cw, ch) = measure(child);
                if cw == 0 && ch == 0 {
                    continue;
                }
                width = width.saturating_add(cw);
                height = height.max(ch);
                placed += 1;
            }
            if placed > 1 {
                width = width.saturating_add(gap * (placed - 1));
            }
            (width, height)
        }
        Node::Column { children, gap, .. } => {
            let mut width: u16 = 0;
            let mut height: u16 = 0;
            let mut placed: u16 = 0;
            for child in children {
                let (cw, ch) = measure(child);
                if cw == 0 && ch == 0 {
                    continue;
                }
                width = width.max(cw);
                height = height.saturating_add(ch);
                placed += 1;
            }
            if placed > 1 {
                height = height.saturating_add(gap * (placed - 1));
            }
            (width, height)
        }
    };

    if has_border(node) {
        (width.saturating_add(2), height.saturating_add(2))
    } else {
        (width, height)
    }
}

/// Placement rects for a container's children within `area`, parallel to
/// the child list. Columns stretch children to the inner width; rows keep
/// measured widths. Zero-sized children get zero rects and no gap.
pub fn child_areas<M>(node: &Node<M>, area: Rect) -> Vec<Rect> {
    let inner = if has_border(node) {
        area.shrink(1)
    } else {
        area
    };

    match node {
        Node::Row { children, gap, .. } => {
            let mut x = inner.x;
            children
                .iter()
                .map(|child| {
                    let (cw, ch) = measure(child);
                    if cw == 0 && ch == 0 {
                        return Rect::new(x, inner.y, 0, 0);
                    }
                    let rect = Rect::new(x, inner.y, cw, ch).intersect(inner);
                    x = x.saturating_add(cw).saturating_add(*gap);
                    rect
                })
                .collect()
        }
        Node::Column { children, gap, .. } => {
            let mut y = inner.y;
            children
                .iter()
                .map(|child| {
                    let (_, ch) = measure(child);
                    if ch == 0 {
                        return Rect::new(inner.x, y, 0, 0);
                    }
                    let rect = Rect::new(inner.x, y, inner.width, ch).intersect(inner);
                    y = y.saturating_add(ch).saturating_add(*gap);
                    rect
                })
                .collect()
        }
        _ => Vec::new(),
    }
}

fn has_border<M>(node: &Node<M>) -> bool {
    node.style_ref()
        .map(|style| style.border != Border::None)
        .unwrap_or(false)
}
