use log::debug;

use crate::layout::{child_areas, Rect};
use crate::node::Node;

/// Find the message of the deepest interactive node at the given
/// coordinates, using the same placement the painter uses. Returns None
/// if no interactive node contains the point.
pub fn hit<M: Clone>(node: &Node<M>, area: Rect, x: u16, y: u16) -> Option<M> {
    if area.is_empty() || !area.contains(x, y) {
        return None;
    }

    // Children in reverse order, last painted is on top
    let areas = child_areas(node, area);
    for (child, rect) in node.children().iter().zip(areas).rev() {
        if let Some(message) = hit(child, rect, x, y) {
            return Some(message);
        }
    }

    if node.is_interactive() {
        debug!("[hit] activated node at ({x}, {y})");
        node.message().cloned()
    } else {
        None
    }
}
