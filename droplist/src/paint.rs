//! Paints a view tree into a cell buffer: background fill, then border,
//! then content, then children. Out-of-area writes are dropped by the
//! buffer, so painting never panics on small areas.

use log::trace;

use crate::buffer::Buffer;
use crate::layout::{child_areas, Rect};
use crate::node::Node;
use crate::text::char_width;
use crate::types::{Border, Color, Rgb, Style, TextStyle};

pub fn paint<M>(node: &Node<M>, area: Rect, buf: &mut Buffer) {
    if node.is_empty() || area.is_empty() {
        return;
    }

    if let Some(style) = node.style_ref() {
        if let Some(background) = &style.background {
            fill_background(buf, area, background.to_rgb());
        }
        if style.border != Border::None {
            paint_border(buf, area, style);
        }
    }

    match node {
        Node::Empty => {}
        Node::Text { content, style } => {
            let inner = content_area(area, style);
            draw_text(buf, inner, content, style);
        }
        Node::Button { label, style, .. } => {
            let inner = content_area(area, style);
            trace!("[paint] button {:?} at {:?}", label, inner);
            // One cell of padding between label and border
            let padded = Rect::new(
                inner.x.saturating_add(1),
                inner.y,
                inner.width.saturating_sub(2),
                inner.height,
            );
            draw_text(buf, padded, label, style);
        }
        Node::Checkbox {
            label,
            checked,
            style,
            ..
        } => {
            let inner = content_area(area, style);
            let mark = if *checked { 'x' } else { ' ' };
            let row = format!("[{mark}] {label}");
            draw_text(buf, inner, &row, style);
        }
        Node::Row { children, .. } | Node::Column { children, .. } => {
            for (child, rect) in children.iter().zip(child_areas(node, area)) {
                paint(child, rect, buf);
            }
        }
    }
}

fn content_area(area: Rect, style: &Style) -> Rect {
    if style.border == Border::None {
        area
    } else {
        area.shrink(1)
    }
}

fn fill_background(buf: &mut Buffer, area: Rect, bg: Rgb) {
    for y in area.y..area.bottom() {
        for x in area.x..area.right() {
            if let Some(cell) = buf.get_mut(x, y) {
                cell.char = ' ';
                cell.bg = bg;
            }
        }
    }
}

fn paint_border(buf: &mut Buffer, area: Rect, style: &Style) {
    if area.width < 2 || area.height < 2 {
        return;
    }

    let (tl, tr, bl, br, h, v) = match style.border {
        Border::None => return,
        Border::Single => ('┌', '┐', '└', '┘', '─', '│'),
        Border::Rounded => ('╭', '╮', '╰', '╯', '─', '│'),
    };

    let fg = style
        .border_color
        .as_ref()
        .or(style.foreground.as_ref())
        .map(Color::to_rgb)
        .unwrap_or_default();
    let bg = style.background.as_ref().map(Color::to_rgb);

    let top = area.y;
    let bottom = area.bottom() - 1;
    let left = area.x;
    let right = area.right() - 1;

    put(buf, left, top, tl, fg, bg);
    put(buf, right, top, tr, fg, bg);
    put(buf, left, bottom, bl, fg, bg);
    put(buf, right, bottom, br, fg, bg);
    for x in left + 1..right {
        put(buf, x, top, h, fg, bg);
        put(buf, x, bottom, h, fg, bg);
    }
    for y in top + 1..bottom {
        put(buf, left, y, v, fg, bg);
        put(buf, right, y, v, fg, bg);
    }
}

fn draw_text(buf: &mut Buffer, area: Rect, text: &str, style: &Style) {
    if area.is_empty() {
        return;
    }

    let fg = style
        .foreground
        .as_ref()
        .map(Color::to_rgb)
        .unwrap_or_default();
    let bg = style.background.as_ref().map(Color::to_rgb);

    let mut x = area.x;
    for ch in text.chars() {
        let width = char_width(ch) as u16;
        if width == 0 {
            continue;
        }
        if x + width > area.right() {
            break;
        }
        put_styled(buf, x, area.y, ch, fg, bg, style.text_style);
        x += width;
    }
}

fn put(buf: &mut Buffer, x: u16, y: u16, ch: char, fg: Rgb, bg: Option<Rgb>) {
    put_styled(buf, x, y, ch, fg, bg, TextStyle::new());
}

fn put_styled(
    buf: &mut Buffer,
    x: u16,
    y: u16,
    ch: char,
    fg: Rgb,
    bg: Option<Rgb>,
    text_style: TextStyle,
) {
    if let Some(cell) = buf.get_mut(x, y) {
        cell.char = ch;
        cell.fg = fg;
        cell.style = text_style;
        if let Some(bg) = bg {
            cell.bg = bg;
        }
    }
}
