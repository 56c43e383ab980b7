use crate::buffer::{Buffer, Cell};
use crate::element::{Content, Element};
use crate::layout::{content_rect, LayoutResult, Rect};
use crate::text::{char_width, display_width, tail_to_width, truncate_to_width};
use crate::types::{Rgb, Style, TextStyle};

/// Paint `element` and its descendants into `buf` using positions from `layout`.
/// Children are drawn after their parent, so later siblings end up on top.
pub fn render_to_buffer(element: &Element, layout: &LayoutResult, buf: &mut Buffer) {
    let mut count = 0usize;
    render_element(element, layout, buf, &mut count);
    log::trace!("[render] painted {count} elements");
}

fn render_element(element: &Element, layout: &LayoutResult, buf: &mut Buffer, count: &mut usize) {
    let Some(rect) = layout.get(&element.id).copied() else {
        return;
    };
    if rect.is_empty() {
        return;
    }
    *count += 1;

    let style = element.effective_style();
    fill_background(&style, rect, buf);
    draw_border(&style, rect, buf);

    let inner = content_rect(element, rect);
    match &element.content {
        Content::None => {}
        Content::Text(text) => {
            for (row, line) in text.lines().enumerate() {
                let y = inner.y.saturating_add(row as u16);
                if y >= inner.bottom() {
                    break;
                }
                let line = truncate_to_width(line, inner.width as usize);
                write_str(buf, inner.x, y, inner.right(), &line, &style);
            }
        }
        Content::TextInput {
            value,
            cursor,
            placeholder,
            focused,
        } => render_text_input(buf, inner, &style, value, *cursor, placeholder.as_deref(), *focused),
        Content::Children(children) => {
            for child in children {
                render_element(child, layout, buf, count);
            }
        }
    }
}

fn render_text_input(
    buf: &mut Buffer,
    area: Rect,
    style: &Style,
    value: &str,
    cursor: usize,
    placeholder: Option<&str>,
    focused: bool,
) {
    if area.is_empty() {
        return;
    }

    if value.is_empty() {
        if let Some(placeholder) = placeholder {
            let mut dim = style.clone();
            dim.text_style.dim = true;
            let text = truncate_to_width(placeholder, area.width as usize);
            write_str(buf, area.x, area.y, area.right(), &text, &dim);
        }
    } else {
        // Scroll horizontally so the cursor column stays inside the box.
        let split = value
            .char_indices()
            .nth(cursor)
            .map(|(i, _)| i)
            .unwrap_or(value.len());
        let (before, after) = value.split_at(split);
        let room = (area.width as usize).saturating_sub(1);
        let before = if display_width(before) > room {
            tail_to_width(before, room)
        } else {
            before
        };
        let end = write_str(buf, area.x, area.y, area.right(), before, style);
        write_str(buf, end, area.y, area.right(), after, style);
    }

    if focused {
        let before: String = value.chars().take(cursor).collect();
        let room = area.width.saturating_sub(1) as usize;
        let offset = display_width(&before).min(room) as u16;
        if let Some(cell) = buf.get_mut(area.x + offset, area.y) {
            cell.style.reverse = true;
        }
    }
}

fn fill_background(style: &Style, rect: Rect, buf: &mut Buffer) {
    let Some(bg) = style.background.as_ref().map(|c| c.to_rgb()) else {
        return;
    };
    for y in rect.y..rect.bottom() {
        for x in rect.x..rect.right() {
            if let Some(cell) = buf.get_mut(x, y) {
                *cell = Cell {
                    bg,
                    ..Cell::default()
                };
            }
        }
    }
}

fn draw_border(style: &Style, rect: Rect, buf: &mut Buffer) {
    let Some([tl, tr, bl, br, h, v]) = style.border.glyphs() else {
        return;
    };
    if rect.width < 2 || rect.height < 2 {
        return;
    }

    let right = rect.right() - 1;
    let bottom = rect.bottom() - 1;
    let plain = TextStyle::new();

    for x in rect.x + 1..right {
        put(buf, x, rect.y, h, style, plain);
        put(buf, x, bottom, h, style, plain);
    }
    for y in rect.y + 1..bottom {
        put(buf, rect.x, y, v, style, plain);
        put(buf, right, y, v, style, plain);
    }
    put(buf, rect.x, rect.y, tl, style, plain);
    put(buf, right, rect.y, tr, style, plain);
    put(buf, rect.x, bottom, bl, style, plain);
    put(buf, right, bottom, br, style, plain);
}

/// Write `text` starting at (x, y), stopping before `limit`. Returns the next free column.
fn write_str(buf: &mut Buffer, mut x: u16, y: u16, limit: u16, text: &str, style: &Style) -> u16 {
    for ch in text.chars() {
        let width = char_width(ch) as u16;
        if width == 0 {
            continue;
        }
        if x.saturating_add(width) > limit {
            break;
        }
        put(buf, x, y, ch, style, style.text_style);
        if width == 2 {
            if let Some(cell) = buf.get_mut(x + 1, y) {
                cell.wide_continuation = true;
            }
        }
        x += width;
    }
    x
}

fn put(buf: &mut Buffer, x: u16, y: u16, ch: char, style: &Style, text_style: TextStyle) {
    let fg = style
        .foreground
        .as_ref()
        .map(|c| c.to_rgb())
        .unwrap_or(Rgb::new(255, 255, 255));

    if let Some(cell) = buf.get_mut(x, y) {
        cell.char = ch;
        cell.fg = fg;
        cell.style = text_style;
        cell.wide_continuation = false;
    }
}
