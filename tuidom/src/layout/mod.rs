mod rect;

use std::collections::HashMap;

pub use rect::Rect;

use crate::element::{Content, Element};
use crate::text::display_width;
use crate::types::{Direction, Size};

pub type LayoutResult = HashMap<String, Rect>;

/// Lay out `element` inside `available`, returning the rect of every element by id.
pub fn layout(element: &Element, available: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();

    let (intrinsic_w, intrinsic_h) = intrinsic_size(element);
    let width = resolve(element.width, intrinsic_w, available.width);
    let height = resolve(element.height, intrinsic_h, available.height);

    layout_element(
        element,
        Rect::new(available.x, available.y, width, height),
        &mut result,
    );
    result
}

/// Area left for content once border and padding are taken out.
pub fn content_rect(element: &Element, rect: Rect) -> Rect {
    let border = element.style.border.thickness();
    let padding = element.padding;
    rect.shrink(
        border + padding.top,
        border + padding.right,
        border + padding.bottom,
        border + padding.left,
    )
}

/// Size an element wants when nothing constrains it.
pub fn intrinsic_size(element: &Element) -> (u16, u16) {
    let (content_w, content_h) = match &element.content {
        Content::None => (0, 0),
        Content::Text(text) => {
            let width = text.lines().map(display_width).max().unwrap_or(0);
            let height = text.lines().count().max(1);
            (clamp_u16(width), clamp_u16(height))
        }
        Content::TextInput {
            value, placeholder, ..
        } => {
            let placeholder_w = placeholder.as_deref().map(display_width).unwrap_or(0);
            // One extra column so the cursor has room after the last character.
            let width = display_width(value).max(placeholder_w) + 1;
            (clamp_u16(width), 1)
        }
        Content::Children(children) => {
            let gaps = element
                .gap
                .saturating_mul(children.len().saturating_sub(1) as u16);
            let mut main: u16 = 0;
            let mut cross: u16 = 0;
            for child in children {
                let (w, h) = outer_size(child);
                let (child_main, child_cross) = match element.direction {
                    Direction::Column => (h, w),
                    Direction::Row => (w, h),
                };
                main = main.saturating_add(child_main);
                cross = cross.max(child_cross);
            }
            main = main.saturating_add(gaps);
            match element.direction {
                Direction::Column => (cross, main),
                Direction::Row => (main, cross),
            }
        }
    };

    let border = element.style.border.thickness() * 2;
    (
        content_w
            .saturating_add(element.padding.horizontal_total())
            .saturating_add(border),
        content_h
            .saturating_add(element.padding.vertical_total())
            .saturating_add(border),
    )
}

fn outer_size(element: &Element) -> (u16, u16) {
    let (w, h) = intrinsic_size(element);
    let w = match element.width {
        Size::Fixed(n) => n,
        Size::Fill | Size::Auto => w,
    };
    let h = match element.height {
        Size::Fixed(n) => n,
        Size::Fill | Size::Auto => h,
    };
    (w, h)
}

fn resolve(size: Size, intrinsic: u16, available: u16) -> u16 {
    match size {
        Size::Fixed(n) => n.min(available),
        Size::Fill => available,
        Size::Auto => intrinsic.min(available),
    }
}

fn layout_element(element: &Element, rect: Rect, result: &mut LayoutResult) {
    result.insert(element.id.clone(), rect);

    let Content::Children(children) = &element.content else {
        return;
    };
    if children.is_empty() {
        return;
    }

    let inner = content_rect(element, rect);
    let (main_avail, cross_avail) = match element.direction {
        Direction::Column => (inner.height, inner.width),
        Direction::Row => (inner.width, inner.height),
    };

    // First pass: sizes on the main axis for everything that isn't Fill.
    let mut sizes = Vec::with_capacity(children.len());
    let mut used: u16 = element
        .gap
        .saturating_mul(children.len().saturating_sub(1) as u16);
    let mut fill_count: u16 = 0;

    for child in children {
        let (w, h) = intrinsic_size(child);
        let (main_size, cross_size, intrinsic_main, intrinsic_cross) = match element.direction {
            Direction::Column => (child.height, child.width, h, w),
            Direction::Row => (child.width, child.height, w, h),
        };

        let main = match main_size {
            Size::Fixed(n) => n,
            Size::Auto => intrinsic_main,
            Size::Fill => {
                fill_count += 1;
                0
            }
        };
        used = used.saturating_add(main);

        let cross = resolve(cross_size, intrinsic_cross, cross_avail);
        sizes.push((main_size, main, cross));
    }

    // Second pass: split what is left among Fill children.
    let remaining = main_avail.saturating_sub(used);
    let (share, mut extra) = if fill_count > 0 {
        (remaining / fill_count, remaining % fill_count)
    } else {
        (0, 0)
    };

    let mut offset: u16 = 0;
    for (child, (main_size, mut main, cross)) in children.iter().zip(sizes) {
        if main_size == Size::Fill {
            main = share;
            if extra > 0 {
                main += 1;
                extra -= 1;
            }
        }

        // Clip to what is left inside the parent.
        let main = main.min(main_avail.saturating_sub(offset));
        let child_rect = match element.direction {
            Direction::Column => Rect::new(inner.x, inner.y + offset, cross, main),
            Direction::Row => Rect::new(inner.x + offset, inner.y, main, cross),
        };

        layout_element(child, child_rect, result);
        offset = offset.saturating_add(main).saturating_add(element.gap);
    }
}

fn clamp_u16(value: usize) -> u16 {
    value.min(u16::MAX as usize) as u16
}
