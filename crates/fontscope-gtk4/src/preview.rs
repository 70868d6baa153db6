//! Sample text rendering through the selected GSK renderer

use fontscope_core::{FontScopeError, FontScopeResult};
use gtk4::prelude::*;
use gtk4::{gdk, graphene, gsk};

/// Largest texture edge rendered for the preview, below cairo's 32767 px limit
pub const MAX_PREVIEW_EXTENT: i32 = 4096;

/// Texture size for a wrapped layout: the visible top of the text, clipped
/// to `1..=MAX_PREVIEW_EXTENT` on both axes
pub fn preview_extent(width: i32, layout_height: i32) -> (i32, i32) {
    (
        width.clamp(1, MAX_PREVIEW_EXTENT),
        layout_height.clamp(1, MAX_PREVIEW_EXTENT),
    )
}

/// Render a laid-out text into a texture with `renderer`
///
/// The layout is drawn at the origin on top of a `background` fill that
/// covers `width` x `height` pixels.
pub fn render_layout(
    renderer: &gsk::Renderer,
    layout: &pango::Layout,
    width: i32,
    height: i32,
    foreground: &gdk::RGBA,
    background: &gdk::RGBA,
) -> FontScopeResult<gdk::Texture> {
    let engine = renderer.type_().name().to_string();
    if width <= 0 || height <= 0 {
        return Err(FontScopeError::RenderingFailed {
            engine,
            message: format!("empty viewport {}x{}", width, height),
        });
    }

    let bounds = graphene::Rect::new(0.0, 0.0, width as f32, height as f32);
    let snapshot = gtk4::Snapshot::new();
    snapshot.append_color(background, &bounds);
    snapshot.append_layout(layout, foreground);

    let node = snapshot.to_node().ok_or_else(|| FontScopeError::RenderingFailed {
        engine,
        message: "snapshot produced no render node".to_string(),
    })?;

    Ok(renderer.render_texture(&node, Some(&bounds)))
}

/// Foreground and background colours for the preview
pub fn preview_colors(dark: bool) -> (gdk::RGBA, gdk::RGBA) {
    if dark {
        (gdk::RGBA::WHITE, gdk::RGBA::BLACK)
    } else {
        (gdk::RGBA::BLACK, gdk::RGBA::WHITE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_extent_is_bounded() {
        assert_eq!(preview_extent(240, 300), (240, 300));
        // A near-limit sample at 72 pt wraps to hundreds of thousands of pixels
        assert_eq!(preview_extent(460, 430_000), (460, MAX_PREVIEW_EXTENT));
        assert_eq!(preview_extent(100_000, 10), (MAX_PREVIEW_EXTENT, 10));
        assert_eq!(preview_extent(0, 0), (1, 1));
        assert_eq!(preview_extent(-5, -5), (1, 1));
    }
}
