// SPDX-License-Identifier: GPL-3.0-or-later
// src/ui/mask.rs
//
// Mask drawing: dimmed backdrop, dashed border, corner dots and buttons.

use crate::app::host::{Color, Renderer};
use crate::app::message::OverlayButton;
use crate::config::MaskConfig;
use crate::constant::{BUTTON_SIZE, CHROME_TOP_OFFSET};
use crate::domain::geometry::{Bounds, Point, Rect, SelectionRect};

/// Where each chrome button sits in a container of the given size.
///
/// Cancel hugs the top-left, share the top-right, full-screen is centered.
pub fn chrome_layout(bounds: Bounds, side_inset: f32) -> [(OverlayButton, Rect); 3] {
    let (w, h) = BUTTON_SIZE;
    [
        (
            OverlayButton::Cancel,
            Rect::new(side_inset, CHROME_TOP_OFFSET, w, h),
        ),
        (
            OverlayButton::FullScreen,
            Rect::new(bounds.width / 2.0 - w / 2.0, CHROME_TOP_OFFSET, w, h),
        ),
        (
            OverlayButton::Share,
            Rect::new(bounds.width - side_inset - w, CHROME_TOP_OFFSET, w, h),
        ),
    ]
}

/// Button under `point`, if any.
pub fn button_at(bounds: Bounds, side_inset: f32, point: Point) -> Option<OverlayButton> {
    chrome_layout(bounds, side_inset)
        .into_iter()
        .find(|(_, rect)| rect.contains(point))
        .map(|(button, _)| button)
}

/// Paint the mask for `rect` inside `bounds`.
pub fn draw_mask(
    renderer: &mut dyn Renderer,
    bounds: Bounds,
    rect: &SelectionRect,
    config: &MaskConfig,
    chrome_visible: bool,
) {
    draw_backdrop(renderer, bounds, rect, config.backdrop_color);

    if !chrome_visible {
        return;
    }

    draw_dashed_border(renderer, rect, config);

    let dia = config.corner_diameter;
    let half = dia / 2.0;
    let corners = [
        (rect.left(), rect.top()),
        (rect.right(), rect.top()),
        (rect.left(), rect.bottom()),
        (rect.right(), rect.bottom()),
    ];
    for (cx, cy) in corners {
        renderer.fill_oval(Rect::new(cx - half, cy - half, dia, dia), config.stroke_color);
    }

    for (button, plate) in chrome_layout(bounds, dia) {
        renderer.fill_quad(plate, config.button_color);
        renderer.label(plate, button.label(), config.stroke_color);
    }
}

/// Dim everything but the selection with four bands around it.
fn draw_backdrop(renderer: &mut dyn Renderer, bounds: Bounds, rect: &SelectionRect, color: Color) {
    if rect.is_empty() {
        renderer.fill_quad(bounds.as_rect(), color);
        return;
    }

    if rect.top() > 0.0 {
        renderer.fill_quad(Rect::new(0.0, 0.0, bounds.width, rect.top()), color);
    }
    if rect.bottom() < bounds.height {
        renderer.fill_quad(
            Rect::from_edges(0.0, rect.bottom(), bounds.width, bounds.height),
            color,
        );
    }
    if rect.left() > 0.0 {
        renderer.fill_quad(
            Rect::from_edges(0.0, rect.top(), rect.left(), rect.bottom()),
            color,
        );
    }
    if rect.right() < bounds.width {
        renderer.fill_quad(
            Rect::from_edges(rect.right(), rect.top(), bounds.width, rect.bottom()),
            color,
        );
    }
}

fn draw_dashed_border(renderer: &mut dyn Renderer, rect: &SelectionRect, config: &MaskConfig) {
    let [on, off] = config.dash_pattern;
    let bw = config.border_width;
    let color = config.stroke_color;

    for (offset, len) in dash_segments(rect.width, on, off) {
        let x = rect.left() + offset;
        renderer.fill_quad(Rect::new(x, rect.top(), len, bw), color);
        renderer.fill_quad(Rect::new(x, rect.bottom() - bw, len, bw), color);
    }
    for (offset, len) in dash_segments(rect.height, on, off) {
        let y = rect.top() + offset;
        renderer.fill_quad(Rect::new(rect.left(), y, bw, len), color);
        renderer.fill_quad(Rect::new(rect.right() - bw, y, bw, len), color);
    }
}

/// `(offset, length)` of each dash along a line of `total` length.
///
/// A pattern without a positive dash draws one solid segment.
pub fn dash_segments(total: f32, on: f32, off: f32) -> Vec<(f32, f32)> {
    if total <= 0.0 {
        return Vec::new();
    }
    if on <= 0.0 {
        return vec![(0.0, total)];
    }

    let period = on + off.max(0.0);
    let mut segments = Vec::new();
    let mut offset = 0.0;
    while offset < total {
        segments.push((offset, on.min(total - offset)));
        offset += period;
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingRenderer {
        quads: Vec<(Rect, Color)>,
        ovals: Vec<Rect>,
        labels: Vec<String>,
    }

    impl Renderer for RecordingRenderer {
        fn fill_quad(&mut self, bounds: Rect, color: Color) {
            self.quads.push((bounds, color));
        }

        fn fill_oval(&mut self, bounds: Rect, _color: Color) {
            self.ovals.push(bounds);
        }

        fn label(&mut self, _bounds: Rect, text: &str, _color: Color) {
            self.labels.push(text.to_string());
        }
    }

    #[test]
    fn dashes_follow_pattern_and_clip_at_end() {
        let segments = dash_segments(30.0, 8.0, 5.0);
        assert_eq!(segments, vec![(0.0, 8.0), (13.0, 8.0), (26.0, 4.0)]);
        assert_eq!(dash_segments(10.0, 0.0, 5.0), vec![(0.0, 10.0)]);
        assert!(dash_segments(0.0, 8.0, 5.0).is_empty());
    }

    #[test]
    fn backdrop_leaves_selection_uncovered() {
        let mut renderer = RecordingRenderer::default();
        let bounds = Bounds::new(320.0, 480.0);
        let rect = Rect::new(100.0, 100.0, 160.0, 160.0);
        let config = MaskConfig::default();

        draw_mask(&mut renderer, bounds, &rect, &config, false);

        assert_eq!(renderer.quads.len(), 4);
        let inside = rect.center();
        assert!(renderer.quads.iter().all(|(q, _)| !q.contains(inside)));
        assert!(renderer.ovals.is_empty());
    }

    #[test]
    fn full_screen_selection_draws_no_backdrop() {
        let mut renderer = RecordingRenderer::default();
        let bounds = Bounds::new(320.0, 480.0);
        draw_mask(
            &mut renderer,
            bounds,
            &bounds.as_rect(),
            &MaskConfig::default(),
            false,
        );
        assert!(renderer.quads.is_empty());
    }

    #[test]
    fn chrome_draws_corners_and_buttons() {
        let mut renderer = RecordingRenderer::default();
        let bounds = Bounds::new(320.0, 480.0);
        let rect = Rect::new(100.0, 100.0, 160.0, 160.0);

        draw_mask(&mut renderer, bounds, &rect, &MaskConfig::default(), true);

        assert_eq!(renderer.ovals.len(), 4);
        assert_eq!(renderer.ovals[0], Rect::new(97.0, 97.0, 6.0, 6.0));
        assert_eq!(renderer.labels, vec!["Cancel", "FullScreen", "Share"]);
    }

    #[test]
    fn buttons_are_hit_tested_by_layout() {
        let bounds = Bounds::new(320.0, 480.0);
        assert_eq!(
            button_at(bounds, 6.0, Point::new(10.0, 10.0)),
            Some(OverlayButton::Cancel)
        );
        assert_eq!(
            button_at(bounds, 6.0, Point::new(160.0, 20.0)),
            Some(OverlayButton::FullScreen)
        );
        assert_eq!(
            button_at(bounds, 6.0, Point::new(310.0, 20.0)),
            Some(OverlayButton::Share)
        );
        assert_eq!(button_at(bounds, 6.0, Point::new(160.0, 200.0)), None);
    }
}
