use eframe::egui::{self, Key, Pos2, Ui};

use crate::chart::{ChartAction, ChartHit, ChartLayout};

use super::super::render_utils::screen_to_world;

pub(super) fn hovered_hit(
    layout: &ChartLayout<'_>,
    origin: Pos2,
    scale: f32,
    response: &egui::Response,
) -> Option<ChartHit> {
    let pointer = response.hover_pos()?;
    layout.hit_test(screen_to_world(origin, scale, pointer))
}

/// A toggle click yields only `Toggle`; the card underneath never sees it.
pub(super) fn click_action(
    layout: &ChartLayout<'_>,
    origin: Pos2,
    scale: f32,
    response: &egui::Response,
) -> Option<ChartAction> {
    if !response.clicked_by(egui::PointerButton::Primary) {
        return None;
    }

    let pointer = response.interact_pointer_pos()?;
    layout
        .hit_test(screen_to_world(origin, scale, pointer))
        .map(ChartAction::from)
}

/// Scale factor a gesture must accumulate before it steps the zoom once.
const GESTURE_STEP: f32 = 1.1;

/// Running product of per-frame pinch and ctrl+scroll zoom factors.
///
/// Gestures span many frames with small factors each; the zoom moves one
/// notch only when the product crosses [`GESTURE_STEP`], then restarts.
#[derive(Clone, Copy, Debug)]
pub(in crate::app) struct GestureZoom {
    accumulated: f32,
}

impl Default for GestureZoom {
    fn default() -> Self {
        Self { accumulated: 1.0 }
    }
}

impl GestureZoom {
    fn feed(&mut self, zoom_delta: f32) -> Option<ChartAction> {
        self.accumulated *= zoom_delta;

        let action = if self.accumulated >= GESTURE_STEP {
            ChartAction::ZoomIn
        } else if self.accumulated <= GESTURE_STEP.recip() {
            ChartAction::ZoomOut
        } else {
            return None;
        };
        self.accumulated = 1.0;
        Some(action)
    }
}

pub(super) fn gesture_zoom_action(
    ui: &Ui,
    response: &egui::Response,
    gesture: &mut GestureZoom,
) -> Option<ChartAction> {
    if !response.hovered() {
        *gesture = GestureZoom::default();
        return None;
    }

    let zoom_delta = ui.input(|input| input.zoom_delta());
    gesture.feed(zoom_delta)
}

pub(super) fn keyboard_zoom_action(ui: &Ui) -> Option<ChartAction> {
    if ui.ctx().wants_keyboard_input() {
        return None;
    }

    ui.input(|input| {
        if !input.modifiers.command {
            None
        } else if input.key_pressed(Key::Plus) || input.key_pressed(Key::Equals) {
            Some(ChartAction::ZoomIn)
        } else if input.key_pressed(Key::Minus) {
            Some(ChartAction::ZoomOut)
        } else if input.key_pressed(Key::Num0) {
            Some(ChartAction::ResetZoom)
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slow_pinch_steps_once_per_threshold() {
        let mut gesture = GestureZoom::default();
        let actions = (0..20)
            .filter_map(|_| gesture.feed(1.02))
            .collect::<Vec<_>>();

        assert_eq!(actions, vec![ChartAction::ZoomIn; 4]);
    }

    #[test]
    fn idle_frames_do_not_zoom() {
        let mut gesture = GestureZoom::default();
        assert_eq!(gesture.feed(1.05), None);
        for _ in 0..10 {
            assert_eq!(gesture.feed(1.0), None);
        }
        assert_eq!(gesture.feed(1.04), None);
        assert_eq!(gesture.feed(1.01), Some(ChartAction::ZoomIn));
    }

    #[test]
    fn pinch_out_zooms_out() {
        let mut gesture = GestureZoom::default();
        assert_eq!(gesture.feed(0.95), None);
        assert_eq!(gesture.feed(0.95), Some(ChartAction::ZoomOut));
        assert_eq!(gesture.feed(0.99), None);
    }
}
