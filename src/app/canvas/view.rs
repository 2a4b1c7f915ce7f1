use eframe::egui::{
    self, Align2, Color32, FontId, Painter, Pos2, Sense, Stroke, StrokeKind, Ui, Vec2, pos2, vec2,
};

use crate::chart::{CardLayout, ChartHit, ChartLayout, EdgeKind};
use crate::util::truncate_label;

use super::super::ViewModel;
use super::super::render_utils::{
    blend_color, dim_color, draw_background, paint_avatar, paint_chevron, world_rect_to_screen,
    world_to_screen,
};
use super::interaction::{click_action, gesture_zoom_action, hovered_hit, keyboard_zoom_action};

const CANVAS_PADDING: f32 = 32.0;
const CARD_FILL: Color32 = Color32::from_rgb(36, 42, 51);
const SELECTED_COLOR: Color32 = Color32::from_rgb(245, 206, 93);
const MATCH_COLOR: Color32 = Color32::from_rgb(103, 196, 255);

#[derive(Clone, Copy)]
struct CardLook {
    selected: bool,
    hovered: bool,
    toggle_hovered: bool,
    /// `None` when no search or department highlight is active.
    matched: Option<bool>,
}

fn paint_card(
    ui: &Ui,
    painter: &Painter,
    card: &CardLayout<'_>,
    origin: Pos2,
    scale: f32,
    look: CardLook,
) {
    let node = card.node;
    let screen = world_rect_to_screen(origin, scale, card.rect);
    let rounding = 8.0 * scale;

    let mut fill = if look.hovered {
        blend_color(CARD_FILL, Color32::from_rgb(255, 164, 101), 0.18)
    } else {
        CARD_FILL
    };
    match look.matched {
        Some(true) => fill = blend_color(fill, MATCH_COLOR, 0.35),
        Some(false) if !look.selected => fill = dim_color(fill, 0.55),
        _ => {}
    }
    painter.rect_filled(screen, rounding, fill);

    let border = if look.selected {
        Stroke::new(2.4 * scale.max(0.6), SELECTED_COLOR)
    } else {
        Stroke::new(1.0, Color32::from_rgba_unmultiplied(15, 15, 15, 190))
    };
    painter.rect_stroke(screen, rounding, border, StrokeKind::Inside);

    let avatar_radius = 24.0 * scale;
    let avatar_center = screen.left_center() + vec2(16.0 * scale + avatar_radius, 0.0);
    paint_avatar(ui, painter, avatar_center, avatar_radius, node);

    let text_left = avatar_center.x + avatar_radius + 12.0 * scale;
    let text_color = if look.matched == Some(false) && !look.selected {
        Color32::from_gray(150)
    } else {
        Color32::from_gray(238)
    };
    painter.text(
        pos2(text_left, screen.top() + 20.0 * scale),
        Align2::LEFT_CENTER,
        truncate_label(&node.name, 20),
        FontId::proportional(14.0 * scale),
        text_color,
    );
    painter.text(
        pos2(text_left, screen.top() + 41.0 * scale),
        Align2::LEFT_CENTER,
        truncate_label(&node.title, 24),
        FontId::proportional(12.0 * scale),
        Color32::from_gray(180),
    );
    painter.text(
        pos2(text_left, screen.top() + 60.0 * scale),
        Align2::LEFT_CENTER,
        truncate_label(&node.department, 26),
        FontId::proportional(11.0 * scale),
        Color32::from_gray(140),
    );

    if let Some(toggle) = card.toggle {
        let toggle = world_rect_to_screen(origin, scale, toggle);
        if look.toggle_hovered {
            painter.rect_filled(toggle, 4.0 * scale, Color32::from_rgb(58, 66, 78));
        }
        paint_chevron(
            painter,
            toggle,
            card.expanded,
            Stroke::new(1.6 * scale.max(0.6), Color32::from_gray(200)),
        );
    }
}

impl ViewModel {
    pub(in crate::app) fn draw_chart(&mut self, ui: &mut Ui) {
        let highlight = self.highlighted_ids();
        let chart_state = &self.chart_state;
        let layout = ChartLayout::compute(&self.chart.root, &chart_state.expansion);
        let scale = chart_state.viewport.scale();
        let bounds = layout.bounds();
        let gesture_zoom = &mut self.gesture_zoom;
        let mut actions = Vec::new();

        egui::ScrollArea::both()
            .id_salt("org_chart_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let content = bounds.size() * scale + Vec2::splat(CANVAS_PADDING * 2.0);
                let (rect, response) =
                    ui.allocate_exact_size(content.max(ui.available_size()), Sense::click());
                let painter = ui.painter_at(rect);

                draw_background(&painter, rect, scale);

                let origin = pos2(
                    rect.center().x - bounds.center().x * scale,
                    rect.top() + CANVAS_PADDING,
                );

                let hovered = hovered_hit(&layout, origin, scale, &response);
                if hovered.is_some() {
                    ui.output_mut(|output| {
                        output.cursor_icon = egui::CursorIcon::PointingHand;
                    });
                }

                let edge_stroke = Stroke::new((1.4 * scale).max(0.8), Color32::from_gray(118));
                for edge in &layout.edges {
                    let from = world_to_screen(origin, scale, edge.from);
                    let to = world_to_screen(origin, scale, edge.to);
                    let stroke = if chart_state.selection.is_selected(edge.parent) {
                        Stroke::new(
                            edge_stroke.width * 1.5,
                            blend_color(edge_stroke.color, SELECTED_COLOR, 0.7),
                        )
                    } else if edge.kind == EdgeKind::Bus {
                        Stroke::new(edge_stroke.width, Color32::from_gray(104))
                    } else {
                        edge_stroke
                    };
                    painter.line_segment([from, to], stroke);
                }

                for card in &layout.cards {
                    let screen = world_rect_to_screen(origin, scale, card.rect);
                    if !ui.is_rect_visible(screen) {
                        continue;
                    }

                    let id = card.node.id.as_str();
                    let look = CardLook {
                        selected: chart_state.selection.is_selected(id),
                        hovered: matches!(&hovered, Some(ChartHit::Card(hit)) if hit == id),
                        toggle_hovered: matches!(&hovered, Some(ChartHit::Toggle(hit)) if hit == id),
                        matched: highlight.as_ref().map(|ids| ids.contains(id)),
                    };
                    paint_card(ui, &painter, card, origin, scale, look);
                }

                if let Some(ChartHit::Card(id) | ChartHit::Toggle(id)) = &hovered
                    && let Some(card) = layout.card(id)
                {
                    let node = card.node;
                    let panel_text = format!(
                        "{}  |  {}  |  level {}  |  {} reports",
                        node.name,
                        node.title,
                        card.depth,
                        node.children.len()
                    );
                    painter.text(
                        ui.clip_rect().left_top() + vec2(10.0, 10.0),
                        Align2::LEFT_TOP,
                        panel_text,
                        FontId::proportional(13.0),
                        Color32::from_gray(240),
                    );
                }

                actions.extend(click_action(&layout, origin, scale, &response));
                actions.extend(gesture_zoom_action(ui, &response, gesture_zoom));
            });

        actions.extend(keyboard_zoom_action(ui));

        self.rendered_card_count = layout.cards.len();
        self.rendered_edge_count = layout.edges.len();
        self.pending_actions.extend(actions);
    }
}
