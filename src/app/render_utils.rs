use eframe::egui::ecolor::Hsva;
use eframe::egui::load::TexturePoll;
use eframe::egui::{self, Align2, Color32, FontId, Painter, Pos2, Rect, Stroke, Ui, Vec2, pos2};

use crate::org::{EmployeeNode, avatar_url};
use crate::util::{initials, stable_unit};

pub(super) fn blend_color(base: Color32, overlay: Color32, amount: f32) -> Color32 {
    base.lerp_to_gamma(overlay, amount.clamp(0.0, 1.0))
}

/// Darkens toward black; `factor` 1.0 leaves the colour unchanged.
pub(super) fn dim_color(color: Color32, factor: f32) -> Color32 {
    color.lerp_to_gamma(Color32::BLACK, 1.0 - factor.clamp(0.0, 1.0))
}

pub(super) fn draw_background(painter: &Painter, rect: Rect, scale: f32) {
    painter.rect_filled(rect, 0.0, Color32::from_rgb(19, 23, 29));

    let step = (56.0 * scale).max(20.0);
    let stroke = Stroke::new(1.0, Color32::from_rgba_unmultiplied(60, 70, 80, 50));

    let mut x = rect.left() + (rect.width() * 0.5).rem_euclid(step);
    while x < rect.right() {
        painter.line_segment([Pos2::new(x, rect.top()), Pos2::new(x, rect.bottom())], stroke);
        x += step;
    }

    let mut y = rect.top();
    while y < rect.bottom() {
        painter.line_segment([Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)], stroke);
        y += step;
    }
}

/// `origin` is the screen position of the tree's top-center; the scale is
/// anchored there.
pub(super) fn world_to_screen(origin: Pos2, scale: f32, world: Pos2) -> Pos2 {
    origin + world.to_vec2() * scale
}

pub(super) fn screen_to_world(origin: Pos2, scale: f32, screen: Pos2) -> Pos2 {
    pos2(0.0, 0.0) + (screen - origin) / scale
}

pub(super) fn world_rect_to_screen(origin: Pos2, scale: f32, world: Rect) -> Rect {
    Rect::from_min_max(
        world_to_screen(origin, scale, world.min),
        world_to_screen(origin, scale, world.max),
    )
}

pub(super) fn avatar_color(id: &str) -> Color32 {
    Hsva::new(stable_unit(id), 0.45, 0.72, 1.0).into()
}

pub(super) fn avatar_image(node: &EmployeeNode, radius: f32) -> egui::Image<'static> {
    egui::Image::from_uri(avatar_url(node)).corner_radius(radius)
}

/// Paints the initials disc, then the avatar image over it once loaded.
/// Pending and failed loads leave the disc as the placeholder.
pub(super) fn paint_avatar(
    ui: &Ui,
    painter: &Painter,
    center: Pos2,
    radius: f32,
    node: &EmployeeNode,
) {
    painter.circle_filled(center, radius, avatar_color(&node.id));
    painter.circle_stroke(
        center,
        radius,
        Stroke::new(1.0, Color32::from_rgba_unmultiplied(15, 15, 15, 190)),
    );
    painter.text(
        center,
        Align2::CENTER_CENTER,
        initials(&node.name),
        FontId::proportional(radius * 0.75),
        Color32::from_gray(245),
    );

    let image = avatar_image(node, radius);
    let rect = Rect::from_center_size(center, Vec2::splat(radius * 2.0));
    if let Ok(TexturePoll::Ready { .. }) = image.load_for_size(ui.ctx(), rect.size()) {
        image.paint_at(ui, rect);
    }
}

/// Chevron pointing up when expanded, down when collapsed.
pub(super) fn paint_chevron(painter: &Painter, rect: Rect, expanded: bool, stroke: Stroke) {
    let half = rect.width() * 0.22;
    let rise = rect.height() * 0.12;
    let center = rect.center();
    let tip_dy = if expanded { -rise } else { rise };

    let left = center + Vec2::new(-half, -tip_dy);
    let tip = center + Vec2::new(0.0, tip_dy);
    let right = center + Vec2::new(half, -tip_dy);
    painter.line_segment([left, tip], stroke);
    painter.line_segment([tip, right], stroke);
}
