//! Satellite thumbnails: anchor from the layout springs, idle drift on top,
//! emphasis as opacity and desaturation.

use eframe::egui;

use taichi_orbit::emblem::RegionTag;
use taichi_orbit::fast_math::lerp;
use taichi_orbit::scene::{DisplayedElement, PointerEvent};

use super::HubApp;

fn category_rgb(category: RegionTag) -> [f32; 3] {
    match category {
        RegionTag::A => [0x9C as f32, 0x12 as f32, 0x00 as f32],
        RegionTag::B => [0xE0 as f32; 3],
    }
}

/// Blend toward luminance by `amount` (0 = colour, 1 = grey), then apply
/// `opacity`.
fn emphasised(rgb: [f32; 3], amount: f32, opacity: f32) -> egui::Color32 {
    let luma = 0.299 * rgb[0] + 0.587 * rgb[1] + 0.114 * rgb[2];
    let [r, g, b] = rgb.map(|c| lerp(c, luma, amount.clamp(0.0, 1.0)).round() as u8);
    let a = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}

fn thumbnail_rect(d: &DisplayedElement<'_>, area: egui::Rect, side: f32) -> egui::Rect {
    let anchor = egui::pos2(
        area.min.x + area.width() * d.left / 100.0,
        area.min.y + area.height() * d.top / 100.0,
    );
    let center = anchor + egui::vec2(d.drift.x, d.drift.y);
    egui::Rect::from_center_size(center, egui::vec2(side, side) * d.scale.max(0.0))
}

impl HubApp {
    pub fn draw_satellites(&mut self, ui: &mut egui::Ui, area: egui::Rect) {
        let side = self.config.thumbnail_size;
        let mut hovered = None;
        let mut clicked = None;

        // Promoted elements come last, so they paint on top.
        for d in self.scene.displayed() {
            let rect = thumbnail_rect(&d, area, side);
            let id = d.element.id();
            let response = ui
                .interact(rect, ui.id().with(("satellite", id)), egui::Sense::click())
                .on_hover_text(d.element.description());

            let painter = ui.painter();
            let fill = emphasised(category_rgb(d.element.category()), d.desaturation, d.opacity);
            painter.rect_filled(rect, 8.0, fill);
            painter.text(
                egui::pos2(rect.center().x, rect.max.y + 4.0),
                egui::Align2::CENTER_TOP,
                d.element.title(),
                egui::FontId::proportional(12.0),
                emphasised([0xF0 as f32; 3], d.desaturation, d.opacity),
            );

            if response.hovered() {
                hovered = Some(id.to_string());
                ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
            }
            if response.clicked() {
                clicked = Some(id.to_string());
            }
        }

        if hovered != self.hovered_satellite {
            self.scene.push(PointerEvent::ElementHover(hovered.clone()));
            self.hovered_satellite = hovered;
        }
        if let Some(id) = clicked {
            self.scene.push(PointerEvent::ElementClick(id));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_desaturation_is_grey() {
        let c = emphasised(category_rgb(RegionTag::A), 1.0, 1.0);
        assert_eq!(c.r(), c.g());
        assert_eq!(c.g(), c.b());
    }

    #[test]
    fn no_desaturation_keeps_colour() {
        let c = emphasised(category_rgb(RegionTag::A), 0.0, 1.0);
        assert_eq!((c.r(), c.g(), c.b()), (0x9C, 0x12, 0x00));
    }
}
