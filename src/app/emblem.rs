//! Emblem viewport: software-rendered mask, glow halos and pointer input.

use eframe::egui;

use taichi_orbit::emblem::mask::render_mask;
use taichi_orbit::fast_math::lerp;
use taichi_orbit::scene::PointerEvent;

use super::HubApp;

impl HubApp {
    /// Square viewport centred in `area`.
    pub fn emblem_rect(&self, area: egui::Rect) -> egui::Rect {
        let side = self.config.emblem_size.min(area.width()).min(area.height());
        egui::Rect::from_center_size(area.center(), egui::vec2(side, side))
    }

    pub fn draw_emblem(&mut self, ui: &mut egui::Ui, ctx: &egui::Context, area: egui::Rect) {
        let rect = self.emblem_rect(area);
        let response = ui.interact(rect, ui.id().with("emblem"), egui::Sense::click());

        self.draw_glow(ui, rect);

        // Raster, only when the scene has moved since the last paint
        let tf = self.scene.emblem_transform();
        if self.mask_texture.is_none() || self.painted_clock != Some(self.scene.clock()) {
            let res = self.config.mask_resolution.max(1);
            let pixels = render_mask(res, res, &self.camera, &tf, &self.config.mask, self.scene.lobe_hover());
            let image = egui::ColorImage::from_rgba_unmultiplied([res, res], &pixels);
            match self.mask_texture {
                Some(ref mut tex) => tex.set(image, egui::TextureOptions::LINEAR),
                None => {
                    self.mask_texture = Some(ctx.load_texture("emblem_mask", image, egui::TextureOptions::LINEAR));
                }
            }
        }
        if let Some(ref tex) = self.mask_texture {
            ui.painter().image(
                tex.id(),
                rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );
        }

        // Pointer → world hit on the pose just drawn
        let hit = response.hover_pos().and_then(|pos| {
            let fx = (pos.x - rect.min.x) / rect.width();
            let fy = (pos.y - rect.min.y) / rect.height();
            tf.intersect(&self.camera.viewport_ray(fx, fy, 1.0))
        });
        match hit {
            Some(world) => {
                self.scene.push(PointerEvent::EmblemMove(world));
                if response.clicked() {
                    self.scene.push(PointerEvent::EmblemClick(world));
                }
                self.over_emblem = true;
            }
            None if self.over_emblem => {
                self.scene.push(PointerEvent::EmblemLeave);
                self.over_emblem = false;
            }
            None => {}
        }
    }

    /// One halo per lobe, behind its half of the sphere.
    fn draw_glow(&self, ui: &egui::Ui, rect: egui::Rect) {
        let glow = self.config.glow;
        let hover = self.scene.lobe_hover();
        let [r, g, b] = glow.color;
        let base = rect.width() * 0.25;
        for (intensity, side) in [(hover.a, -1.0), (hover.b, 1.0)] {
            if intensity <= 0.0 {
                continue;
            }
            let center = rect.center() + egui::vec2(side * rect.width() * 0.2, 0.0);
            let radius = base * lerp(glow.idle_scale, glow.active_scale, intensity);
            // Soft edge from a few stacked translucent discs
            for ring in 0..4 {
                let k = 1.0 - ring as f32 * 0.2;
                let alpha = (intensity * 40.0 * (ring as f32 + 1.0)) as u8;
                ui.painter().circle_filled(
                    center,
                    radius * k,
                    egui::Color32::from_rgba_unmultiplied(r, g, b, alpha),
                );
            }
        }
    }
}
