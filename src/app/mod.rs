//! `HubApp`: the top-level egui application state.
//!
//! The struct and the frame loop live here. Drawing is split across the
//! sibling sub-modules:
//!
//! - `emblem`     : mask texture, glow halos, pointer → surface hit
//! - `satellites` : project thumbnails around the emblem

pub mod emblem;
pub mod satellites;

use std::cell::Cell;
use std::rc::Rc;

use eframe::egui;

use taichi_orbit::config::HubConfig;
use taichi_orbit::content::Catalog;
use taichi_orbit::geometry::Camera;
use taichi_orbit::scene::{SceneController, SceneSignal};
use taichi_orbit::view::{CursorAffordance, CursorHook};
use taichi_orbit::Result;

// ─── Application state ───────────────────────────────────────────────────────

pub struct HubApp {
    pub config: HubConfig,
    pub scene: SceneController,
    pub camera: Camera,
    pub mask_texture: Option<egui::TextureHandle>,
    /// Pointer was on the sphere last frame.
    pub over_emblem: bool,
    /// Satellite under the pointer last frame.
    pub hovered_satellite: Option<String>,
    /// Written by the cursor hook on every affordance change.
    pub cursor: Rc<Cell<CursorAffordance>>,
    /// Last navigation target, shown in the status line.
    pub status: Option<String>,
    /// Scene clock of the state last painted; the mask is only re-rasterized
    /// when it moves on.
    pub painted_clock: Option<f64>,
}

impl HubApp {
    pub fn new(catalog: &Catalog, config: HubConfig) -> Result<Self> {
        let mut scene = SceneController::new(catalog, &config)?;

        let cursor = Rc::new(Cell::new(CursorAffordance::Default));
        let sink = Rc::clone(&cursor);
        scene.subscribe(Box::new(CursorHook::new(move |c| sink.set(c))));

        Ok(Self {
            camera: Camera::from_params(&config.camera),
            config,
            scene,
            mask_texture: None,
            over_emblem: false,
            hovered_satellite: None,
            cursor,
            status: None,
            painted_clock: None,
        })
    }

    fn handle_signals(&mut self, signals: Vec<SceneSignal>) {
        for signal in signals {
            match signal {
                SceneSignal::ElementActivated { route, .. } => self.status = Some(route),
                SceneSignal::RegionActivated { route: Some(route), .. } => self.status = Some(route),
                SceneSignal::RegionActivated { region, route: None } => {
                    log::debug!("app: region {:?} has no route", region);
                }
                SceneSignal::ViewChanged(t) => {
                    log::debug!("app: view {:?} -> {:?}", t.from, t.to);
                }
            }
        }
    }

    fn draw_status(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.colored_label(
                egui::Color32::GRAY,
                format!("{:?}", self.scene.view_state()),
            );
            if let Some(ref route) = self.status {
                ui.separator();
                ui.colored_label(egui::Color32::from_rgb(0x6C, 0xBF, 0xCD), format!("→ {}", route));
            }
        });
    }

    /// One frame: apply last frame's queued input and advance the scene,
    /// then paint the result and queue this frame's input.
    pub fn run_frame(&mut self, ctx: &egui::Context, dt: f32) {
        let signals = self.scene.tick(dt);
        self.handle_signals(signals);

        ctx.set_visuals(egui::Visuals::dark());
        if self.cursor.get() == CursorAffordance::Pointer {
            ctx.set_cursor_icon(egui::CursorIcon::PointingHand);
        }

        egui::TopBottomPanel::bottom("status")
            .frame(egui::Frame::none().fill(egui::Color32::BLACK).inner_margin(6.0))
            .show(ctx, |ui| self.draw_status(ui));

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(egui::Color32::BLACK))
            .show(ctx, |ui| {
                let area = ui.max_rect();
                self.draw_emblem(ui, ctx, area);
                self.draw_satellites(ui, area);
            });
        self.painted_clock = Some(self.scene.clock());
    }
}

impl eframe::App for HubApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let dt = ctx.input(|i| i.stable_dt);
        self.run_frame(ctx, dt);
        ctx.request_repaint();
    }
}
