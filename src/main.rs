use eframe::egui;

use taichi_orbit::config::HubConfig;
use taichi_orbit::content::Catalog;

mod app;

use app::HubApp;

/// Catalog path: first positional argument, else `TAICHI_ORBIT_CATALOG`.
fn catalog_path() -> Option<String> {
    std::env::args()
        .nth(1)
        .or_else(|| std::env::var("TAICHI_ORBIT_CATALOG").ok())
}

/// Config path: second positional argument, else `TAICHI_ORBIT_CONFIG`.
fn config_path() -> Option<String> {
    std::env::args()
        .nth(2)
        .or_else(|| std::env::var("TAICHI_ORBIT_CONFIG").ok())
}

fn load_catalog() -> Catalog {
    let Some(path) = catalog_path() else {
        return Catalog::bundled();
    };
    match std::fs::read_to_string(&path) {
        Ok(json) => match Catalog::from_json(&json) {
            Ok(c) => c,
            Err(e) => {
                log::error!("catalog {}: {}, using bundled projects", path, e);
                Catalog::bundled()
            }
        },
        Err(e) => {
            log::error!("catalog {}: {}, using bundled projects", path, e);
            Catalog::bundled()
        }
    }
}

fn load_config() -> HubConfig {
    let Some(path) = config_path() else {
        return HubConfig::default();
    };
    match std::fs::read_to_string(&path) {
        Ok(json) => HubConfig::from_json(&json).unwrap_or_else(|e| {
            log::error!("config {}: {}, using defaults", path, e);
            HubConfig::default()
        }),
        Err(e) => {
            log::error!("config {}: {}, using defaults", path, e);
            HubConfig::default()
        }
    }
}

fn main() {
    env_logger::init();

    let config = load_config();
    let app = match HubApp::new(&load_catalog(), config.clone()) {
        Ok(app) => app,
        Err(e) => {
            log::error!("catalog rejected: {}, falling back to bundled projects", e);
            match HubApp::new(&Catalog::bundled(), config) {
                Ok(app) => app,
                Err(e) => {
                    log::error!("bundled catalog rejected: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1280.0, 800.0]),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native("Tai Chi Orbit", options, Box::new(|_cc| Ok(Box::new(app)))) {
        log::error!("failed to start: {}", e);
        std::process::exit(1);
    }
}
