#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

// When compiling natively:
#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let config = mako_paint::PaintConfig::from_env();
    let title = config.title.clone();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title.as_str())
            .with_inner_size([
                config.canvas_width as f32 + 280.0,
                config.canvas_height as f32 + 80.0,
            ]),
        ..Default::default()
    };
    eframe::run_native(
        &title,
        native_options,
        Box::new(|cc| Ok(Box::new(mako_paint::PaintApp::new(cc, config)))),
    )
}

// The web build is driven from JavaScript; nothing to do here.
#[cfg(target_arch = "wasm32")]
fn main() {}
