// main.rs - Desktop window for Conway's Game of Life
// The window only forwards button presses to the controller and paints the
// cells the controller asked for; all simulation state lives in `conway`.

use eframe::egui;
use egui::Color32;
use log::{info, warn};

use conway::{CellCanvas, Controller, FrameScheduler, LifeConfig, LifeError, PATTERNS};
use conway::patterns::GOSPER_GLIDER_GUN;

mod ui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = LifeConfig::default();
    let app = LifeApp::new(config)?;
    let (canvas_width, canvas_height) = app.config.canvas_size();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([canvas_width.max(760.0) + 40.0, canvas_height + 220.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |_cc| Box::new(app)),
    )?;
    Ok(())
}

pub struct LifeApp {
    controller: Controller<CellCanvas, FrameScheduler>,
    config: LifeConfig,
    fill_rate_text: String,
    selected_pattern: usize,
    live_color: Color32,
    dead_color: Color32,
    status: Option<String>,
}

impl LifeApp {
    fn new(config: LifeConfig) -> Result<Self, LifeError> {
        let mut controller = Controller::new(&config, CellCanvas::new(), FrameScheduler::new())?;
        controller.set_random_state(config.fill_rate);
        info!("{}x{} grid ready", config.width, config.height);

        let selected_pattern = PATTERNS
            .iter()
            .position(|pattern| pattern.name == GOSPER_GLIDER_GUN)
            .unwrap_or(0);

        Ok(Self {
            controller,
            fill_rate_text: config.fill_rate.to_string(),
            config,
            selected_pattern,
            live_color: Color32::from_rgb(0x55, 0, 0),
            dead_color: Color32::from_gray(240),
            status: None,
        })
    }

    /// Shows a failed action in the status line instead of bringing the window down.
    fn report<T>(&mut self, result: Result<T, LifeError>) {
        match result {
            Ok(_) => self.status = None,
            Err(err) => {
                warn!("{err}");
                self.status = Some(err.to_string());
            }
        }
    }
}
