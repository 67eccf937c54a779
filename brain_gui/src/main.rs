// main.rs - Brian's Brain in an egui window
// Each cell is drawn as a circle; the engine lives in the brians_brain crate

use eframe::egui;
use egui::Color32;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::time::{Duration, Instant};

use brians_brain::config::{Config, USAGE};
use brians_brain::patterns;
use brians_brain::render::{Layout, Palette};
use brians_brain::{BrainEngine, Cell, EngineError};

mod ui;

const HISTORY_LEN: usize = 10;

fn main() -> Result<(), eframe::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match Config::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(err) => {
            log::error!("{}", err);
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    };

    let app = match BrainApp::new(&config) {
        Ok(app) => app,
        Err(err) => {
            log::error!("cannot start: {}", err);
            std::process::exit(1);
        }
    };

    // Room for the controls around the grid
    let canvas = ui::canvas_size(&app.layout, config.rows, config.cols);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([canvas.x + 40.0, canvas.y + 200.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Brian's Brain",
        options,
        Box::new(|_cc| Box::new(app)),
    )
}

pub struct BrainApp {
    engine: BrainEngine,
    rng: StdRng,
    rows: usize,
    cols: usize,

    pub is_running: bool,
    pub last_update: Instant,
    pub update_interval: Duration,
    pub layout: Layout,
    pub colors: [Color32; 3],   // indexed by Cell::as_raw
    pub selected_pattern: usize,
    pub status: String,

    grid_history: [u64; HISTORY_LEN],
    history_count: usize,
}

impl BrainApp {
    pub fn new(config: &Config) -> Result<Self, EngineError> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let engine = BrainEngine::new(config.rows, config.cols, &mut rng)?;
        log::info!("{}x{} grid, {} ms per generation", config.rows, config.cols, config.interval.as_millis());

        let palette = Palette::default();
        let colors = Cell::ALL.map(|cell| {
            let [r, g, b] = palette.rgb(cell);
            Color32::from_rgb(r, g, b)
        });

        Ok(Self {
            engine,
            rng,
            rows: config.rows,
            cols: config.cols,
            is_running: false,
            last_update: Instant::now(),
            update_interval: config.interval,
            layout: Layout::default(),
            colors,
            selected_pattern: 0,
            status: String::new(),
            grid_history: [0; HISTORY_LEN],
            history_count: 0,
        })
    }

    pub fn color_of(&self, cell: Cell) -> Color32 {
        self.colors[cell.as_raw() as usize]
    }

    fn reset_history(&mut self) {
        self.grid_history = [0; HISTORY_LEN];
        self.history_count = 0;
        self.status.clear();
    }
}

/// Operations the UI module drives.
pub trait BrainInterface {
    fn update_generation(&mut self);
    fn hash_grid(&self) -> u64;
    fn check_for_cycle(&mut self) -> bool;
    fn randomize(&mut self);
    fn apply_selected_pattern(&mut self);
}

impl BrainInterface for BrainApp {
    fn update_generation(&mut self) {
        if let Err(err) = self.engine.advance() {
            log::error!("advance failed: {}", err);
            self.is_running = false;
            return;
        }

        if self.engine.is_frozen() {
            log::info!("lives are frozen at generation {}", self.engine.generation());
            self.status = "Frozen".to_string();
            self.is_running = false;
        } else if self.check_for_cycle() {
            log::info!("grid repeats at generation {}", self.engine.generation());
            self.status = "Cycle detected".to_string();
            self.is_running = false;
        }
    }

    fn hash_grid(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        if let Ok(grid) = self.engine.current_generation() {
            grid.hash(&mut hasher);
        }
        hasher.finish()
    }

    fn check_for_cycle(&mut self) -> bool {
        let current_hash = self.hash_grid();
        let seen = self.history_count.min(HISTORY_LEN);
        if self.grid_history[..seen].contains(&current_hash) {
            return true;
        }
        self.grid_history[self.history_count % HISTORY_LEN] = current_hash;
        self.history_count += 1;
        false
    }

    fn randomize(&mut self) {
        match self.engine.initialize(self.rows, self.cols, &mut self.rng) {
            Ok(()) => self.reset_history(),
            Err(err) => log::error!("randomize failed: {}", err),
        }
    }

    fn apply_selected_pattern(&mut self) {
        let Some(pattern) = patterns::PATTERNS.get(self.selected_pattern) else {
            return;
        };
        match patterns::apply_pattern(self.rows, self.cols, pattern) {
            Ok(grid) => {
                self.engine.load(grid);
                self.reset_history();
                log::info!("loaded pattern {}", pattern.name);
            }
            Err(err) => log::error!("pattern {} failed: {}", pattern.name, err),
        }
    }
}
