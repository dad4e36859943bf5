use crate::grid::{Grid, HEIGHT, WIDTH};
use crate::solver::Strategy;
use serde::Deserialize;
use std::fs;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub maze: MazeConfig,
    #[serde(default)]
    pub solver: SolverConfig,
    #[serde(default)]
    pub visual: VisualConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct MazeConfig {
    #[serde(default = "default_cols")]
    pub cols: usize,
    #[serde(default = "default_rows")]
    pub rows: usize,
    #[serde(default = "default_layout_path")]
    pub layout_path: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct SolverConfig {
    #[serde(default)]
    pub strategy: Strategy,
}

#[derive(Debug, Deserialize)]
pub struct VisualConfig {
    #[serde(default = "default_window_title")]
    pub window_title: String,
    #[serde(default = "default_cell_size")]
    pub cell_size: f32,
    #[serde(default = "default_step_delay_ms")]
    pub step_delay_ms: u64,
    #[serde(default = "default_bg_r")]
    pub background_r: u8,
    #[serde(default = "default_bg_g")]
    pub background_g: u8,
    #[serde(default = "default_bg_b")]
    pub background_b: u8,
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_filter")]
    pub filter: String,
    #[serde(default)]
    pub enable_move_log: bool,
    #[serde(default = "default_move_log_path")]
    pub move_log_path: String,
}

// Default values
fn default_cols() -> usize { WIDTH }
fn default_rows() -> usize { HEIGHT }
fn default_layout_path() -> String { "maze.txt".to_string() }
fn default_window_title() -> String { "Maze Runner".to_string() }
fn default_cell_size() -> f32 { 80.0 }
fn default_step_delay_ms() -> u64 { 400 }
fn default_bg_r() -> u8 { 30 }
fn default_bg_g() -> u8 { 30 }
fn default_bg_b() -> u8 { 30 }
fn default_filter() -> String { "info".to_string() }
fn default_move_log_path() -> String { "move_log.json".to_string() }

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            cols: default_cols(),
            rows: default_rows(),
            layout_path: default_layout_path(),
        }
    }
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            window_title: default_window_title(),
            cell_size: default_cell_size(),
            step_delay_ms: default_step_delay_ms(),
            background_r: default_bg_r(),
            background_g: default_bg_g(),
            background_b: default_bg_b(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            enable_move_log: false,
            move_log_path: default_move_log_path(),
        }
    }
}

impl MazeConfig {
    /// Grid with the configured dimensions. Zero sizes fall back to the defaults.
    pub fn grid(&self) -> Grid {
        if self.cols == 0 || self.rows == 0 {
            warn!(cols = self.cols, rows = self.rows, "invalid maze size, using default");
            return Grid::default();
        }
        Grid::new(self.cols, self.rows)
    }
}

impl LoggingConfig {
    /// Install the global tracing subscriber. `RUST_LOG` overrides `filter`.
    pub fn init_tracing(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.filter));

        // A subscriber may already be installed (tests, repeated init)
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init();
    }
}

impl Config {
    pub fn from_toml_str(contents: &str) -> crate::error::Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Load configuration from file, or use defaults if file doesn't exist
    pub fn load() -> Self {
        Self::load_from("config.toml")
    }

    pub fn load_from(path: &str) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match Self::from_toml_str(&contents) {
                Ok(config) => {
                    info!(path, "loaded configuration");
                    config
                }
                Err(e) => {
                    warn!(path, error = %e, "failed to parse configuration, using defaults");
                    Config::default()
                }
            },
            Err(_) => {
                info!(path, "no configuration file found, using defaults");
                Config::default()
            }
        }
    }
}
