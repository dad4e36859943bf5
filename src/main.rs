use arboard::Clipboard;
use macroquad::prelude::*;
use maze_runner::config::Config;
use maze_runner::console::ConsoleMaze;
use maze_runner::layout::{self, Layout};
use maze_runner::move_log::MoveLog;
use maze_runner::render::render_maze;
use maze_runner::replay::Replay;
use maze_runner::{Cell, Direction, Grid, Obstacle, ObstacleSet, SimulatedMaze, Solver, Strategy};
use std::time::Duration;
use tracing::{error, info, warn};

const MARGIN: f32 = 20.0;
const PANEL_WIDTH: f32 = 340.0;
/// Fraction of a cell around each side that counts as clicking that edge
const EDGE_HIT: f32 = 0.25;

/// Command line overrides
struct Options {
    strategy: Option<Strategy>,
    layout_path: Option<String>,
    headless: bool,
}

fn parse_args() -> Options {
    let mut options = Options {
        strategy: None,
        layout_path: None,
        headless: false,
    };

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--strategy" => match args.next().as_deref().and_then(Strategy::from_name) {
                Some(strategy) => options.strategy = Some(strategy),
                None => warn!("--strategy expects backtracking or shortest-path"),
            },
            "--layout" => options.layout_path = args.next(),
            "--headless" => options.headless = true,
            other => warn!(argument = other, "ignoring unknown argument"),
        }
    }

    options
}

/// Grid, walls, layout path and strategy after applying command line overrides
fn load_setup(config: &Config, options: &Options) -> (Grid, ObstacleSet, String, Strategy) {
    let grid = config.maze.grid();
    let layout_path = options
        .layout_path
        .clone()
        .unwrap_or_else(|| config.maze.layout_path.clone());
    let walls = match layout::load_walls(&grid, &layout_path) {
        Ok(walls) => walls,
        Err(e) => {
            error!(path = %layout_path, error = %e, "failed to load layout, using an open maze");
            ObstacleSet::new()
        }
    };
    let strategy = options.strategy.unwrap_or(config.solver.strategy);
    (grid, walls, layout_path, strategy)
}

/// Solve in the terminal instead of opening a window
fn run_headless(config: &Config, options: &Options) {
    let (grid, walls, _, strategy) = load_setup(config, options);

    let mut sensor = ConsoleMaze::new(
        SimulatedMaze::new(grid, walls),
        Duration::from_millis(config.visual.step_delay_ms),
    );
    sensor.draw();

    let mut solver = Solver::with_grid(grid, sensor);
    let solved = solver.solve(strategy);
    let stats = solver.stats();
    println!(
        "{}: {} in {} moves, {} probes",
        strategy,
        if solved { "solved" } else { "cannot be solved" },
        stats.moves,
        stats.probes
    );

    let log = solver.into_sensor().into_maze().into_log();
    if config.logging.enable_move_log {
        if let Err(e) = log.save_to_file(&config.logging.move_log_path) {
            error!(path = %config.logging.move_log_path, error = %e, "failed to save move log");
        }
    }
    println!("{}", log.summary());
}

/// Run a complete solve against the true walls and keep the log for replay
fn run_solve(grid: Grid, walls: &ObstacleSet, strategy: Strategy) -> (bool, MoveLog) {
    let mut solver = Solver::with_grid(grid, SimulatedMaze::new(grid, walls.clone()));
    let solved = solver.solve(strategy);
    let stats = solver.stats();
    info!(%strategy, solved, moves = stats.moves, probes = stats.probes, "solve recorded");
    (solved, solver.into_sensor().into_log())
}

/// Visualization state
struct VisState {
    config: Config,
    grid: Grid,
    walls: ObstacleSet,
    strategy: Strategy,
    layout_path: String,
    solved: bool,
    log: MoveLog,
    replay: Replay,
    last_step: f64,
}

impl VisState {
    fn new(config: Config, options: &Options) -> Self {
        let (grid, walls, layout_path, strategy) = load_setup(&config, options);
        let (solved, log) = run_solve(grid, &walls, strategy);
        let replay = Replay::new(grid, log.events());

        VisState {
            config,
            grid,
            walls,
            strategy,
            layout_path,
            solved,
            log,
            replay,
            last_step: get_time(),
        }
    }

    fn cell_size(&self) -> f32 {
        self.config.visual.cell_size
    }

    /// Re-run the solver from the start and restart the replay
    fn rerun(&mut self) {
        let (solved, log) = run_solve(self.grid, &self.walls, self.strategy);
        self.replay = Replay::new(self.grid, log.events());
        self.solved = solved;
        self.log = log;
        self.last_step = get_time();
    }

    /// Top-left screen corner of a cell. Row 0 is drawn at the bottom.
    fn cell_origin(&self, cell: Cell) -> (f32, f32) {
        let (x, y) = self.grid.get_coords(cell);
        let size = self.cell_size();
        (
            MARGIN + x as f32 * size,
            MARGIN + (self.grid.rows - 1 - y) as f32 * size,
        )
    }

    /// Edge nearest to a click, if the click landed close to one
    fn edge_at(&self, mouse_x: f32, mouse_y: f32) -> Option<Obstacle> {
        let size = self.cell_size();
        let gx = (mouse_x - MARGIN) / size;
        let gy = (mouse_y - MARGIN) / size;
        if gx < 0.0 || gy < 0.0 || gx >= self.grid.cols as f32 || gy >= self.grid.rows as f32 {
            return None;
        }

        let x = gx as usize;
        let row_from_top = gy as usize;
        let cell = self.grid.get_id(x, self.grid.rows - 1 - row_from_top);
        let fx = gx.fract();
        let fy = gy.fract();

        let sides = [
            (fx, Direction::Left),
            (1.0 - fx, Direction::Right),
            (fy, Direction::Up),
            (1.0 - fy, Direction::Down),
        ];
        let (distance, direction) = sides
            .into_iter()
            .min_by(|a, b| a.0.total_cmp(&b.0))?;
        if distance > EDGE_HIT {
            return None;
        }

        self.grid
            .neighbor(cell, direction)
            .map(|neighbor| Obstacle::new(cell, neighbor))
    }

    fn handle_click(&mut self, mouse_x: f32, mouse_y: f32) {
        let Some(edge) = self.edge_at(mouse_x, mouse_y) else {
            return;
        };

        if !self.walls.remove(&edge) {
            self.walls.insert(edge);
        }
        info!(first = edge.first, second = edge.second, walls = self.walls.len(), "toggled wall");
        self.rerun();
    }

    fn toggle_strategy(&mut self) {
        self.strategy = self.strategy.toggled();
        info!(strategy = %self.strategy, "switched strategy");
        self.rerun();
    }

    fn copy_to_clipboard(&self) {
        let text = render_maze(&self.grid, &self.walls, self.replay.trail());
        match Clipboard::new() {
            Ok(mut clipboard) => {
                if let Err(e) = clipboard.set_text(&text) {
                    warn!(error = %e, "failed to copy to clipboard");
                } else {
                    info!("maze copied to clipboard");
                    // Keep clipboard alive for a moment so clipboard managers can capture it
                    std::thread::sleep(std::time::Duration::from_millis(100));
                }
            }
            Err(e) => warn!(error = %e, "failed to access clipboard"),
        }
    }

    fn save_layout(&self) {
        let path = if self.layout_path.ends_with(".json") {
            self.layout_path.clone()
        } else {
            format!("{}.json", self.layout_path.trim_end_matches(".txt"))
        };

        match Layout::new(&self.grid, &self.walls).save_to_file(&path) {
            Ok(()) => info!(path = %path, "layout saved"),
            Err(e) => error!(path = %path, error = %e, "failed to save layout"),
        }
    }

    fn save_move_log(&self) {
        if !self.config.logging.enable_move_log {
            return;
        }
        let path = &self.config.logging.move_log_path;
        if let Err(e) = self.log.save_to_file(path) {
            error!(path = %path, error = %e, "failed to save move log");
        }
    }

    fn update(&mut self) {
        let delay = self.config.visual.step_delay_ms as f64 / 1000.0;
        let now = get_time();
        if !self.replay.is_finished() && now - self.last_step >= delay {
            self.replay.advance();
            self.last_step = now;
        }
    }

    fn draw_edge(&self, edge: &Obstacle, color: Color) {
        let size = self.cell_size();
        let (ax, ay) = self.cell_origin(edge.first);
        if edge.second == edge.first + 1 {
            // Vertical wall on the right side of `first`
            draw_line(ax + size, ay, ax + size, ay + size, 5.0, color);
        } else {
            // Horizontal wall on the top side of `first`
            draw_line(ax, ay, ax + size, ay, 5.0, color);
        }
    }

    fn draw(&self) {
        let visual = &self.config.visual;
        clear_background(Color::from_rgba(
            visual.background_r,
            visual.background_g,
            visual.background_b,
            255,
        ));

        let size = self.cell_size();
        let trail = self.replay.trail();

        for cell in 0..self.grid.cell_count() {
            let (px, py) = self.cell_origin(cell);
            let color = if cell == self.grid.exit() {
                Color::from_rgba(60, 140, 60, 255)
            } else if trail.contains(&cell) {
                Color::from_rgba(70, 90, 130, 255)
            } else {
                Color::from_rgba(60, 60, 60, 255)
            };
            draw_rectangle(px, py, size - 1.0, size - 1.0, color);
            draw_text(&cell.to_string(), px + 4.0, py + 16.0, 18.0, LIGHTGRAY);
        }

        // True walls not yet found by the agent are dim, discovered ones red
        let known = self.replay.known_obstacles();
        for wall in self.walls.iter() {
            let color = if known.contains(wall) {
                RED
            } else {
                Color::from_rgba(110, 110, 110, 255)
            };
            self.draw_edge(wall, color);
        }

        let (px, py) = self.cell_origin(self.replay.position());
        draw_circle(px + size / 2.0, py + size / 2.0, size * 0.3, BLUE);

        let status = if !self.replay.is_finished() {
            "running"
        } else if self.solved {
            "solved"
        } else {
            "cannot be solved"
        };

        let panel_x = MARGIN * 2.0 + self.grid.cols as f32 * size;
        let info = [
            format!("Strategy: {}", self.strategy),
            format!("Walls: {}", self.walls.len()),
            format!("Moves: {}/{}", trail.len() - 1, self.log.move_count()),
            format!("Probes: {}", self.log.probe_count()),
            format!("Status: {}", status),
            String::new(),
            "Click an edge: toggle wall".to_string(),
            "Tab: switch strategy".to_string(),
            "Space: run again".to_string(),
            "Enter: skip to end".to_string(),
            "C: copy maze to clipboard".to_string(),
            "S: save layout".to_string(),
            "Esc: close window".to_string(),
        ];
        for (i, line) in info.iter().enumerate() {
            draw_text(line, panel_x, MARGIN + 20.0 + i as f32 * 22.0, 20.0, WHITE);
        }
    }
}

fn window_conf(config: &Config) -> Conf {
    let size = config.visual.cell_size;
    let grid = config.maze.grid();
    Conf {
        window_title: config.visual.window_title.clone(),
        window_width: (MARGIN * 3.0 + grid.cols as f32 * size + PANEL_WIDTH) as i32,
        window_height: (MARGIN * 2.0 + grid.rows as f32 * size).max(340.0) as i32,
        ..Default::default()
    }
}

fn main() {
    let config = Config::load();
    config.logging.init_tracing();
    let options = parse_args();

    if options.headless {
        run_headless(&config, &options);
        return;
    }

    macroquad::Window::from_config(window_conf(&config), run_window(config, options));
}

async fn run_window(config: Config, options: Options) {
    let mut state = VisState::new(config, &options);
    state.save_move_log();

    loop {
        if is_mouse_button_pressed(MouseButton::Left) {
            let (mouse_x, mouse_y) = mouse_position();
            state.handle_click(mouse_x, mouse_y);
            state.save_move_log();
        }

        if is_key_pressed(KeyCode::Tab) {
            state.toggle_strategy();
            state.save_move_log();
        }

        if is_key_pressed(KeyCode::Space) {
            state.rerun();
        }

        if is_key_pressed(KeyCode::Enter) {
            state.replay.finish();
        }

        // Copy maze to clipboard on C key
        if is_key_pressed(KeyCode::C) {
            state.copy_to_clipboard();
        }

        if is_key_pressed(KeyCode::S) {
            state.save_layout();
        }

        // Close window on Escape
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        state.update();
        state.draw();

        next_frame().await
    }
}
