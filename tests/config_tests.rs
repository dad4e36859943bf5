use maze_runner::config::Config;
use maze_runner::{Grid, Strategy};

#[test]
fn test_defaults() {
    let config = Config::default();

    assert_eq!(config.maze.grid(), Grid::new(5, 5));
    assert_eq!(config.maze.layout_path, "maze.txt");
    assert_eq!(config.solver.strategy, Strategy::Backtracking);
    assert_eq!(config.visual.step_delay_ms, 400);
    assert_eq!(config.logging.filter, "info");
    assert!(!config.logging.enable_move_log);
}

#[test]
fn test_partial_file_keeps_defaults() {
    let config = Config::from_toml_str(
        r#"
[maze]
cols = 8

[solver]
strategy = "shortest_path_correction"
"#,
    )
    .unwrap();

    assert_eq!(config.maze.grid(), Grid::new(8, 5));
    assert_eq!(config.solver.strategy, Strategy::ShortestPathCorrection);
    assert_eq!(config.visual.cell_size, 80.0);
    assert_eq!(config.logging.move_log_path, "move_log.json");
}

#[test]
fn test_invalid_values_are_errors() {
    assert!(Config::from_toml_str("[solver]\nstrategy = \"teleport\"\n").is_err());
    assert!(Config::from_toml_str("[maze\ncols = 5").is_err());
}

#[test]
fn test_zero_size_falls_back() {
    let config = Config::from_toml_str("[maze]\ncols = 0\n").unwrap();
    assert_eq!(config.maze.grid(), Grid::default());
}

#[test]
fn test_missing_file_uses_defaults() {
    let config = Config::load_from("definitely/not/here.toml");
    assert_eq!(config.maze.grid(), Grid::default());
}

#[test]
fn test_bundled_config_parses() {
    let contents = std::fs::read_to_string("config.toml").unwrap();
    let config = Config::from_toml_str(&contents).unwrap();
    assert_eq!(config.maze.layout_path, "mazes/detour.txt");
    assert_eq!(config.solver.strategy, Strategy::ShortestPathCorrection);
}

#[test]
fn test_strategy_names() {
    assert_eq!(Strategy::from_name("backtracking"), Some(Strategy::Backtracking));
    assert_eq!(Strategy::from_name("Shortest-Path"), Some(Strategy::ShortestPathCorrection));
    assert_eq!(Strategy::from_name("shortest_path_correction"), Some(Strategy::ShortestPathCorrection));
    assert_eq!(Strategy::from_name("astar"), None);
    assert_eq!(Strategy::Backtracking.toggled(), Strategy::ShortestPathCorrection);
}
