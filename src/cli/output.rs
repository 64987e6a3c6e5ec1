//! Output formatting for the CLI
//!
//! ASCII rendering of the maze grid and of the best learned utility per
//! tile, for headless runs.

use crate::{agent::Agent, maze::Maze, types::{Direction, Position}};

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Render the maze grid: `#` for blocked tiles, `.` for neutral tiles,
/// the reward value for anything else.
pub fn render_maze(maze: &Maze) -> String {
    let mut out = String::new();
    for y in 0..maze.height() as i32 {
        for x in 0..maze.width() as i32 {
            let cell = match maze.tile_value(x, y) {
                -1 => "   #".to_string(),
                0 => "   .".to_string(),
                v => format!("{v:>4}"),
            };
            out.push_str(&cell);
        }
        out.push('\n');
    }
    out
}

/// Render the best learned utility per tile, `----` where nothing was learned.
pub fn render_best_utilities(maze: &Maze, agent: &Agent) -> String {
    let mut out = String::new();
    for y in 0..maze.height() as i32 {
        for x in 0..maze.width() as i32 {
            let position = Position::new(x, y);
            let best = Direction::ALL
                .iter()
                .map(|&d| agent.q_value(position, d))
                .fold(f64::NEG_INFINITY, f64::max);
            if best == 0.0 || best == f64::NEG_INFINITY {
                out.push_str("    ----");
            } else {
                out.push_str(&format!("{best:>8.2}"));
            }
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimulationConfig;

    #[test]
    fn render_marks_blocked_and_goal_tiles() {
        let maze = Maze::from_rows(vec![vec![0, -1], vec![0, 10]]).unwrap();
        let rendered = render_maze(&maze);
        assert_eq!(rendered, "   .   #\n   .  10\n");
    }

    #[test]
    fn unlearned_tiles_render_as_dashes() {
        let maze = Maze::from_rows(vec![vec![0, 10]]).unwrap();
        let agent = Agent::new(&maze, &SimulationConfig::new().with_seed(1)).unwrap();
        let rendered = render_best_utilities(&maze, &agent);
        assert!(rendered.contains("----"));
    }
}
