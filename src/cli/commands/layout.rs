//! Layout command - print the built-in maze layout

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::output::{print_kv, print_section, render_maze},
    maze::Maze,
};

#[derive(Parser, Debug)]
#[command(about = "Print the built-in maze layout")]
pub struct LayoutArgs {}

pub fn execute(_args: LayoutArgs) -> Result<()> {
    let maze = Maze::default_layout();

    print_section("Built-in maze layout");
    print_kv("Width", &maze.width().to_string());
    print_kv("Height", &maze.height().to_string());
    print_kv("Goal", &maze.goal().to_string());
    println!();
    print!("{}", render_maze(&maze));

    Ok(())
}
