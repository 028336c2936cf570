mod app;
mod error;
mod identicon;
mod render;
mod terminal;

use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};

use crate::app::App;
use crate::error::AppError;
use crate::terminal::Terminal;

fn main() {
    let log_file = File::create("chipline-tui.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let mut terminal = Terminal::new()?;
    App::new().run(&mut terminal)
}
