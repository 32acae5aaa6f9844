use std::path::PathBuf;
use std::process;

use clap::Parser;

use tick::io::config_io::load_config;
use tick::io::list_io::DEFAULT_FILE;

#[derive(Parser)]
#[command(name = "tick", about = concat!("[x] tick v", env!("CARGO_PKG_VERSION"), " - your to-do list is plain text"), version)]
struct Cli {
    /// Task file to open (default: `file` from tick.toml, or tasks.txt)
    file: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let cwd = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };

    let config = match load_config(&cwd) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };

    let path = cli
        .file
        .or_else(|| config.file.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_FILE));

    if let Err(e) = tick::tui::run(path, &config) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
