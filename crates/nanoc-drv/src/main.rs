use std::process::exit;

use nanoc_drv::{run, Config};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            exit(1);
        }
    };

    if let Err(e) = run(&config) {
        eprintln!("{e}");
        exit(1);
    }
}
