use std::process;

use log::error;

pub mod error;
pub mod modules;
pub mod utilities;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = modules::run() {
        error!("simulation failed: {}", err);
        process::exit(1);
    }
}
