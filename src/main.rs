use anyhow::Result;
use std::env;

use wrestling_standings::{run, RunConfig};

fn main() -> Result<()> {
    env_logger::init();

    let config = RunConfig::from_args(env::args().skip(1));
    run(&config)
}
