// src/main.rs
use anyhow::Result;
use clap::Parser as _;

use charhist::Args;

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    charhist::run(args)
}
