use std::io::{self, Write};

use env_logger::Env;
use log::info;
use rs_algo_core::config::ExerciseConfig;
use rs_algo_core::exercise::Exercises;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    // 10 samples in 0..=1000, words.txt, words2.txt and vec.txt in the current directory
    let config = ExerciseConfig::default();

    let mut exercises = Exercises::new(config)?;
    info!("settings: {:?}", exercises.config());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Missing word files or an unwritable vec.txt only skip their steps
    exercises.run(&mut out)?;
    out.flush()?;

    Ok(())
}
