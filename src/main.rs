use log::LevelFilter;
use simpsons_tv::{DISPLAY_TEXT, IDLE_INTERVAL, Interrupt, Screen};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .target(env_logger::Target::Stderr)
        .init();

    // Before drawing, so an early Ctrl+C still restores the cursor
    let interrupt = Interrupt::install()?;

    simpsons_tv::run(Screen::stdout(), DISPLAY_TEXT, &interrupt, IDLE_INTERVAL)?;

    Ok(())
}
