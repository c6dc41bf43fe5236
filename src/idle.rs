use crate::signal::Interrupt;
use std::thread;
use std::time::Duration;

/// Pause between interrupt checks while idling
pub const IDLE_INTERVAL: Duration = Duration::from_secs(1);

/// Block until `interrupt` is raised, sleeping `interval` between checks.
///
/// Returns the number of sleeps taken.
pub fn wait_until_interrupted(interrupt: &Interrupt, interval: Duration) -> usize {
    let mut ticks = 0;
    while !interrupt.is_triggered() {
        thread::sleep(interval);
        ticks += 1;
    }
    ticks
}
