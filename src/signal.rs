use crate::error::Result;
use log::debug;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared flag raised when the user asks the process to stop
#[derive(Debug, Clone, Default)]
pub struct Interrupt {
    flag: Arc<AtomicBool>,
}

impl Interrupt {
    /// A flag with no handler attached; only [`Interrupt::trigger`] raises it
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise the returned flag on SIGINT, SIGTERM or SIGHUP.
    ///
    /// Only one handler can exist per process, so a second call fails with
    /// [`crate::Error::Signal`].
    pub fn install() -> Result<Self> {
        let interrupt = Self::new();
        let flag = Arc::clone(&interrupt.flag);
        ctrlc::set_handler(move || {
            flag.store(true, Ordering::SeqCst);
        })?;
        debug!("interrupt handler installed");
        Ok(interrupt)
    }

    pub fn trigger(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_triggered(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}
