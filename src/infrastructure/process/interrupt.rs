//! Ctrl-C handling
//!
//! While a child runs, the terminal delivers SIGINT to the whole foreground
//! process group. The driver keeps running so it can collect the child's exit
//! status, then stops the remaining sequence.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared "Ctrl-C was pressed" flag
#[derive(Debug, Clone, Default)]
pub struct InterruptFlag(Arc<AtomicBool>);

impl InterruptFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the process-wide Ctrl-C handler that sets this flag
    pub fn install(&self) -> Result<(), ctrlc::Error> {
        let flag = self.0.clone();
        ctrlc::set_handler(move || {
            flag.store(true, Ordering::SeqCst);
        })
    }

    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    pub fn set(&self) {
        self.0.store(true, Ordering::SeqCst);
    }
}
