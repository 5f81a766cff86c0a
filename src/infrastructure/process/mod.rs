//! Process Runner Implementations

mod interrupt;
mod system;

pub use interrupt::InterruptFlag;
pub use system::SystemProcessRunner;
