//! Repository Implementations

mod receipt;

pub use receipt::JsonReceiptRepository;
