//! Install use case

mod result;
mod use_case;

pub use result::{InstallResult, ReceiptSummary};
pub use use_case::InstallUseCase;
