//! Domain Entities
//!
//! - `InstallReceipt` - Paths written by the last install, in install order

mod receipt;

pub(crate) use receipt::checksum_paths;
pub use receipt::{parse_manifest, InstallReceipt, ReceiptStatus, RECEIPT_VERSION};
