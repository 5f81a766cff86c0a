//! Property tests for manifest parsing and receipt bookkeeping.

use std::path::PathBuf;

use proptest::prelude::*;

use buildcycle::domain::entities::parse_manifest;
use buildcycle::{InstallReceipt, ReceiptStatus};

fn install_path() -> impl Strategy<Value = String> {
    // Absolute, printable, may contain interior spaces; never blank.
    proptest::string::string_regex("/[A-Za-z0-9_ .\\-]{0,20}(/[A-Za-z0-9_.\\-]{1,12}){0,3}")
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every recorded path comes back once, in file order.
    #[test]
    fn property_manifest_preserves_order(
        paths in proptest::collection::vec(install_path(), 0..=16),
        crlf in any::<bool>(),
    ) {
        let newline = if crlf { "\r\n" } else { "\n" };
        let text: String = paths.iter().map(|p| format!("{p}{newline}")).collect();

        let parsed = parse_manifest(&text);

        let expected: Vec<PathBuf> = paths.iter().map(PathBuf::from).collect();
        prop_assert_eq!(parsed, expected);
    }

    /// PROPERTY: blank lines never become removal targets.
    #[test]
    fn property_manifest_skips_blank_lines(
        paths in proptest::collection::vec(install_path(), 0..=8),
        blanks in proptest::collection::vec("[ \t]{0,3}", 0..=8),
    ) {
        let mut lines: Vec<String> = Vec::new();
        for (i, path) in paths.iter().enumerate() {
            if let Some(blank) = blanks.get(i) {
                lines.push(blank.clone());
            }
            lines.push(path.clone());
        }
        let parsed = parse_manifest(&lines.join("\n"));

        prop_assert_eq!(parsed.len(), paths.len());
        prop_assert!(parsed.iter().all(|p| !p.as_os_str().is_empty()));
    }

    /// PROPERTY: `parse_manifest` never panics on arbitrary input.
    #[test]
    fn property_manifest_never_panics(text in "(?s).{0,256}") {
        let _ = parse_manifest(&text);
    }

    /// PROPERTY: dropping removed paths keeps the rest, in order.
    #[test]
    fn property_retain_unremoved_keeps_order(
        paths in proptest::collection::vec(install_path(), 0..=12),
        mask in proptest::collection::vec(any::<bool>(), 12),
    ) {
        let paths: Vec<PathBuf> = paths.iter().map(PathBuf::from).collect();
        let removed: Vec<PathBuf> = paths
            .iter()
            .zip(&mask)
            .filter(|(_, gone)| **gone)
            .map(|(p, _)| p.clone())
            .collect();

        let mut receipt = InstallReceipt::new(ReceiptStatus::Complete, paths.clone());
        receipt.retain_unremoved(&removed);

        let expected: Vec<PathBuf> = paths.into_iter().filter(|p| !removed.contains(p)).collect();
        prop_assert_eq!(receipt.paths(), expected.as_slice());
    }
}
