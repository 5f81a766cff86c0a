//! Test fixtures shared across CLI tests

/// The two-path manifest from the classic uninstall walkthrough
pub const TWO_PATH_MANIFEST: &str = "/usr/local/lib/pkg/a.so\n/usr/local/bin/pkgtool\n";

/// Fake `python`: logs its argv, honors `FAKE_BUILD_EXIT` / `FAKE_INSTALL_EXIT`,
/// and on install writes `FAKE_INSTALLED` (printf `%b` escapes) to the
/// `--record` file.
pub const FAKE_PYTHON: &str = r#"#!/bin/sh
echo "python $*" >> "$BUILDCYCLE_TEST_LOG"
case "$2" in
  build)
    exit "${FAKE_BUILD_EXIT:-0}"
    ;;
  install)
    if [ -n "$FAKE_INSTALLED" ]; then
      printf '%b' "$FAKE_INSTALLED" > "$4"
    fi
    exit "${FAKE_INSTALL_EXIT:-0}"
    ;;
esac
exit 0
"#;

/// Fake `tox`: logs its argv, exits with `FAKE_TOX_EXIT`
pub const FAKE_TOX: &str = r#"#!/bin/sh
echo "tox $*" >> "$BUILDCYCLE_TEST_LOG"
exit "${FAKE_TOX_EXIT:-0}"
"#;

/// Fake `git`: logs its argv, exits with `FAKE_GIT_EXIT`
pub const FAKE_GIT: &str = r#"#!/bin/sh
echo "git $*" >> "$BUILDCYCLE_TEST_LOG"
exit "${FAKE_GIT_EXIT:-0}"
"#;

/// Fake `rm`: logs its argv, fails with 1 for the path in `FAKE_RM_FAIL`
pub const FAKE_RM: &str = r#"#!/bin/sh
echo "rm $*" >> "$BUILDCYCLE_TEST_LOG"
for last; do :; done
if [ -n "$FAKE_RM_FAIL" ] && [ "$last" = "$FAKE_RM_FAIL" ]; then
  exit 1
fi
exit 0
"#;
