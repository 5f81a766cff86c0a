//! Property tests for rendering invocations as shell command lines.

use proptest::prelude::*;

use buildcycle::domain::value_objects::render_command_line;

fn word() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9/._\\-]{1,12}").unwrap()
}

proptest! {
    /// PROPERTY: plain words are rendered unquoted, joined by single spaces.
    #[test]
    fn property_plain_words_render_verbatim(
        argv in proptest::collection::vec(word(), 1..=8),
    ) {
        prop_assert_eq!(render_command_line(&argv), argv.join(" "));
    }

    /// PROPERTY: rendering never panics and never loses an argument's text.
    #[test]
    fn property_render_keeps_text(
        argv in proptest::collection::vec("[ -~]{0,16}", 0..=6),
    ) {
        let line = render_command_line(&argv);
        for arg in &argv {
            for part in arg.split('\'') {
                prop_assert!(line.contains(part));
            }
        }
    }
}
