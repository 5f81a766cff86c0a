//! Property tests for target expansion.

use proptest::prelude::*;

use buildcycle::domain::services::expand_targets;
use buildcycle::Target;

fn target() -> impl Strategy<Value = Target> {
    proptest::sample::select(Target::ALL.to_vec())
}

proptest! {
    /// PROPERTY: every requested target runs exactly once.
    #[test]
    fn property_expansion_runs_each_target_once(
        targets in proptest::collection::vec(target(), 0..=10),
    ) {
        let order = expand_targets(&targets);

        for t in &targets {
            prop_assert_eq!(order.iter().filter(|o| *o == t).count(), 1);
        }
    }

    /// PROPERTY: a prerequisite always runs before the target needing it.
    #[test]
    fn property_prerequisites_come_first(
        targets in proptest::collection::vec(target(), 0..=10),
    ) {
        let order = expand_targets(&targets);

        for (i, t) in order.iter().enumerate() {
            for pre in t.prerequisites() {
                let pos = order.iter().position(|o| o == pre);
                prop_assert!(matches!(pos, Some(p) if p < i), "{:?} before {:?}", pre, t);
            }
        }
    }

    /// PROPERTY: nothing is added except requested targets and their prerequisites.
    #[test]
    fn property_expansion_adds_only_prerequisites(
        targets in proptest::collection::vec(target(), 0..=10),
    ) {
        let order = expand_targets(&targets);

        for o in &order {
            let requested = targets.contains(o);
            let needed = targets.iter().any(|t| t.prerequisites().contains(o));
            prop_assert!(requested || needed);
        }
    }
}
