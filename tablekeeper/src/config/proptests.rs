//! Property-based tests for configuration merging and validation.

use super::{Config, ConfigMerger, ConfigValidator};
use crate::restaurant::{UnknownTablePolicy, WaitlistPolicy};
use proptest::prelude::*;

fn waitlist_policy() -> impl Strategy<Value = Option<WaitlistPolicy>> {
    prop::option::of(prop_oneof![
        Just(WaitlistPolicy::SkipStale),
        Just(WaitlistPolicy::HeadOnly),
    ])
}

fn unknown_table() -> impl Strategy<Value = Option<UnknownTablePolicy>> {
    prop::option::of(prop_oneof![
        Just(UnknownTablePolicy::Ignore),
        Just(UnknownTablePolicy::Error),
    ])
}

fn config() -> impl Strategy<Value = Config> {
    (prop::option::of(0u32..2000), waitlist_policy(), unknown_table()).prop_map(
        |(tables, waitlist_policy, unknown_table)| Config {
            tables,
            waitlist_policy,
            unknown_table,
        },
    )
}

proptest! {
    // Every set field of the higher source survives; unset fields fall through.
    #[test]
    fn merge_prefers_set_fields(low in config(), high in config()) {
        let mut merged = low.clone();
        ConfigMerger::merge_into(&mut merged, &high);

        prop_assert_eq!(merged.tables, high.tables.or(low.tables));
        prop_assert_eq!(merged.waitlist_policy, high.waitlist_policy.or(low.waitlist_policy));
        prop_assert_eq!(merged.unknown_table, high.unknown_table.or(low.unknown_table));
    }

    #[test]
    fn merge_with_self_is_identity(c in config()) {
        let mut merged = c.clone();
        ConfigMerger::merge_into(&mut merged, &c);
        prop_assert_eq!(merged, c);
    }

    #[test]
    fn validation_matches_table_limit(c in config()) {
        let expected = c.tables.map_or(true, |t| t <= Config::MAX_TABLES);
        prop_assert_eq!(ConfigValidator::validate(&c).is_ok(), expected);
    }
}
