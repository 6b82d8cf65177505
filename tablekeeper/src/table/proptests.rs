//! Property-based tests for `TableNumber` and `Table`.

use super::{Table, TableNumber};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    #[test]
    fn table_number_accepts_positive(value in TableNumber::MIN..=u32::MAX) {
        let number = TableNumber::try_from(value);
        prop_assert!(number.is_ok());
        prop_assert_eq!(number.unwrap().value(), value);
    }

    #[test]
    fn table_number_order_matches_value(a in 1u32..10_000, b in 1u32..10_000) {
        let na = TableNumber::try_from(a).unwrap();
        let nb = TableNumber::try_from(b).unwrap();
        prop_assert_eq!(na.cmp(&nb), a.cmp(&b));
    }

    // Availability only depends on the last transition applied.
    #[test]
    fn table_availability_follows_last_transition(ops in prop::collection::vec(any::<bool>(), 0..32)) {
        let mut table = Table::new(TableNumber::try_from(1).unwrap());
        for &reserve in &ops {
            if reserve {
                table.reserve();
            } else {
                table.release();
            }
        }
        let expected = ops.last().map_or(true, |&reserve| !reserve);
        prop_assert_eq!(table.is_available(), expected);
    }
}
