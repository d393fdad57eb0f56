//! Property tests for tree isomorphism.

use proptest::prelude::*;

use menu_mirror::domain::entities::{count_nodes, without_unsupported};
use menu_mirror::{clone_menu, ProxyMenu};

use crate::strategies::{build, count_unsupported, group_sizes, menu};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The proxy tree matches the source, minus unsupported nodes.
    #[test]
    fn property_clone_is_isomorphic(specs in menu()) {
        let source = build(&specs);
        let target = ProxyMenu::new("mirror");

        let summary = clone_menu(&source, &target).unwrap();

        let shape = target.shape();
        prop_assert_eq!(&shape, &without_unsupported(&source.shape()));
        prop_assert_eq!(summary.node_count(), count_nodes(&shape));
        prop_assert_eq!(summary.skipped, count_unsupported(&specs));
    }

    /// PROPERTY: Cloning twice into one target equals cloning once.
    #[test]
    fn property_reclone_is_not_cumulative(specs in menu()) {
        let source = build(&specs);
        let once = ProxyMenu::new("once");
        let twice = ProxyMenu::new("twice");

        clone_menu(&source, &once).unwrap();
        clone_menu(&source, &twice).unwrap();
        clone_menu(&source, &twice).unwrap();

        prop_assert_eq!(once.shape(), twice.shape());
        prop_assert_eq!(twice.groups().len(), group_sizes(&specs).len());
    }
}
