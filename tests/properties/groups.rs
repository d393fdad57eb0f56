//! Property tests for rebuilt exclusive groups.

use proptest::prelude::*;
use proptest::sample::Index;

use menu_mirror::{clone_menu, ProxyMenu};

use crate::strategies::{build, group_sizes, menu, proxy_actions, source_actions};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: One proxy group per key, holding exactly the keyed items.
    #[test]
    fn property_one_group_per_key(specs in menu()) {
        let source = build(&specs);
        let target = ProxyMenu::new("mirror");

        let summary = clone_menu(&source, &target).unwrap();

        let expected = group_sizes(&specs);
        prop_assert_eq!(summary.groups, expected.len());
        prop_assert_eq!(target.groups().len(), expected.len());
        for group in target.groups() {
            prop_assert_eq!(Some(&group.len()), expected.get(group.key().as_str()));
        }

        let sources = source_actions(&source);
        for (source_item, proxy) in sources.iter().zip(proxy_actions(&target)) {
            let proxy_key = proxy.exclusive_group().map(|g| g.key().clone());
            prop_assert_eq!(proxy_key, source_item.exclusive_group());
        }
    }

    /// PROPERTY: No group ever has more than one checked member.
    #[test]
    fn property_at_most_one_checked(
        specs in menu(),
        checks in proptest::collection::vec(any::<Index>(), 0..10),
    ) {
        let source = build(&specs);
        let target = ProxyMenu::new("mirror");
        clone_menu(&source, &target).unwrap();

        let grouped: Vec<_> = source_actions(&source)
            .into_iter()
            .filter(|a| a.exclusive_group().is_some())
            .collect();

        let assert_single = |target: &ProxyMenu| -> Result<(), TestCaseError> {
            for group in target.groups() {
                let checked = group.members().iter().filter(|m| m.is_checked()).count();
                prop_assert!(checked <= 1, "group {} has {} checked", group.key(), checked);
            }
            Ok(())
        };

        assert_single(&target)?;
        if grouped.is_empty() {
            return Ok(());
        }
        for index in checks {
            let item = &grouped[index.index(grouped.len())];
            item.set_checked(false);
            item.set_checked(true);
            assert_single(&target)?;
        }
    }

    /// PROPERTY: Any sequence of proxy activations leaves every proxy
    /// showing its source's check state, with one checked member per group.
    #[test]
    fn property_activations_keep_proxies_in_step(
        specs in menu(),
        clicks in proptest::collection::vec(any::<Index>(), 0..12),
    ) {
        let source = build(&specs);
        let target = ProxyMenu::new("mirror");
        clone_menu(&source, &target).unwrap();

        let sources = source_actions(&source);
        let proxies = proxy_actions(&target);
        if proxies.is_empty() {
            return Ok(());
        }

        for click in clicks {
            proxies[click.index(proxies.len())].activate();

            for (source_item, proxy) in sources.iter().zip(&proxies) {
                prop_assert_eq!(proxy.is_checked(), source_item.is_checked());
            }
            for group in target.groups() {
                let checked = group.members().iter().filter(|m| m.is_checked()).count();
                prop_assert!(checked <= 1);
            }
        }
    }
}
