//! Property-based tests for appcart
//!
//! Uses proptest to verify invariants of install command construction and
//! checklist navigation.

use proptest::prelude::*;

use appcart::app::AppState;
use appcart::catalog;
use appcart::install::InstallPlan;
use appcart::manager::PackageManager;

/// Strategy for generating a package manager variant
fn manager_strategy() -> impl Strategy<Value = PackageManager> {
    prop_oneof![
        Just(PackageManager::Apt),
        Just(PackageManager::Dnf),
        Just(PackageManager::Pacman),
    ]
}

/// Strategy for generating plausible package identifiers
fn package_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z][a-z0-9.-]{0,20}", 1..20)
}

proptest! {
    /// Every selected package appears in the argv, after the fixed prefix,
    /// in selection order.
    #[test]
    fn argv_contains_all_packages_in_order(
        manager in manager_strategy(),
        packages in package_strategy(),
    ) {
        let plan = InstallPlan::from_packages(manager, packages.clone(), false)
            .expect("non-empty package list");
        let argv = plan.argv();
        let prefix_len = manager.install_prefix().len();

        prop_assert_eq!(&argv[..prefix_len], manager.install_prefix());
        prop_assert_eq!(&argv[prefix_len..], &packages[..]);
    }

    /// The argv never contains empty arguments, and the command always
    /// starts with sudo and the manager binary.
    #[test]
    fn argv_is_well_formed(
        manager in manager_strategy(),
        packages in package_strategy(),
    ) {
        let plan = InstallPlan::from_packages(manager, packages, true)
            .expect("non-empty package list");
        let argv = plan.argv();

        prop_assert!(argv.iter().all(|a| !a.is_empty()));
        prop_assert_eq!(argv[0].as_str(), "sudo");
        prop_assert_eq!(argv[1].as_str(), manager.binary());
    }

    /// The dry-run flag never changes the command line itself.
    #[test]
    fn dry_run_does_not_alter_command(
        manager in manager_strategy(),
        packages in package_strategy(),
    ) {
        let live = InstallPlan::from_packages(manager, packages.clone(), false).unwrap();
        let dry = InstallPlan::from_packages(manager, packages, true).unwrap();
        prop_assert_eq!(live.command_line(), dry.command_line());
    }
}

proptest! {
    /// Toggling an arbitrary sequence of entries twice each restores an
    /// empty selection.
    #[test]
    fn double_toggle_is_identity(
        indices in prop::collection::vec(0..catalog::entry_count(), 0..64)
    ) {
        let mut state = AppState::default();
        for &i in &indices {
            state.selected[i] = !state.selected[i];
        }
        for &i in &indices {
            state.selected[i] = !state.selected[i];
        }
        prop_assert_eq!(state.selected_count(), 0);
    }

    /// Selected entries always come back in catalog order regardless of
    /// the order they were toggled in.
    #[test]
    fn selection_snapshot_is_catalog_ordered(
        mut indices in prop::collection::vec(0..catalog::entry_count(), 1..20)
    ) {
        let mut state = AppState::default();
        for &i in &indices {
            state.selected[i] = true;
        }

        indices.sort_unstable();
        indices.dedup();
        let expected: Vec<&str> = indices
            .iter()
            .filter_map(|&i| catalog::entry_at(i))
            .map(|(_, e)| e.pkg)
            .collect();
        let actual: Vec<&str> = state.selected_entries().iter().map(|e| e.pkg).collect();
        prop_assert_eq!(actual, expected);
    }
}
