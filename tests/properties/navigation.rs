//! Property tests for the navigation shell state machine.

use proptest::prelude::*;

use folio::ui::shell::{NavShell, SCROLL_THRESHOLD};
use folio::ui::SectionId;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The scrolled flag tracks the threshold exactly, for any
    /// sequence of scroll offsets.
    #[test]
    fn property_scrolled_matches_threshold(offsets in proptest::collection::vec(0usize..10_000, 1..32)) {
        let mut shell = NavShell::new();
        for offset in &offsets {
            shell.on_scroll(*offset);
            prop_assert_eq!(shell.scrolled, *offset > SCROLL_THRESHOLD);
        }
    }

    /// PROPERTY: Navigation always closes the menu, whether or not the
    /// target resolves.
    #[test]
    fn property_navigate_always_closes_menu(
        menu_open in any::<bool>(),
        resolves in any::<bool>(),
        anchor in 0usize..100_000,
    ) {
        let mut shell = NavShell::new();
        if menu_open {
            shell.toggle_menu();
        }
        let hit = shell.navigate(SectionId::Projects, |_| resolves.then_some(anchor));
        prop_assert!(!shell.menu_open);
        prop_assert_eq!(hit, resolves.then_some(anchor));
    }

    /// PROPERTY: Cursor movement stays within the nav items for any
    /// sequence of up/down steps.
    #[test]
    fn property_cursor_stays_in_bounds(steps in proptest::collection::vec(any::<bool>(), 0..64)) {
        let mut shell = NavShell::new();
        shell.toggle_menu();
        for up in steps {
            if up {
                shell.cursor_up();
            } else {
                shell.cursor_down();
            }
            prop_assert!(shell.cursor < 5);
            let _ = shell.selected();
        }
    }
}
