//! Mobile menu state machine
//!
//! `is_open` is the logical state. The panel additionally stays mounted
//! while its exit animation runs; `epoch` increments on every transition
//! so a timer started for an older close can never unmount a panel that
//! was reopened in the meantime.

/// Result of a state change, used to schedule the exit timer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuTransition {
    Opened,
    /// Closed; the exit animation for this epoch must be finished later
    Closing(u64),
    Unchanged,
}

/// Visual phase of the mobile panel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelPhase {
    Hidden,
    Entering,
    Exiting,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    is_open: bool,
    epoch: u64,
    exiting: Option<u64>,
    current_path: Option<String>,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn toggle(&mut self) -> MenuTransition {
        if self.is_open {
            self.begin_close()
        } else {
            self.is_open = true;
            self.epoch += 1;
            self.exiting = None;
            MenuTransition::Opened
        }
    }

    /// Close unconditionally. Closing a closed menu changes nothing.
    pub fn close(&mut self) -> MenuTransition {
        if self.is_open {
            self.begin_close()
        } else {
            MenuTransition::Unchanged
        }
    }

    /// Observe the current router path; a different path closes the menu.
    ///
    /// The first observation only records the path.
    pub fn observe_path(&mut self, path: &str) -> MenuTransition {
        match self.current_path.as_deref() {
            Some(previous) if previous == path => MenuTransition::Unchanged,
            Some(_) => {
                self.current_path = Some(path.to_string());
                self.close()
            }
            None => {
                self.current_path = Some(path.to_string());
                MenuTransition::Unchanged
            }
        }
    }

    /// Called when the exit animation started at `epoch` has run its course
    pub fn finish_exit(&mut self, epoch: u64) -> bool {
        if self.exiting == Some(epoch) {
            self.exiting = None;
            true
        } else {
            false
        }
    }

    pub fn is_panel_mounted(&self) -> bool {
        self.is_open || self.exiting.is_some()
    }

    pub fn panel_phase(&self) -> PanelPhase {
        if self.is_open {
            PanelPhase::Entering
        } else if self.exiting.is_some() {
            PanelPhase::Exiting
        } else {
            PanelPhase::Hidden
        }
    }

    fn begin_close(&mut self) -> MenuTransition {
        self.is_open = false;
        self.epoch += 1;
        self.exiting = Some(self.epoch);
        MenuTransition::Closing(self.epoch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        let state = MenuState::new();
        assert!(!state.is_open());
        assert!(!state.is_panel_mounted());
        assert_eq!(state.panel_phase(), PanelPhase::Hidden);
    }

    #[test]
    fn test_double_toggle_restores_state() {
        let mut state = MenuState::new();
        assert_eq!(state.toggle(), MenuTransition::Opened);
        assert!(state.is_open());
        assert!(matches!(state.toggle(), MenuTransition::Closing(_)));
        assert!(!state.is_open());

        let mut opened = MenuState::new();
        opened.toggle();
        opened.toggle();
        opened.toggle();
        assert!(opened.is_open());
    }

    #[test]
    fn test_route_change_closes_open_menu() {
        let mut state = MenuState::new();
        state.observe_path("/about");
        state.toggle();
        assert!(state.is_open());

        let transition = state.observe_path("/contact");
        assert!(matches!(transition, MenuTransition::Closing(_)));
        assert!(!state.is_open());
    }

    #[test]
    fn test_every_route_change_leaves_menu_closed() {
        let mut state = MenuState::new();
        let paths = ["/", "/about", "/contributors", "/contact", "/", "/dashboard"];
        for (i, path) in paths.iter().enumerate() {
            if i % 2 == 0 {
                state.toggle();
            }
            state.observe_path(path);
            if i > 0 {
                assert!(!state.is_open(), "menu open after navigating to {path}");
            }
        }
    }

    #[test]
    fn test_same_path_is_not_a_change() {
        let mut state = MenuState::new();
        state.observe_path("/about");
        state.toggle();
        assert_eq!(state.observe_path("/about"), MenuTransition::Unchanged);
        assert!(state.is_open());
    }

    #[test]
    fn test_close_on_closed_menu_is_noop() {
        let mut state = MenuState::new();
        assert_eq!(state.close(), MenuTransition::Unchanged);
        assert_eq!(state.epoch(), 0);
    }

    #[test]
    fn test_exit_phase_until_finished() {
        let mut state = MenuState::new();
        state.toggle();
        assert_eq!(state.panel_phase(), PanelPhase::Entering);

        let MenuTransition::Closing(epoch) = state.toggle() else {
            panic!("expected closing transition");
        };
        assert_eq!(state.panel_phase(), PanelPhase::Exiting);
        assert!(state.is_panel_mounted());

        assert!(state.finish_exit(epoch));
        assert_eq!(state.panel_phase(), PanelPhase::Hidden);
        assert!(!state.is_panel_mounted());
    }

    #[test]
    fn test_stale_exit_does_not_unmount_reopened_panel() {
        let mut state = MenuState::new();
        state.toggle();
        let MenuTransition::Closing(stale) = state.toggle() else {
            panic!("expected closing transition");
        };

        // reopened before the exit animation finished
        state.toggle();
        assert!(!state.finish_exit(stale));
        assert!(state.is_open());
        assert!(state.is_panel_mounted());

        let MenuTransition::Closing(current) = state.toggle() else {
            panic!("expected closing transition");
        };
        assert!(!state.finish_exit(stale));
        assert!(state.is_panel_mounted());
        assert!(state.finish_exit(current));
        assert!(!state.is_panel_mounted());
    }
}
