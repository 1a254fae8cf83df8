use dioxus::prelude::*;

use crate::domain::models::{MenuState, MenuTransition, PanelPhase};
use crate::shared::config::TransitionConfig;
use crate::shared::logging;
use crate::shared::utils::prefers_reduced_motion;

/// Mobile menu state owned by one navbar instance
#[derive(Clone, Copy)]
pub struct NavMenu {
    state: Signal<MenuState>,
    reduced_motion: Signal<bool>,
    transition: TransitionConfig,
}

impl NavMenu {
    pub fn is_open(&self) -> bool {
        self.state.read().is_open()
    }

    pub fn phase(&self) -> PanelPhase {
        self.state.read().panel_phase()
    }

    /// Transition after applying the viewer's motion preference
    pub fn transition(&self) -> TransitionConfig {
        if *self.reduced_motion.read() {
            self.transition.instant()
        } else {
            self.transition
        }
    }

    pub fn toggle(&mut self) {
        let change = self.state.write().toggle();
        let (is_open, epoch) = {
            let state = self.state.peek();
            (state.is_open(), state.epoch())
        };
        logging::log_menu_toggle(is_open, epoch);
        self.schedule_exit(change);
    }

    pub fn close(&mut self) {
        let change = self.state.write().close();
        self.schedule_exit(change);
    }

    /// Feed the current router path; navigating elsewhere closes the menu.
    pub fn observe_path(&mut self, path: &str) {
        let change = self.state.write().observe_path(path);
        if let MenuTransition::Closing(_) = change {
            logging::log_route_change(path, true);
        }
        self.schedule_exit(change);
    }

    fn schedule_exit(&self, change: MenuTransition) {
        if let MenuTransition::Closing(epoch) = change {
            let duration_ms = if *self.reduced_motion.peek() {
                0
            } else {
                self.transition.duration_ms
            };
            finish_exit_after(self.state, epoch, duration_ms);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn finish_exit_after(mut state: Signal<MenuState>, epoch: u64, duration_ms: u32) {
    if duration_ms == 0 {
        state.write().finish_exit(epoch);
        return;
    }

    spawn(async move {
        gloo_timers::future::TimeoutFuture::new(duration_ms).await;
        state.write().finish_exit(epoch);
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn finish_exit_after(mut state: Signal<MenuState>, epoch: u64, _duration_ms: u32) {
    // No animation frames to wait for outside the browser
    state.write().finish_exit(epoch);
}

/// Hook creating the menu state for a navbar
pub fn use_nav_menu(transition: TransitionConfig) -> NavMenu {
    let state = use_signal(MenuState::new);
    let mut reduced_motion = use_signal(|| false);

    // Client-only; the server render always uses the configured timing
    use_effect(move || {
        reduced_motion.set(prefers_reduced_motion());
    });

    NavMenu {
        state,
        reduced_motion,
        transition,
    }
}

/// Close `menu` whenever `path` changes between renders
pub fn use_close_on_route_change(menu: NavMenu, path: String) {
    let mut menu = menu;
    use_effect(use_reactive!(|path| {
        menu.observe_path(&path);
    }));
}
