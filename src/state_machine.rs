// src/state_machine.rs
//
// Activation state machine. Owns the sample buffer, the active-row slot
// and the single pending re-check timer, and sequences the delay policy
// against row-enter/leave/click and menu-leave events.
//
// Control flow is a loop of "decide, then activate or wait-and-redecide":
// entering a row asks the policy for a delay; zero activates on the spot,
// anything else schedules one re-check through the host's timer. A timer
// fire runs the same decision again, since the pointer may have kept
// moving during the wait. Any new row-enter, click, menu-leave or reset
// cancels the outstanding re-check first, so at most one timer is ever
// live per instance.

use crate::policy::{activation_delay, PolicyInput};
use crate::sample_buffer::SampleBuffer;
use crate::types::{MenuAimConfig, MenuBounds, Point};
use std::fmt::Debug;
use std::time::Duration;
use tracing::debug;

/// Identifies one scheduled re-check. Tokens are never reused, so a fire
/// delivered after its timer was cancelled is recognized and dropped even
/// when the host cannot guarantee cancel-before-fire atomicity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerToken(u64);

/// One-shot delayed callback supplied by the host. On expiry the host
/// calls [`MenuAim::on_timer_elapsed`] with the token it was given.
/// `cancel` is best effort; token validation makes late fires harmless.
pub trait TimerHost {
    fn schedule(&mut self, delay: Duration, token: TimerToken);
    fn cancel(&mut self, token: TimerToken);
}

/// Host-supplied callbacks. Every hook defaults to a no-op so hosts only
/// wire up what they care about.
pub struct Hooks<R> {
    /// Pointer entered a row. Entering does not mean activation; the user
    /// may be mousing over toward the open submenu.
    pub enter: Box<dyn FnMut(&R)>,
    /// Pointer left a row.
    pub exit: Box<dyn FnMut(&R)>,
    /// Row purposefully activated; show its submenu content.
    pub activate: Box<dyn FnMut(&R)>,
    /// Row deactivated; hide its submenu content.
    pub deactivate: Box<dyn FnMut(&R)>,
    /// Consulted when the pointer leaves the whole menu. Return true to
    /// deactivate the active row, false to keep its submenu open.
    pub exit_menu: Box<dyn FnMut() -> bool>,
    /// Which rows can own a submenu. Rows failing this filter never delay
    /// activation of their siblings.
    pub is_submenu_row: Box<dyn Fn(&R) -> bool>,
    /// Current menu bounding box, read fresh on every decision.
    pub bounds: Box<dyn FnMut() -> MenuBounds>,
}

impl<R> Default for Hooks<R> {
    fn default() -> Self {
        Self {
            enter: Box::new(|_| {}),
            exit: Box::new(|_| {}),
            activate: Box::new(|_| {}),
            deactivate: Box::new(|_| {}),
            exit_menu: Box::new(|| false),
            is_submenu_row: Box::new(|_| true),
            bounds: Box::new(|| MenuBounds::ZERO),
        }
    }
}

struct PendingActivation<R> {
    row: R,
    token: TimerToken,
}

/// One instance per menu. Instances share no state.
pub struct MenuAim<R, T> {
    config: MenuAimConfig,
    hooks: Hooks<R>,
    timer: T,
    samples: SampleBuffer,
    active_row: Option<R>,
    pending: Option<PendingActivation<R>>,
    last_delay_loc: Option<Point>,
    next_token: u64,
}

impl<R, T> MenuAim<R, T>
where
    R: Clone + PartialEq + Debug,
    T: TimerHost,
{
    pub fn new(config: MenuAimConfig, hooks: Hooks<R>, timer: T) -> Self {
        let config = config.validated();
        Self {
            samples: SampleBuffer::new(config.sample_count),
            config,
            hooks,
            timer,
            active_row: None,
            pending: None,
            last_delay_loc: None,
            next_token: 0,
        }
    }

    pub fn active_row(&self) -> Option<&R> {
        self.active_row.as_ref()
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Record a pointer sample.
    pub fn on_pointer_move(&mut self, p: Point) {
        self.samples.push(p);
    }

    /// Pointer entered a row: cancel any outstanding re-check and decide
    /// whether this row may take over.
    pub fn on_row_enter(&mut self, row: R) {
        self.cancel_pending();
        (self.hooks.enter)(&row);
        self.possibly_activate(row);
    }

    /// Pointer left a row. Does not cancel a pending activation; the user
    /// keeps the full delay window to travel toward the submenu.
    pub fn on_row_leave(&mut self, row: R) {
        (self.hooks.exit)(&row);
    }

    /// Click activates immediately, bypassing the delay.
    pub fn on_row_click(&mut self, row: R) {
        self.cancel_pending();
        self.activate(row);
    }

    /// Pointer left the menu's entire hit area.
    pub fn on_menu_leave(&mut self) {
        self.cancel_pending();
        if self.active_row.is_some() && (self.hooks.exit_menu)() {
            self.deactivate_active();
        }
    }

    /// A scheduled re-check fired. Stale tokens are dropped.
    pub fn on_timer_elapsed(&mut self, token: TimerToken) {
        match self.pending.take() {
            Some(pending) if pending.token == token => {
                self.possibly_activate(pending.row);
            }
            other => {
                debug!(?token, "stale re-check timer ignored");
                self.pending = other;
            }
        }
    }

    /// Clear the active row; with `notify` the deactivate hook fires for
    /// it first.
    pub fn reset(&mut self, notify: bool) {
        self.cancel_pending();
        if notify {
            self.deactivate_active();
        } else {
            self.active_row = None;
        }
        self.samples.clear();
        self.last_delay_loc = None;
    }

    /// Release internal state. The host detaches its own event listeners.
    pub fn destroy(&mut self) {
        self.reset(false);
    }

    fn possibly_activate(&mut self, row: R) {
        let submenu_open = match &self.active_row {
            Some(active) => (self.hooks.is_submenu_row)(active),
            None => false,
        };
        let bounds = (self.hooks.bounds)();
        let input = PolicyInput {
            submenu_open,
            samples: &self.samples,
            bounds,
            tolerance: self.config.tolerance,
            direction: self.config.direction,
            delay: self.config.delay(),
        };

        let delay = activation_delay(&input, &mut self.last_delay_loc);
        if delay.is_zero() {
            self.activate(row);
        } else {
            let token = self.next_timer_token();
            debug!(?row, ?delay, ?token, "re-check scheduled");
            self.timer.schedule(delay, token);
            self.pending = Some(PendingActivation { row, token });
        }
    }

    fn activate(&mut self, row: R) {
        if self.active_row.as_ref() == Some(&row) {
            // Re-entering the active row is a no-op.
            return;
        }

        if let Some(prev) = self.active_row.take() {
            debug!(row = ?prev, "deactivate");
            (self.hooks.deactivate)(&prev);
        }

        debug!(?row, "activate");
        (self.hooks.activate)(&row);
        self.active_row = Some(row);
    }

    fn deactivate_active(&mut self) {
        if let Some(prev) = self.active_row.take() {
            debug!(row = ?prev, "deactivate");
            (self.hooks.deactivate)(&prev);
        }
    }

    fn cancel_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            self.timer.cancel(pending.token);
        }
    }

    fn next_timer_token(&mut self) -> TimerToken {
        self.next_token += 1;
        TimerToken(self.next_token)
    }
}
