// src/lib.rs

//! Pointer-aim detection for nested hover menus.
//!
//! A hover menu with an expanded submenu has a classic problem: moving the
//! cursor diagonally from the active row into the submenu's content sweeps
//! over the sibling rows in between, and activating each of those on
//! `pointerenter` makes the open submenu flicker closed mid-travel.
//!
//! ```text
//! __________________________
//! | Monkeys  >|   Gorilla  |
//! | Gorillas >|   Content  |
//! | Chimps   >|   Here     |
//! |___________|____________|
//! ```
//!
//! Here "Gorillas" is active and its content is shown on the right. On the
//! way into the content area the cursor may briefly cross "Chimps"; that
//! must not close the gorilla content.
//!
//! Instead of a blanket hover timeout, this crate detects the direction of
//! travel. It keeps a short rolling buffer of pointer samples and compares
//! the slopes from the current and previous locations to two
//! tolerance-expanded corners of the menu box (the cone toward the open
//! submenu). While both slope trends converge on the cone, switching the
//! active row is deferred and re-checked after a short delay; any other
//! movement activates the newly hovered row immediately, which keeps plain
//! up/down navigation snappy.
//!
//! The crate is presentation-free. The host owns the DOM (or whatever
//! tree it renders), forwards abstract events (`on_pointer_move`,
//! `on_row_enter`, `on_row_leave`, `on_row_click`, `on_menu_leave`),
//! supplies geometry through the `bounds` hook and a cancellable one-shot
//! timer through [`TimerHost`], and receives
//! enter/exit/activate/deactivate callbacks with its own opaque row
//! tokens.
//!
//! ```
//! use menu_aim::{Hooks, MenuAim, MenuAimConfig, MenuBounds, Point, TimerHost, TimerToken};
//! use std::time::Duration;
//!
//! // A host that never defers would simply drop the schedule calls; real
//! // hosts arrange for `on_timer_elapsed(token)` after the delay.
//! struct NoTimer;
//! impl TimerHost for NoTimer {
//!     fn schedule(&mut self, _delay: Duration, _token: TimerToken) {}
//!     fn cancel(&mut self, _token: TimerToken) {}
//! }
//!
//! let hooks = Hooks {
//!     activate: Box::new(|row: &u32| println!("show submenu {row}")),
//!     deactivate: Box::new(|row: &u32| println!("hide submenu {row}")),
//!     bounds: Box::new(|| MenuBounds { left: 0.0, top: 0.0, width: 200.0, height: 300.0 }),
//!     ..Hooks::default()
//! };
//!
//! let mut menu = MenuAim::new(MenuAimConfig::default(), hooks, NoTimer);
//! menu.on_pointer_move(Point::new(40.0, 12.0));
//! menu.on_row_enter(1u32);
//! assert_eq!(menu.active_row(), Some(&1));
//! ```

mod config;
pub mod geometry;
pub mod policy;
pub mod sample_buffer;
pub mod state_machine;
pub mod types;

pub use geometry::{slope, watch_corners, WatchCorners};
pub use policy::{activation_delay, PolicyInput};
pub use sample_buffer::SampleBuffer;
pub use state_machine::{Hooks, MenuAim, TimerHost, TimerToken};
pub use types::{MenuAimConfig, MenuBounds, Point, SubmenuDirection};
