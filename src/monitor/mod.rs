//! Status-transition monitor.
//!
//! # Data Flow
//! ```text
//! runner.rs (poll loop):
//!     shutdown pending? → exit
//!     → Prober::check → Status
//!     → state.rs observe(status) → Option<Transition>
//!     → Some: Notifier::send(transition.alert()), failures logged
//!     → sleep(interval) raced against shutdown
//! ```
//!
//! # Design Decisions
//! - State lives in the Monitor value, owned by the loop; no locks
//! - One check per iteration, iterations never overlap
//! - At most one alert per iteration, only on a status change
//! - Delivery outcome never feeds back into the state

pub mod runner;
pub mod state;

pub use runner::Monitor;
pub use state::{MonitorState, Transition};
