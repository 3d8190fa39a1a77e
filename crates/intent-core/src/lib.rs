//! GraceNav Intent Core — The Hover-Intent Engine
//!
//! Decides when a navigation menu should switch its open submenu:
//! - **Motion Tracking:** classify the dominant direction of recent pointer travel
//! - **Activation Coordination:** delay, queue, or immediately perform open/close
//!   transitions, with grace for rightward travel toward an open submenu
//! - **Replay:** run recorded event streams through the engine in virtual time
//!
//! This crate is pure computation — no I/O, no platform dependencies.
//! All inputs are data; all outputs are data.

pub mod coordinator;
pub mod replay;
pub mod tracker;

pub use coordinator::ActivationCoordinator;
pub use tracker::MotionTracker;
