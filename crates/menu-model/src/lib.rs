//! GraceNav Menu Model
//!
//! Shared data types for the hover-intent engine: pointer samples, the
//! timestamped menu event stream (pointer moves plus trigger enter/leave),
//! and the marker transitions the coordinator produces.
//!
//! Events are recorded in append-only JSONL format so interaction sessions
//! can be captured from a live UI and replayed deterministically.

pub mod event;
pub mod sample;
pub mod transition;

pub use event::{EventKind, MenuEvent, TimestampNs, TriggerId};
pub use sample::PointerSample;
pub use transition::{MarkerChange, MarkerOp, Transition};
