pub mod classify;
pub mod drive;
pub mod replay;
pub mod synth;
