//! Session layer - the presentation state around the grid engine.
//!
//! The engine only knows boards, scores and flags. This crate adds what a
//! playable front end needs on top, without doing any terminal I/O itself:
//!
//! - [`session`]: action gating, pause, overlays, move counter, best score
//! - [`clock`]: elapsed play time with pauses excluded
//! - [`store`]: key-value persistence of best score, theme and sound switch
//! - [`config`]: environment-driven runtime configuration
//!
//! Time is always passed in by the caller, so sessions replay
//! deterministically in tests.

pub mod clock;
pub mod config;
pub mod session;
pub mod store;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use clock::{minutes_seconds, PlayClock};
pub use config::AppConfig;
pub use session::{Overlay, Session, SessionSnapshot, SoundCue, SoundCues};
pub use store::{
    JsonFileStore, KeyValueStore, MemoryStore, Preferences, StoreError, HIGH_SCORE_KEY,
    SOUND_KEY, THEME_KEY,
};
