//! Check modules for ci-smoke
//!
//! This module contains the probe implementations. Each probe returns its
//! raw outcome; turning that into pass/fail/skip is the runner's job.

pub mod ping;
pub mod policy;
pub mod sanity;
pub mod tcp;

pub use ping::{PingChecker, PingOutput};
pub use policy::{Environmental, SkipPolicy};
pub use sanity::{SanityChecker, SanityOutcome};
pub use tcp::{ConnectOutcome, TcpChecker};
