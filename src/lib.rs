//! Interactive deployment wizard for EVM contract stacks.
//!
//! Invariant: all interactive input goes through [`term::RawSession`] — at
//! most one raw terminal session is active at a time, and cooked mode is
//! restored on every exit path.
//!
//! # Layering
//! - [`term`] decodes raw byte chunks into key events and owns termios state.
//! - [`editor`] holds the pure line/selection state machines.
//! - [`prompt`] drives the editors against a [`term::Console`] and layers
//!   typed validation on top.
//! - [`wizard`], [`commands`], [`records`] are orchestration: collect inputs,
//!   persist JSON artifacts, print next steps.

pub mod address;
pub mod chains;
pub mod commands;
pub mod editor;
pub mod logging;
pub mod output;
pub mod prompt;
pub mod records;
pub mod term;
pub mod wizard;
