//! Raw terminal access and key decoding.

pub mod console;
pub mod key;

pub use console::{install_cleanup_hooks, Console, RawSession, SignalCleanupGuard, StdioConsole};
pub use key::{decode_chunk, KeyEvent};
