//! Pure editing state machines, decoupled from terminal I/O.

pub mod line;
pub mod select;

pub use line::{EditOutcome, LineEditor};
pub use select::{SelectList, SelectOutcome};
