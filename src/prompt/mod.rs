//! Interactive prompts: raw-mode drivers plus typed adapters.

pub mod typed;

use std::io;

use thiserror::Error;

use crate::editor::{EditOutcome, LineEditor, SelectList, SelectOutcome};
use crate::term::{decode_chunk, Console, RawSession};

pub use typed::{
    prompt_address, prompt_number, prompt_secret, prompt_select, prompt_string, prompt_yes_no,
};

#[derive(Debug, Error)]
pub enum PromptError {
    /// The user pressed Ctrl-C (or the input stream closed).
    #[error("cancelled by user")]
    Cancelled,
    #[error("terminal i/o failed")]
    Io(#[from] io::Error),
}

pub type PromptResult<T> = Result<T, PromptError>;

/// Behavior knobs for a single line prompt.
#[derive(Debug, Clone, Default)]
pub struct LineOptions {
    /// Echo `*` per grapheme instead of the typed text.
    pub masked: bool,
    /// Value substituted when Enter is pressed on an empty buffer.
    pub default: Option<String>,
}

const READ_BUF_LEN: usize = 1024;

/// Read one line in raw mode. The terminal is restored before returning on
/// every path, including cancellation and I/O errors.
pub fn read_line<C: Console>(
    console: &mut C,
    prompt: &str,
    options: &LineOptions,
) -> PromptResult<String> {
    let mut session = RawSession::new(console)?;
    let mut editor = LineEditor::new(options.masked, options.default.clone());
    session.write(&editor.render(prompt))?;

    let mut buf = [0u8; READ_BUF_LEN];
    loop {
        let n = session.read_chunk(&mut buf)?;
        if n == 0 {
            // EOF on stdin behaves like cancellation.
            return Err(PromptError::Cancelled);
        }
        let mut dirty = false;
        for event in decode_chunk(&buf[..n]) {
            match editor.apply(&event) {
                EditOutcome::Submitted(value) => {
                    session.write("\r\n")?;
                    return Ok(value);
                }
                EditOutcome::Cancelled => {
                    session.write("\r\n")?;
                    return Err(PromptError::Cancelled);
                }
                EditOutcome::Redraw => dirty = true,
                EditOutcome::Ignored => {}
            }
        }
        if dirty {
            session.write(&editor.render(prompt))?;
        }
    }
}

/// Run an arrow-key selection over `options` in raw mode.
pub fn run_select<C: Console>(
    console: &mut C,
    title: &str,
    options: &[String],
) -> PromptResult<String> {
    let mut list = match SelectList::new(options.to_vec()) {
        Some(list) => list,
        None => {
            return Err(PromptError::Io(io::Error::new(
                io::ErrorKind::InvalidInput,
                "selection requires at least one option",
            )))
        }
    };

    let mut session = RawSession::new(console)?;
    session.write(&format!("\r\x1b[K{title}\r\n"))?;
    session.write(&list.render())?;

    let mut buf = [0u8; READ_BUF_LEN];
    loop {
        let n = session.read_chunk(&mut buf)?;
        if n == 0 {
            return Err(PromptError::Cancelled);
        }
        let mut dirty = false;
        for event in decode_chunk(&buf[..n]) {
            match list.apply(&event) {
                SelectOutcome::Chosen(label) => {
                    return Ok(label);
                }
                SelectOutcome::Cancelled => {
                    return Err(PromptError::Cancelled);
                }
                SelectOutcome::Redraw => dirty = true,
                SelectOutcome::Ignored => {}
            }
        }
        if dirty {
            session.write(&list.render())?;
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::VecDeque;
    use std::io;

    use crate::term::Console;

    /// A console fed from a script of input chunks, capturing output and raw
    /// transitions. Chunk boundaries are preserved so tests can exercise
    /// paste-vs-keystroke behavior.
    pub struct ScriptedConsole {
        chunks: VecDeque<Vec<u8>>,
        pub output: String,
        pub raw_depth: usize,
        pub raw_transitions: usize,
    }

    impl ScriptedConsole {
        pub fn new(chunks: &[&[u8]]) -> Self {
            Self {
                chunks: chunks.iter().map(|c| c.to_vec()).collect(),
                output: String::new(),
                raw_depth: 0,
                raw_transitions: 0,
            }
        }

        /// One "typed" line per entry: the text arrives as a chunk of its
        /// own, then Enter as a separate keystroke chunk.
        pub fn from_lines(lines: &[&str]) -> Self {
            let mut chunks = VecDeque::new();
            for line in lines {
                if !line.is_empty() {
                    chunks.push_back(line.as_bytes().to_vec());
                }
                chunks.push_back(vec![b'\r']);
            }
            Self {
                chunks,
                output: String::new(),
                raw_depth: 0,
                raw_transitions: 0,
            }
        }
    }

    impl Console for ScriptedConsole {
        fn enter_raw(&mut self) -> io::Result<()> {
            self.raw_depth += 1;
            self.raw_transitions += 1;
            Ok(())
        }

        fn leave_raw(&mut self) -> io::Result<()> {
            self.raw_depth = self.raw_depth.saturating_sub(1);
            Ok(())
        }

        fn read_chunk(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            match self.chunks.pop_front() {
                Some(chunk) => {
                    buf[..chunk.len()].copy_from_slice(&chunk);
                    Ok(chunk.len())
                }
                None => Ok(0),
            }
        }

        fn write(&mut self, data: &str) -> io::Result<()> {
            self.output.push_str(data);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::ScriptedConsole;
    use super::{read_line, run_select, LineOptions, PromptError};

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn read_line_collects_typed_text() {
        let mut console = ScriptedConsole::new(&[b"hel", b"lo", b"\r"]);
        let value = read_line(&mut console, "Name:", &LineOptions::default()).unwrap();
        assert_eq!(value, "hello");
        assert_eq!(console.raw_depth, 0);
    }

    #[test]
    fn read_line_releases_raw_mode_on_cancel() {
        let mut console = ScriptedConsole::new(&[b"abc", b"\x03"]);
        let err = read_line(&mut console, ">", &LineOptions::default()).unwrap_err();
        assert!(matches!(err, PromptError::Cancelled));
        assert_eq!(console.raw_depth, 0);
        assert_eq!(console.raw_transitions, 1);
    }

    #[test]
    fn read_line_treats_eof_as_cancel() {
        let mut console = ScriptedConsole::new(&[]);
        let err = read_line(&mut console, ">", &LineOptions::default()).unwrap_err();
        assert!(matches!(err, PromptError::Cancelled));
        assert_eq!(console.raw_depth, 0);
    }

    #[test]
    fn read_line_applies_default_on_empty_submit() {
        let mut console = ScriptedConsole::new(&[b"\r"]);
        let options = LineOptions {
            masked: false,
            default: Some("fallback".to_string()),
        };
        let value = read_line(&mut console, ">", &options).unwrap();
        assert_eq!(value, "fallback");
    }

    #[test]
    fn masked_read_line_never_echoes_the_secret() {
        let mut console = ScriptedConsole::new(&[b"s3cret", b"\r"]);
        let options = LineOptions {
            masked: true,
            default: None,
        };
        let value = read_line(&mut console, "Key:", &options).unwrap();
        assert_eq!(value, "s3cret");
        assert!(!console.output.contains("s3cret"));
        assert!(console.output.contains("******"));
    }

    #[test]
    fn run_select_navigates_and_chooses() {
        // Down, Down, Enter -> third option.
        let mut console = ScriptedConsole::new(&[b"\x1b[B", b"\x1b[B", b"\r"]);
        let chosen = run_select(&mut console, "Pick:", &labels(&["a", "b", "c"])).unwrap();
        assert_eq!(chosen, "c");
        assert_eq!(console.raw_depth, 0);
    }

    #[test]
    fn run_select_wraps_upward_from_first() {
        let mut console = ScriptedConsole::new(&[b"\x1b[A", b"\r"]);
        let chosen = run_select(&mut console, "Pick:", &labels(&["a", "b", "c"])).unwrap();
        assert_eq!(chosen, "c");
    }

    #[test]
    fn run_select_cancel_releases_raw_mode() {
        let mut console = ScriptedConsole::new(&[b"\x03"]);
        let err = run_select(&mut console, "Pick:", &labels(&["a", "b"])).unwrap_err();
        assert!(matches!(err, PromptError::Cancelled));
        assert_eq!(console.raw_depth, 0);
    }

    #[test]
    fn run_select_rejects_empty_options() {
        let mut console = ScriptedConsole::new(&[]);
        let err = run_select(&mut console, "Pick:", &[]).unwrap_err();
        assert!(matches!(err, PromptError::Io(_)));
        assert_eq!(console.raw_transitions, 0);
    }
}
