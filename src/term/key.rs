//! Key event decoding for raw terminal input.
//!
//! A single `read(2)` on a raw-mode terminal may deliver one keystroke, a
//! pasted block, or a fragment of a multi-byte escape sequence. `decode_chunk`
//! turns one such chunk into an ordered sequence of logical [`KeyEvent`]s.

/// A decoded unit of user input, abstracted away from raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyEvent {
    /// A run of printable text. Pasted blocks arrive as one run so they can be
    /// inserted as a single atomic edit.
    Char(String),
    Enter,
    Backspace,
    Delete,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Home,
    End,
    /// Ctrl-C.
    Cancel,
    /// An escape sequence we do not recognize. Dropped by every consumer.
    Unknown(Vec<u8>),
}

/// Longest run of parameter bytes we follow inside a CSI sequence before
/// giving up. Interactive terminals deliver arrow/home/end codes atomically,
/// so anything longer is noise (mouse reports, unrecognized function keys).
const MAX_CSI_PARAM_BYTES: usize = 8;

enum Slot {
    Key(KeyEvent),
    TextRun,
}

/// Decode one input chunk into key events.
///
/// Rules, in priority order:
/// - `0x03` (Ctrl-C) anywhere yields exactly `[Cancel]`; the rest of the
///   chunk is discarded.
/// - `ESC`-led sequences map to arrow/home/end/delete events, or to a single
///   `Unknown` when unrecognized or truncated. Lookahead is bounded to the
///   current chunk; sequences never carry over between chunks.
/// - All printable bytes (including multi-byte UTF-8) coalesce into a single
///   `Char` run, emitted at the position of the first printable byte. When a
///   chunk carries printable text, embedded `\r`/`\n`/backspace bytes are
///   stripped rather than emitted, so a pasted block inserts atomically
///   instead of submitting mid-paste.
/// - A chunk with no printable text emits control events in byte order, so a
///   lone `\r` is still `Enter`.
pub fn decode_chunk(bytes: &[u8]) -> Vec<KeyEvent> {
    if bytes.contains(&0x03) {
        return vec![KeyEvent::Cancel];
    }

    let mut slots: Vec<Slot> = Vec::new();
    let mut text: Vec<u8> = Vec::new();
    let mut has_text_slot = false;

    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            0x1b => {
                let (event, consumed) = decode_escape(&bytes[i..]);
                slots.push(Slot::Key(event));
                i += consumed;
            }
            0x7f | 0x08 => {
                slots.push(Slot::Key(KeyEvent::Backspace));
                i += 1;
            }
            b'\r' | b'\n' => {
                slots.push(Slot::Key(KeyEvent::Enter));
                i += 1;
            }
            byte if byte < 0x20 => {
                // Other control characters are stripped.
                i += 1;
            }
            byte => {
                if !has_text_slot {
                    slots.push(Slot::TextRun);
                    has_text_slot = true;
                }
                text.push(byte);
                i += 1;
            }
        }
    }

    let text_run = if text.is_empty() {
        None
    } else {
        Some(String::from_utf8_lossy(&text).into_owned())
    };
    let strip_edit_keys = text_run.is_some();

    let mut events = Vec::with_capacity(slots.len());
    for slot in slots {
        match slot {
            Slot::TextRun => {
                if let Some(run) = &text_run {
                    events.push(KeyEvent::Char(run.clone()));
                }
            }
            Slot::Key(KeyEvent::Enter | KeyEvent::Backspace) if strip_edit_keys => {}
            Slot::Key(event) => events.push(event),
        }
    }
    events
}

/// Decode one escape sequence starting at `bytes[0] == 0x1b`.
///
/// Returns the event and the number of bytes consumed (at least 1).
fn decode_escape(bytes: &[u8]) -> (KeyEvent, usize) {
    debug_assert_eq!(bytes[0], 0x1b);

    // Bare ESC at the end of a chunk: incomplete, report as unknown rather
    // than buffering across chunks.
    if bytes.len() < 2 {
        return (KeyEvent::Unknown(bytes.to_vec()), 1);
    }
    if bytes[1] != b'[' {
        return (KeyEvent::Unknown(bytes[..2].to_vec()), 2);
    }
    if bytes.len() < 3 {
        return (KeyEvent::Unknown(bytes.to_vec()), 2);
    }

    match bytes[2] {
        b'A' => (KeyEvent::ArrowUp, 3),
        b'B' => (KeyEvent::ArrowDown, 3),
        b'C' => (KeyEvent::ArrowRight, 3),
        b'D' => (KeyEvent::ArrowLeft, 3),
        b'H' => (KeyEvent::Home, 3),
        b'F' => (KeyEvent::End, 3),
        b'0'..=b'9' => decode_tilde_sequence(bytes),
        _ => {
            // Unrecognized CSI: consume through the final byte so one stray
            // sequence yields one Unknown event, not a spray of Char noise.
            let end = csi_end(bytes);
            (KeyEvent::Unknown(bytes[..end].to_vec()), end)
        }
    }
}

/// `ESC [ <digits> ~` forms: 1/7 map to Home, 3 to Delete, 4/8 to End.
fn decode_tilde_sequence(bytes: &[u8]) -> (KeyEvent, usize) {
    let mut i = 2;
    while i < bytes.len() && bytes[i].is_ascii_digit() && i - 2 < MAX_CSI_PARAM_BYTES {
        i += 1;
    }
    if i < bytes.len() && bytes[i] == b'~' {
        let event = match &bytes[2..i] {
            b"1" | b"7" => KeyEvent::Home,
            b"3" => KeyEvent::Delete,
            b"4" | b"8" => KeyEvent::End,
            _ => KeyEvent::Unknown(bytes[..=i].to_vec()),
        };
        return (event, i + 1);
    }
    let end = csi_end(bytes);
    (KeyEvent::Unknown(bytes[..end].to_vec()), end)
}

/// Index one past the final byte of a CSI sequence, with bounded lookahead.
///
/// CSI terminates at the first byte in `0x40..=0x7e` after the parameters.
fn csi_end(bytes: &[u8]) -> usize {
    let limit = bytes.len().min(2 + MAX_CSI_PARAM_BYTES);
    for (offset, byte) in bytes.iter().enumerate().take(limit).skip(2) {
        if (0x40..=0x7e).contains(byte) {
            return offset + 1;
        }
    }
    limit
}
