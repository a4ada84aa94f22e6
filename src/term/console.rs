//! Raw-mode terminal access.
//!
//! The process owns at most one raw-mode session at a time. `RawSession` is
//! the RAII guard: it flips the terminal into raw (non-canonical, non-echoing)
//! mode on creation and restores the saved termios on drop, covering every
//! exit path — normal submission, validation retries, cancellation, and (via
//! the signal/panic hooks) abnormal exits.

use std::io;
use std::ops::{Deref, DerefMut};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::thread::{self, JoinHandle};

use libc::c_int;
use once_cell::sync::Lazy;
use signal_hook::iterator::Signals;

/// Byte-stream terminal interface used by the prompt drivers.
///
/// The production implementation is [`StdioConsole`]; tests drive prompts with
/// scripted mocks.
pub trait Console {
    /// Switch the terminal to raw mode.
    fn enter_raw(&mut self) -> io::Result<()>;

    /// Restore the terminal to its pre-raw state.
    fn leave_raw(&mut self) -> io::Result<()>;

    /// Blocking read of the next input chunk. Returns 0 at end of input.
    fn read_chunk(&mut self, buf: &mut [u8]) -> io::Result<usize>;

    /// Write output (text and ANSI control sequences) to the terminal.
    fn write(&mut self, data: &str) -> io::Result<()>;
}

/// Set while a `StdioConsole` holds the process terminal in raw mode.
static RAW_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Termios snapshot for the signal/panic cleanup hooks. Populated on
/// `enter_raw`, cleared on `leave_raw`.
static SAVED_TERMIOS: Lazy<Mutex<Option<(c_int, libc::termios)>>> =
    Lazy::new(|| Mutex::new(None));

fn get_termios(fd: c_int) -> io::Result<libc::termios> {
    let mut termios = unsafe { std::mem::zeroed::<libc::termios>() };
    if unsafe { libc::tcgetattr(fd, &mut termios) } != 0 {
        return Err(io::Error::last_os_error());
    }
    Ok(termios)
}

fn set_termios(fd: c_int, termios: &libc::termios) -> io::Result<()> {
    if unsafe { libc::tcsetattr(fd, libc::TCSANOW, termios) } != 0 {
        return Err(io::Error::last_os_error());
    }
    Ok(())
}

fn write_all_fd(fd: c_int, bytes: &[u8]) -> io::Result<()> {
    let mut written = 0;
    while written < bytes.len() {
        let remaining = &bytes[written..];
        let result =
            unsafe { libc::write(fd, remaining.as_ptr() as *const libc::c_void, remaining.len()) };
        if result < 0 {
            let err = io::Error::last_os_error();
            if err.kind() == io::ErrorKind::Interrupted {
                continue;
            }
            return Err(err);
        }
        if result == 0 {
            return Err(io::Error::new(io::ErrorKind::WriteZero, "write returned 0"));
        }
        written += result as usize;
    }
    Ok(())
}

/// Best-effort restore used by the signal and panic hooks.
fn restore_saved_termios() {
    let saved = match SAVED_TERMIOS.lock() {
        Ok(guard) => *guard,
        Err(poisoned) => *poisoned.into_inner(),
    };
    if let Some((fd, termios)) = saved {
        let _ = set_termios(fd, &termios);
        let _ = write_all_fd(fd, b"\r\n");
    }
}

/// Terminal backed by the process stdin/stdout file descriptors.
pub struct StdioConsole {
    stdin_fd: c_int,
    stdout_fd: c_int,
    original_termios: Option<libc::termios>,
}

impl StdioConsole {
    pub fn new() -> Self {
        Self {
            stdin_fd: libc::STDIN_FILENO,
            stdout_fd: libc::STDOUT_FILENO,
            original_termios: None,
        }
    }

    #[cfg(test)]
    fn with_fds(stdin_fd: c_int, stdout_fd: c_int) -> Self {
        Self {
            stdin_fd,
            stdout_fd,
            original_termios: None,
        }
    }
}

impl Default for StdioConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for StdioConsole {
    fn enter_raw(&mut self) -> io::Result<()> {
        if RAW_ACTIVE.swap(true, Ordering::SeqCst) {
            return Err(io::Error::other("raw terminal session already active"));
        }
        let original = match get_termios(self.stdin_fd) {
            Ok(termios) => termios,
            Err(err) => {
                RAW_ACTIVE.store(false, Ordering::SeqCst);
                return Err(err);
            }
        };
        self.original_termios = Some(original);

        let mut raw = original;
        unsafe {
            libc::cfmakeraw(&mut raw);
        }
        if let Err(err) = set_termios(self.stdin_fd, &raw) {
            self.original_termios = None;
            RAW_ACTIVE.store(false, Ordering::SeqCst);
            return Err(err);
        }

        match SAVED_TERMIOS.lock() {
            Ok(mut guard) => *guard = Some((self.stdin_fd, original)),
            Err(poisoned) => *poisoned.into_inner() = Some((self.stdin_fd, original)),
        }
        log::debug!("terminal entered raw mode");
        Ok(())
    }

    fn leave_raw(&mut self) -> io::Result<()> {
        let Some(original) = self.original_termios.take() else {
            return Ok(());
        };

        // Flush pending input before restoring so buffered bytes do not leak
        // into the shell after the prompt ends.
        let _ = unsafe { libc::tcflush(self.stdin_fd, libc::TCIFLUSH) };
        let result = set_termios(self.stdin_fd, &original);

        match SAVED_TERMIOS.lock() {
            Ok(mut guard) => *guard = None,
            Err(poisoned) => *poisoned.into_inner() = None,
        }
        RAW_ACTIVE.store(false, Ordering::SeqCst);
        log::debug!("terminal restored to cooked mode");
        result
    }

    fn read_chunk(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        loop {
            let result =
                unsafe { libc::read(self.stdin_fd, buf.as_mut_ptr() as *mut libc::c_void, buf.len()) };
            if result < 0 {
                let err = io::Error::last_os_error();
                if err.kind() == io::ErrorKind::Interrupted {
                    continue;
                }
                return Err(err);
            }
            return Ok(result as usize);
        }
    }

    fn write(&mut self, data: &str) -> io::Result<()> {
        write_all_fd(self.stdout_fd, data.as_bytes())
    }
}

impl Drop for StdioConsole {
    fn drop(&mut self) {
        let _ = self.leave_raw();
    }
}

/// RAII wrapper holding a console in raw mode for the duration of one prompt.
pub struct RawSession<'a, C: Console> {
    console: &'a mut C,
}

impl<'a, C: Console> RawSession<'a, C> {
    pub fn new(console: &'a mut C) -> io::Result<Self> {
        console.enter_raw()?;
        Ok(Self { console })
    }
}

impl<C: Console> Deref for RawSession<'_, C> {
    type Target = C;

    fn deref(&self) -> &C {
        self.console
    }
}

impl<C: Console> DerefMut for RawSession<'_, C> {
    fn deref_mut(&mut self) -> &mut C {
        self.console
    }
}

impl<C: Console> Drop for RawSession<'_, C> {
    fn drop(&mut self) {
        let _ = self.console.leave_raw();
    }
}

/// Handle for the SIGINT/SIGTERM cleanup listener.
pub struct SignalCleanupGuard {
    handle: signal_hook::iterator::Handle,
    thread: Option<JoinHandle<()>>,
}

impl Drop for SignalCleanupGuard {
    fn drop(&mut self) {
        self.handle.close();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

/// Install terminal-restore hooks for signals and panics.
///
/// Ctrl-C during a prompt arrives as a `0x03` byte (raw mode suppresses the
/// signal), so this path covers the cooked-mode phases and external SIGTERM.
pub fn install_cleanup_hooks() -> io::Result<SignalCleanupGuard> {
    let mut signals = Signals::new([libc::SIGINT, libc::SIGTERM])?;
    let handle = signals.handle();
    let thread = thread::spawn(move || {
        if signals.forever().next().is_some() {
            restore_saved_termios();
            std::process::exit(130);
        }
    });

    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_saved_termios();
        previous(info);
    }));

    Ok(SignalCleanupGuard {
        handle,
        thread: Some(thread),
    })
}
