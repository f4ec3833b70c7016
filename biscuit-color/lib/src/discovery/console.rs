//! Interactive console detection.
//!
//! [`is_console`] answers whether a stream is attached to a real terminal.
//! Handles backed by a file descriptor (or Windows handle) ask the platform
//! through [`IsTerminal`]; in-memory buffers are never consoles.
//!
//! ## Examples
//!
//! ```
//! use std::io::Cursor;
//! use biscuit_color::discovery::console::is_console;
//!
//! assert!(!is_console(&Vec::<u8>::new()));
//! assert!(!is_console(&Cursor::new([0u8; 4])));
//!
//! if is_console(&std::io::stdout()) {
//!     println!("\x1b[32minteractive\x1b[0m");
//! }
//! ```

use std::{
    collections::VecDeque,
    fs::File,
    io::{self, Cursor, IsTerminal},
};

/// A stream that can report whether it is an interactive console.
pub trait ConsoleStream {
    /// Returns `true` only for a character device attached to a terminal.
    fn is_console(&self) -> bool;
}

macro_rules! platform_stream {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ConsoleStream for $ty {
                #[inline]
                fn is_console(&self) -> bool {
                    self.is_terminal()
                }
            }
        )*
    };
}

macro_rules! in_memory_stream {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ConsoleStream for $ty {
                #[inline]
                fn is_console(&self) -> bool {
                    false
                }
            }
        )*
    };
}

platform_stream!(
    io::Stdin,
    io::Stdout,
    io::Stderr,
    io::StdinLock<'_>,
    io::StdoutLock<'_>,
    io::StderrLock<'_>,
    File,
);

#[cfg(unix)]
platform_stream!(std::os::fd::OwnedFd, std::os::fd::BorrowedFd<'_>);

#[cfg(windows)]
platform_stream!(std::os::windows::io::OwnedHandle, std::os::windows::io::BorrowedHandle<'_>);

in_memory_stream!([u8], Vec<u8>, VecDeque<u8>, String, str, io::Sink, io::Empty);

impl<T> ConsoleStream for Cursor<T> {
    #[inline]
    fn is_console(&self) -> bool {
        false
    }
}

impl<T: ConsoleStream + ?Sized> ConsoleStream for &T {
    #[inline]
    fn is_console(&self) -> bool {
        (**self).is_console()
    }
}

impl<T: ConsoleStream + ?Sized> ConsoleStream for &mut T {
    #[inline]
    fn is_console(&self) -> bool {
        (**self).is_console()
    }
}

impl<T: ConsoleStream + ?Sized> ConsoleStream for Box<T> {
    #[inline]
    fn is_console(&self) -> bool {
        (**self).is_console()
    }
}

/// Returns whether `stream` refers to an interactive terminal.
///
/// Regular files, pipes and in-memory buffers report `false`. The platform
/// query cannot fail outward; any failure reads as `false`.
pub fn is_console<S: ConsoleStream + ?Sized>(stream: &S) -> bool {
    let console = stream.is_console();
    tracing::trace!(console, "queried console mode");
    console
}
