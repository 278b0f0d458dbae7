//! Clipboard sinks for transform results.
//!
//! [`SystemClipboard`] pipes the text into whichever platform tool is
//! installed, while [`MemoryClipboard`] keeps it in memory for tests and
//! headless runs.

use std::io::Write;
use std::sync::Mutex;

use nu_ansi_term::Color::{Green, Red};

use crate::error::*;

/// A destination able to hold a copied text
pub trait Clipboard {
    fn write(&self, text: &str) -> Result<()>;
}

/// Writes the text into the clipboard and reports the result on `out`.
///
/// Failures are only reported, never propagated nor retried.
///
/// # Returns
/// `true` if the text reached the clipboard.
pub fn copy_with_notice(clipboard: &dyn Clipboard, text: &str, out: &mut dyn Write) -> bool {
    match clipboard.write(text) {
        Ok(()) => {
            writeln!(out, "{}", Green.paint("Copied to clipboard")).ok();
            true
        }
        Err(e) => {
            writeln!(out, "{} {}", Red.paint("[clipboard error]"), e).ok();
            false
        }
    }
}

/// In-memory clipboard keeping the last written text
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.lock().ok().and_then(|c| c.clone())
    }
}

impl Clipboard for MemoryClipboard {
    fn write(&self, text: &str) -> Result<()> {
        let mut contents = self
            .contents
            .lock()
            .map_err(|e| Error::Clipboard(e.to_string()))?;
        *contents = Some(text.to_string());
        Ok(())
    }
}

#[cfg(feature = "clipboard")]
pub use system::SystemClipboard;

#[cfg(feature = "clipboard")]
mod system {
    use std::io::Write;
    use std::process::{Command, Stdio};

    use super::Clipboard;
    use crate::debug;
    use crate::error::*;
    use crate::utils::command_exists;

    /// Clipboard tools tried in order, with the arguments making them read from stdin
    const BACKENDS: [(&str, &[&str]); 5] = [
        ("pbcopy", &[]),
        ("wl-copy", &[]),
        ("xclip", &["-selection", "clipboard"]),
        ("xsel", &["--clipboard", "--input"]),
        ("clip", &[]),
    ];

    /// The clipboard of the operating system, reached through the first
    /// clipboard tool found in the path
    #[derive(Debug, Clone, Copy)]
    pub struct SystemClipboard {
        backend: Option<(&'static str, &'static [&'static str])>,
    }

    impl SystemClipboard {
        pub fn new() -> Self {
            let backend = BACKENDS
                .iter()
                .find(|(program, _)| command_exists(program))
                .copied();
            match backend {
                Some((program, _)) => debug!("Using clipboard backend \"{}\"", program),
                None => debug!("No clipboard backend available"),
            }
            SystemClipboard { backend }
        }

        /// The tool used to reach the clipboard, if any
        pub fn program(&self) -> Option<&'static str> {
            self.backend.map(|(program, _)| program)
        }
    }

    impl Default for SystemClipboard {
        fn default() -> Self {
            Self::new()
        }
    }

    impl Clipboard for SystemClipboard {
        fn write(&self, text: &str) -> Result<()> {
            let (program, args) = self.backend.ok_or_else(|| {
                Error::Clipboard(
                    "no clipboard tool found (install pbcopy, wl-copy, xclip or xsel)".to_string(),
                )
            })?;

            let mut child = Command::new(program)
                .args(args)
                .stdin(Stdio::piped())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn()
                .map_err(|e| Error::Clipboard(format!("failed to spawn {}: {}", program, e)))?;

            // The pipe is closed when stdin drops, before waiting on the child
            let written = match child.stdin.take() {
                Some(mut stdin) => stdin.write_all(text.as_bytes()),
                None => Ok(()),
            };

            let status = child
                .wait()
                .map_err(|e| Error::Clipboard(format!("failed to wait for {}: {}", program, e)))?;

            written.map_err(|e| {
                Error::Clipboard(format!("failed to write to {}: {}", program, e))
            })?;

            if status.success() {
                Ok(())
            } else {
                Err(Error::Clipboard(format!(
                    "{} exited with {}",
                    program, status
                )))
            }
        }
    }

}
