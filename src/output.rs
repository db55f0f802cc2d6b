//! Output sink with optional redirection
//!
//! Every line the wrappers and demos print goes through an [`Output`] handle
//! instead of the process-wide stdout. While redirection is enabled each
//! emission is written to the default writer first and then copied to the
//! redirection sink. Disabling closes the sink.

use crate::error::{CallWrapError, Result};
use std::cell::RefCell;
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::rc::Rc;

/// In-memory writer whose contents stay readable through any clone
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    bytes: Rc<RefCell<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.borrow()).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

struct OutputInner {
    default: Box<dyn Write>,
    sink: Option<Box<dyn Write>>,
}

/// Shared, single-threaded handle to the output channel
#[derive(Clone)]
pub struct Output {
    inner: Rc<RefCell<OutputInner>>,
    captured: Option<SharedBuffer>,
}

impl std::fmt::Debug for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Output")
            .field("redirected", &self.is_redirected())
            .field("captured", &self.captured.is_some())
            .finish()
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::stdout()
    }
}

impl Output {
    /// Output writing to the process stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    /// Output writing to an arbitrary default writer
    pub fn new<W: Write + 'static>(default: W) -> Self {
        Self {
            inner: Rc::new(RefCell::new(OutputInner {
                default: Box::new(default),
                sink: None,
            })),
            captured: None,
        }
    }

    /// Output writing to an in-memory buffer, readable with [`Output::captured`]
    pub fn capture() -> Self {
        let buffer = SharedBuffer::new();
        let mut output = Self::new(buffer.clone());
        output.captured = Some(buffer);
        output
    }

    /// Text written to the default writer of a [`Output::capture`] handle
    pub fn captured(&self) -> String {
        self.captured
            .as_ref()
            .map(SharedBuffer::contents)
            .unwrap_or_default()
    }

    /// Write `text` without a trailing newline
    pub fn emit(&self, text: &str) -> Result<()> {
        let mut inner = self.inner.borrow_mut();
        inner.default.write_all(text.as_bytes())?;
        if let Some(sink) = inner.sink.as_mut() {
            sink.write_all(text.as_bytes())?;
        }
        Ok(())
    }

    /// Write `text` followed by a newline
    pub fn emit_line(&self, text: &str) -> Result<()> {
        let mut line = String::with_capacity(text.len() + 1);
        line.push_str(text);
        line.push('\n');
        self.emit(&line)
    }

    pub fn flush(&self) -> Result<()> {
        let mut inner = self.inner.borrow_mut();
        inner.default.flush()?;
        if let Some(sink) = inner.sink.as_mut() {
            sink.flush()?;
        }
        Ok(())
    }

    pub fn is_redirected(&self) -> bool {
        self.inner.borrow().sink.is_some()
    }

    /// Start copying every emission to `sink`
    pub fn enable_redirection<W: Write + 'static>(&self, sink: W) -> Result<()> {
        let mut inner = self.inner.borrow_mut();
        if inner.sink.is_some() {
            return Err(CallWrapError::InvalidState(
                "redirection is already enabled".to_string(),
            ));
        }
        inner.sink = Some(Box::new(sink));
        tracing::debug!("output redirection enabled");
        Ok(())
    }

    /// Flush and close the sink; later emissions reach the default writer only
    pub fn disable_redirection(&self) -> Result<()> {
        let sink = self.inner.borrow_mut().sink.take();
        match sink {
            Some(mut sink) => {
                let flushed = sink.flush();
                drop(sink);
                tracing::debug!("output redirection disabled");
                flushed.map_err(CallWrapError::from)
            }
            None => Err(CallWrapError::InvalidState(
                "redirection is not enabled".to_string(),
            )),
        }
    }

    /// Run `f` with redirection to `sink`, disabling it on every exit path
    ///
    /// # Example
    /// ```
    /// use callwrap::output::{Output, SharedBuffer};
    ///
    /// let out = Output::capture();
    /// let log = SharedBuffer::new();
    /// out.redirected(log.clone(), |out| out.emit_line("hello")).unwrap();
    /// assert_eq!(log.contents(), "hello\n");
    /// assert!(!out.is_redirected());
    /// ```
    pub fn redirected<W, T, E, F>(&self, sink: W, f: F) -> std::result::Result<T, E>
    where
        W: Write + 'static,
        E: From<CallWrapError>,
        F: FnOnce(&Output) -> std::result::Result<T, E>,
    {
        self.enable_redirection(sink)?;
        let guard = RedirectGuard {
            output: self,
            armed: true,
        };
        let result = f(self);
        let closed = guard.finish();
        let value = result?;
        closed?;
        Ok(value)
    }
}

/// Disables redirection when dropped, covering early returns and panics
struct RedirectGuard<'a> {
    output: &'a Output,
    armed: bool,
}

impl RedirectGuard<'_> {
    fn finish(mut self) -> Result<()> {
        self.armed = false;
        self.output.disable_redirection()
    }
}

impl Drop for RedirectGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            if let Err(e) = self.output.disable_redirection() {
                tracing::warn!(error = %e, "failed to close redirection sink");
            }
        }
    }
}

/// Open `path` for appending, creating it when missing
pub fn open_log<P: AsRef<Path>>(path: P) -> Result<BufWriter<File>> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path.as_ref())?;
    Ok(BufWriter::new(file))
}
