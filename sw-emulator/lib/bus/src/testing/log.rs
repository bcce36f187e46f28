/*++

Licensed under the Apache-2.0 license.

File Name:

    log.rs

Abstract:

    File contains a shared line log for recording bus traffic in tests.

--*/
use std::{cell::RefCell, fmt::Display, rc::Rc};

/// Records one line per event without needing `&mut self`, so that fake
/// `Bus` implementations can log from `Bus::read`.
///
/// Clones share the same lines.
///
/// # Example
///
/// ```
/// use gbafe_emu_bus::testing::Log;
///
/// let log = Log::new();
/// log.clone().push("read s1");
/// log.push(format_args!("write s{:X}", 0xC));
/// assert_eq!(log.len(), 2);
/// assert_eq!("read s1\nwrite sC\n", log.take());
/// assert_eq!("", log.take());
/// ```
#[derive(Clone, Default)]
pub struct Log {
    lines: Rc<RefCell<Vec<String>>>,
}

impl Log {
    /// Construct an empty `Log`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one line.
    pub fn push(&self, line: impl Display) {
        self.lines.borrow_mut().push(line.to_string());
    }

    pub fn len(&self) -> usize {
        self.lines.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.borrow().is_empty()
    }

    /// Empties the log and returns the lines recorded so far, each
    /// terminated by a newline.
    pub fn take(&self) -> String {
        let lines = std::mem::take(&mut *self.lines.borrow_mut());
        lines.into_iter().fold(String::new(), |mut out, line| {
            out.push_str(&line);
            out.push('\n');
            out
        })
    }
}
