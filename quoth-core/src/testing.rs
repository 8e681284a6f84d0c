use std::cell::RefCell;
use std::fmt::Debug;
use std::rc::Rc;

use crate::errors::*;
use crate::interpreter::Interpreter;
use crate::io::Printer;
use crate::value::Value;

/// Printer that keeps everything printed, for assertions.
#[derive(Debug, Clone, Default)]
pub struct RecordingPrinter {
    lines: Rc<RefCell<Vec<String>>>,
}

impl RecordingPrinter {
    pub fn new() -> Self {
        RecordingPrinter::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }
}

impl Printer for RecordingPrinter {
    fn print(&mut self, text: &str) -> Result<()> {
        self.lines.borrow_mut().push(text.to_string());
        Ok(())
    }
}

impl Interpreter {
    /// An interpreter wired to a recording printer, plus a handle on the
    /// recording.
    pub fn new_recording() -> (Self, RecordingPrinter) {
        let printer = RecordingPrinter::new();
        (Interpreter::new(Box::new(printer.clone())), printer)
    }

    pub fn assert_stack<T>(&self, expected: &[T])
    where
        Value: std::cmp::PartialEq<T>,
        T: Debug,
    {
        assert_eq!(self.stack.as_slice(), expected)
    }

    pub fn assert_stack_top<T>(&self, expected: &[T])
    where
        Value: std::cmp::PartialEq<T>,
        T: Debug,
    {
        for (got, want) in self
            .stack
            .as_slice()
            .iter()
            .rev()
            .zip(expected.iter().rev())
        {
            assert_eq!(got, want)
        }
    }
}
