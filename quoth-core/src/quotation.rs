use std::fmt;
use std::rc::Rc;

use crate::callable::Callable;
use crate::dictionary::WordId;
use crate::value::Value;

/// One element of a compiled body.
#[derive(Clone)]
pub enum Opcode {
    Push(Value),
    Call(WordId),
    CallDirect(Callable),
}

// `Call` renders by name; following the reference would not terminate on
// words that mention themselves.
impl fmt::Debug for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Opcode::Push(val) => write!(f, "Push({:?})", val),
            Opcode::Call(word) => write!(f, "Call({})", word.name()),
            Opcode::CallDirect(ca) => write!(f, "CallDirect({:?})", ca),
        }
    }
}

impl PartialEq for Opcode {
    fn eq(&self, other: &Opcode) -> bool {
        match (self, other) {
            (Opcode::Push(a), Opcode::Push(b)) => a == b,
            (Opcode::Call(a), Opcode::Call(b)) => Rc::ptr_eq(a, b),
            (Opcode::CallDirect(a), Opcode::CallDirect(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Opcode::Push(val) => write!(f, "{}", val),
            Opcode::Call(word) => write!(f, "{}", word.name()),
            Opcode::CallDirect(ca) => write!(f, "{}", ca.name()),
        }
    }
}

/// An executable sequence: the body of a word, or a first-class block
/// pushed by a quotation literal.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Quotation {
    pub ops: Vec<Opcode>,
}

impl Quotation {
    pub fn new() -> Self {
        Quotation { ops: vec![] }
    }
}

impl fmt::Display for Quotation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.ops.is_empty() {
            return write!(f, "[ ]");
        }
        let items: Vec<_> = self.ops.iter().map(|op| format!("{}", op)).collect();
        write!(f, "[ {} ]", items.join(" "))
    }
}
