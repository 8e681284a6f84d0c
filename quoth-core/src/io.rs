use crate::errors::*;
use crate::stack::Stack;

/// Output sink for the printing words. The interpreter never writes to
/// stdout itself; embedders decide where printed text goes.
pub trait Printer {
    fn print(&mut self, text: &str) -> Result<()>;
}

/// Resolves a source name (usually a path) to program text.
pub trait SourceLoader {
    fn load(&self, name: &str) -> Result<String>;
}

/// Render the stack bottom-to-top, truncating from the bottom once the
/// rendering would exceed `max_len` characters.
pub fn format_stack(stack: &Stack, max_len: usize) -> String {
    let mut total_length = 0;
    let mut top = vec![];

    for val in stack.as_slice().iter().rev() {
        let repr = format!("{}", val);
        total_length += repr.len() + 2;
        if total_length > max_len {
            break;
        }
        top.push(repr);
    }

    top.reverse();

    if top.len() < stack.len() {
        format!("[.., {}]", top.join(", "))
    } else {
        format!("[{}]", top.join(", "))
    }
}
