#[macro_use]
extern crate error_chain;

mod callable;
mod dictionary;
mod interpreter;
mod numeric;
mod quotation;
mod stack;
mod tokenizer;
mod value;

pub mod errors;
pub mod io;
pub mod testing;

pub use crate::callable::Callable;
pub use crate::dictionary::{Dictionary, Word, WordId};
pub use crate::interpreter::Interpreter;
pub use crate::numeric::Number;
pub use crate::quotation::{Opcode, Quotation};
pub use crate::stack::Stack;
pub use crate::tokenizer::{tokenize, Token};
pub use crate::value::Value;
