use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

use tracing::{debug, trace};

use crate::callable::Callable;
use crate::dictionary::{Dictionary, Word, WordId};
use crate::errors::*;
use crate::io::{Printer, SourceLoader};
use crate::numeric::Number;
use crate::quotation::{Opcode, Quotation};
use crate::stack::Stack;
use crate::tokenizer::{tokenize, Token};
use crate::value::Value;

/// One body being executed: the quotation and the index of its next element.
struct Frame {
    body: Rc<Quotation>,
    pc: usize,
}

impl Frame {
    fn new(body: Rc<Quotation>) -> Self {
        Frame { body, pc: 0 }
    }
}

/// One independent interpreter instance: token stream, both stacks,
/// dictionary, mode flag, and the frame stack bodies run on. Nothing is
/// shared between instances.
pub struct Interpreter {
    pub stack: Stack,
    rstack: Stack,
    tokens: VecDeque<Token>,
    dictionary: Dictionary,
    compiling: bool,
    frames: Vec<Frame>,
    printer: Box<dyn Printer>,
}

/// API
impl Interpreter {
    pub fn new(printer: Box<dyn Printer>) -> Self {
        Interpreter {
            stack: Stack::new(),
            rstack: Stack::new(),
            tokens: VecDeque::new(),
            dictionary: Dictionary::new(),
            compiling: false,
            frames: vec![],
            printer,
        }
    }

    /// Execute a chunk of source text to completion.
    pub fn run(&mut self, input: &str) -> Result<()> {
        self.tokens.extend(tokenize(input)?);
        loop {
            match self.step() {
                Ok(true) => {}
                Ok(false) => return Ok(()),
                Err(e) => {
                    // drop leftover input so the next run starts clean
                    self.tokens.clear();
                    return Err(e);
                }
            }
        }
    }

    /// Resolve `name` through the loader and execute its contents.
    pub fn run_file(&mut self, loader: &dyn SourceLoader, name: &str) -> Result<()> {
        debug!("loading {:?}", name);
        let text = loader.load(name)?;
        self.run(&text)
    }

    /// Consume and act on one token. `Ok(false)` signals an exhausted
    /// stream.
    pub fn step(&mut self) -> Result<bool> {
        let token = match self.tokens.pop_front() {
            Some(token) => token,
            None => return Ok(false),
        };
        match token {
            Token::Number(n) => self.literal(Value::Number(n))?,
            Token::String(s) => self.literal(Value::String(Rc::new(s)))?,
            Token::Quotation(inner) => {
                let quot = self.resolve_quotation(inner);
                self.literal(Value::Quotation(Rc::new(quot)))?;
            }
            Token::Word(name) => match self.dictionary.lookup(&name) {
                Some(word) => {
                    if self.compiling && !word.is_immediate() {
                        self.compile(Opcode::Call(word))?;
                    } else {
                        self.invoke(word.body())?;
                    }
                }
                // unresolved words flow through as plain text
                None => self.literal(Value::String(Rc::new(name)))?,
            },
        }
        Ok(true)
    }

    /// Run a quotation to completion on the frame stack.
    pub fn invoke(&mut self, quot: Rc<Quotation>) -> Result<()> {
        let base = self.frames.len();
        self.frames.push(Frame::new(quot));

        while self.frames.len() > base {
            let fetched = match self.frames.last_mut() {
                None => break,
                Some(frame) => {
                    if frame.pc >= frame.body.ops.len() {
                        None
                    } else {
                        let op = frame.body.ops[frame.pc].clone();
                        frame.pc += 1;
                        Some((op, frame.pc >= frame.body.ops.len()))
                    }
                }
            };
            match fetched {
                None => {
                    self.frames.pop();
                }
                Some((op, done)) => {
                    if done {
                        // a frame retires before its final element runs, so
                        // calls in tail position replace it instead of
                        // piling on top
                        self.frames.pop();
                    }
                    if let Err(e) = self.execute(op) {
                        self.frames.truncate(base);
                        return Err(e);
                    }
                }
            }
        }
        Ok(())
    }

    /// Queue a quotation to run before the current body continues. Only
    /// meaningful from inside a native word.
    pub fn schedule(&mut self, quot: Rc<Quotation>) {
        self.frames.push(Frame::new(quot));
    }

    fn execute(&mut self, op: Opcode) -> Result<()> {
        match op {
            Opcode::Push(val) => {
                self.stack.push(val);
                Ok(())
            }
            Opcode::Call(word) => {
                trace!("calling {}", word.name());
                // the body is fetched here, not at compile time, so a word
                // that mentions itself runs its finished definition
                self.frames.push(Frame::new(word.body()));
                Ok(())
            }
            Opcode::CallDirect(ca) => ca.call(self),
        }
    }

    /// Route a literal per the current mode: onto the stack, or into the
    /// newest definition.
    fn literal(&mut self, val: Value) -> Result<()> {
        if self.compiling {
            self.compile(Opcode::Push(val))
        } else {
            self.stack.push(val);
            Ok(())
        }
    }

    /// Append to the body of the newest definition.
    pub fn compile(&mut self, op: Opcode) -> Result<()> {
        let word = self
            .dictionary
            .latest()
            .ok_or_else(|| ErrorKind::DictionaryBootstrap("no definition to compile into".to_string()))?;
        word.push_op(op);
        Ok(())
    }

    /// Turn quotation tokens into a body, binding words against the current
    /// dictionary. Unknown words become string literals, like everywhere
    /// else.
    fn resolve_quotation(&self, inner: Vec<Token>) -> Quotation {
        let mut quot = Quotation::new();
        for token in inner {
            let op = match token {
                Token::Number(n) => Opcode::Push(Value::Number(n)),
                Token::String(s) => Opcode::Push(Value::String(Rc::new(s))),
                Token::Quotation(nested) => {
                    Opcode::Push(Value::Quotation(Rc::new(self.resolve_quotation(nested))))
                }
                Token::Word(name) => match self.dictionary.lookup(&name) {
                    Some(word) => Opcode::Call(word),
                    None => Opcode::Push(Value::String(Rc::new(name))),
                },
            };
            quot.ops.push(op);
        }
        quot
    }

    /// Pull the next token out of the input stream, ahead of the normal
    /// stepping. This is how parsing words like `word` read their argument.
    pub fn next_token(&mut self) -> Option<Token> {
        self.tokens.pop_front()
    }

    pub fn set_compiling(&mut self, compiling: bool) {
        self.compiling = compiling;
    }

    pub fn is_compiling(&self) -> bool {
        self.compiling
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// The auxiliary stack. Reserved; no built-in word touches it yet.
    pub fn return_stack(&self) -> &Stack {
        &self.rstack
    }

    /// Register `word`, shadowing any earlier definition of the same name.
    pub fn define(&mut self, word: Word) -> WordId {
        if self.dictionary.lookup(word.name()).is_some() {
            debug!("{} shadows an earlier definition", word.name());
        } else {
            debug!("defining {}", word.name());
        }
        self.dictionary.define(word)
    }

    pub fn add_native_word(
        &mut self,
        name: &'static str,
        effect: &'static str,
        func: impl Fn(&mut Interpreter) -> Result<()> + 'static,
    ) {
        let mut body = Quotation::new();
        body.ops.push(Opcode::CallDirect(Callable::new(name, func)));
        self.define(Word::new(name, effect, false, body));
    }

    pub fn add_immediate_word(
        &mut self,
        name: &'static str,
        effect: &'static str,
        func: impl Fn(&mut Interpreter) -> Result<()> + 'static,
    ) {
        let mut body = Quotation::new();
        body.ops.push(Opcode::CallDirect(Callable::new(name, func)));
        self.define(Word::new(name, effect, true, body));
    }

    pub fn print(&mut self, text: &str) -> Result<()> {
        self.printer.print(text)
    }

    pub fn push<T: Into<Value>>(&mut self, val: T) {
        self.stack.push(val.into());
    }

    pub fn pop(&mut self) -> Result<Value> {
        self.stack.pop()
    }

    pub fn pop_number(&mut self) -> Result<Number> {
        self.pop()?.try_into_number()
    }

    pub fn pop_bool(&mut self) -> Result<bool> {
        self.pop()?.try_into_bool()
    }

    pub fn pop_string(&mut self) -> Result<Rc<String>> {
        self.pop()?.try_into_string()
    }

    pub fn pop_quotation(&mut self) -> Result<Rc<Quotation>> {
        self.pop()?.try_into_quotation()
    }
}

impl fmt::Debug for Interpreter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Interpreter")
            .field("stack", &self.stack)
            .field("rstack", &self.rstack)
            .field("tokens", &self.tokens)
            .field("compiling", &self.compiling)
            .field("dictionary", &self.dictionary)
            .finish()
    }
}
