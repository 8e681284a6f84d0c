use std::fmt;
use std::rc::Rc;

use crate::errors::Result;
use crate::interpreter::Interpreter;

pub type NativeFn = Rc<dyn Fn(&mut Interpreter) -> Result<()>>;

/// A named native operation over the interpreter.
#[derive(Clone)]
pub struct Callable {
    name: &'static str,
    func: NativeFn,
}

impl Callable {
    pub fn new(name: &'static str, func: impl Fn(&mut Interpreter) -> Result<()> + 'static) -> Self {
        Callable {
            name,
            func: Rc::new(func),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn call(&self, interp: &mut Interpreter) -> Result<()> {
        (self.func)(interp)
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<native {}>", self.name)
    }
}

/// Natives compare by identity.
impl PartialEq for Callable {
    fn eq(&self, other: &Callable) -> bool {
        Rc::ptr_eq(&self.func, &other.func)
    }
}
