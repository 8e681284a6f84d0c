use quoth_core::errors::*;
use quoth_core::{Interpreter, Number, Value};

/// Load the stack shuffling words.
pub fn stack(interp: &mut Interpreter) -> Result<()> {
    interp.add_native_word("drop", "( a -- )", |interp| {
        interp.pop()?;
        Ok(())
    });

    interp.add_native_word("swap", "( a b -- b a )", |interp| {
        let a = interp.pop()?;
        let b = interp.pop()?;
        interp.push(a);
        interp.push(b);
        Ok(())
    });

    interp.add_native_word("dup", "( a -- a a )", |interp| {
        let a = interp.pop()?;
        interp.push(a.clone());
        interp.push(a);
        Ok(())
    });

    interp.add_native_word("over", "( a b -- a b a )", |interp| {
        let a = interp.stack.at(1)?.clone();
        interp.push(a);
        Ok(())
    });

    interp.add_native_word("rot", "( a b c -- b c a )", |interp| {
        let a = interp.stack.remove_at(2)?;
        interp.push(a);
        Ok(())
    });

    interp.add_native_word("-rot", "( a b c -- c a b )", |interp| {
        let c = interp.pop()?;
        interp.stack.insert_at(1, c)
    });

    interp.add_native_word("2drop", "( a b -- )", |interp| {
        interp.pop()?;
        interp.pop()?;
        Ok(())
    });

    interp.add_native_word("2dup", "( a b -- a b a b )", |interp| {
        let a = interp.stack.at(1)?.clone();
        let b = interp.stack.peek()?.clone();
        interp.push(a);
        interp.push(b);
        Ok(())
    });

    interp.add_native_word("2swap", "( a b c d -- c d a b )", |interp| {
        let d = interp.pop()?;
        let c = interp.pop()?;
        let b = interp.pop()?;
        let a = interp.pop()?;
        interp.push(c);
        interp.push(d);
        interp.push(a);
        interp.push(b);
        Ok(())
    });

    // duplicates only when the top is a non-zero number
    interp.add_native_word("?dup", "( a -- a a? )", |interp| {
        let keep = match interp.stack.peek()? {
            Value::Number(n) => !n.is_zero(),
            other => {
                return Err(ErrorKind::TypeMismatch(format!("{:?} is not a number", other)).into())
            }
        };
        if keep {
            let a = interp.stack.peek()?.clone();
            interp.push(a);
        }
        Ok(())
    });

    interp.add_native_word("pick", "( n -- val )", |interp| {
        let depth = match interp.pop_number()? {
            Number::Int(i) if i >= 0 => i as usize,
            other => {
                return Err(
                    ErrorKind::TypeMismatch(format!("{:?} is not a stack depth", other)).into(),
                )
            }
        };
        let val = interp.stack.at(depth)?.clone();
        interp.push(val);
        Ok(())
    });

    interp.add_native_word("clear", "( ... -- )", |interp| {
        interp.stack.clear();
        Ok(())
    });

    interp.add_native_word("depth", "( -- n )", |interp| {
        let n = interp.stack.len() as i64;
        interp.push(n);
        Ok(())
    });

    Ok(())
}
