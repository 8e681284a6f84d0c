use quoth_core::errors::*;
use quoth_core::{Interpreter, Number};

/// Load arithmetic, comparison, and boolean words.
pub fn ops(interp: &mut Interpreter) -> Result<()> {
    interp.add_native_word("+", "( a b -- sum )", |interp| {
        let b = interp.pop_number()?;
        let a = interp.pop_number()?;
        interp.push(a.add(b));
        Ok(())
    });

    interp.add_native_word("-", "( a b -- diff )", |interp| {
        let b = interp.pop_number()?;
        let a = interp.pop_number()?;
        interp.push(a.sub(b));
        Ok(())
    });

    interp.add_native_word("*", "( a b -- prod )", |interp| {
        let b = interp.pop_number()?;
        let a = interp.pop_number()?;
        interp.push(a.mul(b));
        Ok(())
    });

    interp.add_native_word("/", "( a b -- quot )", |interp| {
        let b = interp.pop_number()?;
        let a = interp.pop_number()?;
        interp.push(a.div(b));
        Ok(())
    });

    interp.add_native_word("mod", "( a b -- rem )", |interp| {
        let b = interp.pop_number()?;
        let a = interp.pop_number()?;
        interp.push(a.modulo(b));
        Ok(())
    });

    interp.add_native_word("incr", "( n -- n+1 )", |interp| {
        let n = interp.pop_number()?;
        interp.push(n.add(Number::Int(1)));
        Ok(())
    });

    interp.add_native_word("decr", "( n -- n-1 )", |interp| {
        let n = interp.pop_number()?;
        interp.push(n.sub(Number::Int(1)));
        Ok(())
    });

    interp.add_native_word("=", "( a b -- eq )", |interp| {
        let b = interp.pop_number()?;
        let a = interp.pop_number()?;
        interp.push(a == b);
        Ok(())
    });

    interp.add_native_word("<>", "( a b -- ne )", |interp| {
        let b = interp.pop_number()?;
        let a = interp.pop_number()?;
        interp.push(a != b);
        Ok(())
    });

    interp.add_native_word("<", "( a b -- lt )", |interp| {
        let b = interp.pop_number()?;
        let a = interp.pop_number()?;
        interp.push(a < b);
        Ok(())
    });

    interp.add_native_word("<=", "( a b -- le )", |interp| {
        let b = interp.pop_number()?;
        let a = interp.pop_number()?;
        interp.push(a <= b);
        Ok(())
    });

    interp.add_native_word(">", "( a b -- gt )", |interp| {
        let b = interp.pop_number()?;
        let a = interp.pop_number()?;
        interp.push(a > b);
        Ok(())
    });

    interp.add_native_word(">=", "( a b -- ge )", |interp| {
        let b = interp.pop_number()?;
        let a = interp.pop_number()?;
        interp.push(a >= b);
        Ok(())
    });

    interp.add_native_word("and", "( a b -- a&b )", |interp| {
        let b = interp.pop_bool()?;
        let a = interp.pop_bool()?;
        interp.push(a && b);
        Ok(())
    });

    interp.add_native_word("or", "( a b -- a|b )", |interp| {
        let b = interp.pop_bool()?;
        let a = interp.pop_bool()?;
        interp.push(a || b);
        Ok(())
    });

    interp.add_native_word("xor", "( a b -- a^b )", |interp| {
        let b = interp.pop_bool()?;
        let a = interp.pop_bool()?;
        interp.push(a ^ b);
        Ok(())
    });

    interp.add_native_word("not", "( a -- !a )", |interp| {
        let a = interp.pop_bool()?;
        interp.push(!a);
        Ok(())
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use quoth_core::errors::ErrorKind;
    use quoth_core::Interpreter;

    use super::ops;

    fn interp() -> Interpreter {
        let (mut interp, _) = Interpreter::new_recording();
        crate::kernel(&mut interp).unwrap();
        ops(&mut interp).unwrap();
        interp
    }

    #[test]
    fn integer_arithmetic_stays_integral() {
        let mut interp = interp();
        interp.run("2 3 + 10 4 - 3 4 *").unwrap();
        interp.assert_stack(&[5i64, 6, 12]);
    }

    #[test]
    fn mixed_arithmetic_promotes() {
        let mut interp = interp();
        interp.run("2 3.0 +").unwrap();
        interp.assert_stack(&[5.0]);
    }

    #[test]
    fn division_narrows_when_exact() {
        let mut interp = interp();
        interp.run("4 2 /").unwrap();
        interp.assert_stack(&[2i64]);
        interp.run("2 5 /").unwrap();
        interp.assert_stack_top(&[0.4]);
    }

    #[test]
    fn modulo_always_floats() {
        let mut interp = interp();
        interp.run("7 4 mod 6 3 mod").unwrap();
        interp.assert_stack(&[3.0, 0.0]);
    }

    #[test]
    fn increment_and_decrement() {
        let mut interp = interp();
        interp.run("10 incr 10 decr 1.5 incr").unwrap();
        assert_eq!(interp.pop().unwrap(), 2.5);
        assert_eq!(interp.pop().unwrap(), 9i64);
        assert_eq!(interp.pop().unwrap(), 11i64);
    }

    #[test]
    fn comparisons_coerce() {
        let mut interp = interp();
        interp.run("1 2 < 2.0 2 = 3 2 >= 1 1 <>").unwrap();
        interp.assert_stack(&[true, true, true, false]);
    }

    #[test]
    fn boolean_words() {
        let mut interp = interp();
        interp
            .run("true false and true false or true true xor false not")
            .unwrap();
        interp.assert_stack(&[false, true, false, true]);
    }

    #[test]
    fn boolean_words_require_booleans() {
        let mut interp = interp();
        let err = interp.run("1 2 and").unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::TypeMismatch(_)));
    }

    #[test]
    fn arithmetic_rejects_strings() {
        let mut interp = interp();
        let err = interp.run("s\" one\" 1 +").unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::TypeMismatch(_)));
    }
}
