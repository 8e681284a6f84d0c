use std::rc::Rc;

use quoth_core::errors::*;
use quoth_core::{Interpreter, Opcode, Quotation, Token, Value, Word};

/// Load the boolean constants and the definition machinery.
pub fn kernel(interp: &mut Interpreter) -> Result<()> {
    interp.add_native_word("true", "( -- b )", |interp| {
        interp.push(true);
        Ok(())
    });

    interp.add_native_word("false", "( -- b )", |interp| {
        interp.push(false);
        Ok(())
    });

    // reads the next token from the input stream instead of the stack
    interp.add_native_word("word", "( -- name )", |interp| {
        let token = interp.next_token().ok_or(ErrorKind::EndOfInput)?;
        let name = match token {
            Token::Word(name) => name,
            Token::String(s) => s,
            other => {
                return Err(
                    ErrorKind::TypeMismatch(format!("{:?} cannot name a definition", other)).into(),
                )
            }
        };
        interp.push(Value::String(Rc::new(name)));
        Ok(())
    });

    interp.add_native_word("create", "( name -- )", |interp| {
        let name = interp.pop_string()?;
        interp.define(Word::new(&name, "", false, Quotation::new()));
        Ok(())
    });

    interp.add_native_word(",", "( val -- )", |interp| {
        let val = interp.pop()?;
        interp.compile(Opcode::Push(val))
    });

    interp.add_native_word(">c", "( -- )", |interp| {
        interp.set_compiling(true);
        Ok(())
    });

    interp.add_immediate_word("<c", "( -- )", |interp| {
        interp.set_compiling(false);
        Ok(())
    });

    interp.add_immediate_word("immediate", "( -- )", |interp| {
        let word = interp
            .dictionary()
            .latest()
            .ok_or_else(|| ErrorKind::DictionaryBootstrap("nothing to mark immediate".to_string()))?;
        word.mark_immediate();
        Ok(())
    });

    // `:` and `;` are not primitive; their bodies are spliced together from
    // the words above
    let colon = compose(interp, &["word", "create", ">c"])?;
    interp.define(Word::new(":", "( -- )", true, colon));

    let semicolon = compose(interp, &["<c"])?;
    interp.define(Word::new(";", "( -- )", true, semicolon));

    Ok(())
}

/// Concatenate the bodies of already-registered words into one body.
fn compose(interp: &Interpreter, names: &[&str]) -> Result<Quotation> {
    let mut quot = Quotation::new();
    for name in names {
        let word = interp.dictionary().lookup(name).ok_or_else(|| {
            ErrorKind::DictionaryBootstrap(format!("missing primitive {:?}", name))
        })?;
        quot.ops.extend(word.body().ops.iter().cloned());
    }
    Ok(quot)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interp() -> Interpreter {
        let (mut interp, _) = Interpreter::new_recording();
        kernel(&mut interp).unwrap();
        interp
    }

    #[test]
    fn constants() {
        let mut interp = interp();
        interp.run("true false").unwrap();
        interp.assert_stack(&[true, false]);
    }

    #[test]
    fn colon_defines_new_words() {
        let mut interp = interp();
        interp.run(": the-answer 42 ;").unwrap();
        interp.run("the-answer").unwrap();
        interp.assert_stack(&[42i64]);
    }

    #[test]
    fn definitions_compile_rather_than_run() {
        let mut interp = interp();
        interp.run(": later 1 2 ;").unwrap();
        assert!(interp.stack.is_empty());
    }

    #[test]
    fn redefinition_shadows() {
        let mut interp = interp();
        interp.run(": x 1 ; : x 2 ; x").unwrap();
        interp.assert_stack(&[2i64]);
    }

    #[test]
    fn compiled_references_bind_early() {
        let mut interp = interp();
        interp.run(": a 1 ;  : b a ;  : a 2 ;").unwrap();
        interp.run("b a").unwrap();
        interp.assert_stack(&[1i64, 2]);
    }

    #[test]
    fn immediate_marks_the_newest_word() {
        let mut interp = interp();
        interp.run(": noisy 42 ; immediate").unwrap();
        interp.run(": quiet noisy ;").unwrap();
        // noisy ran during compilation instead of being compiled
        interp.assert_stack(&[42i64]);
        interp.run("quiet").unwrap();
        interp.assert_stack(&[42i64]);
    }

    #[test]
    fn comma_appends_to_the_newest_body() {
        let mut interp = interp();
        interp.run("word tricky create 42 , tricky").unwrap();
        interp.assert_stack(&[42i64]);
    }

    #[test]
    fn compile_toggles_nest_inside_definitions() {
        let mut interp = interp();
        interp.run(": k 1 <c 2 >c 3 ;").unwrap();
        interp.assert_stack(&[2i64]);
        interp.run("k").unwrap();
        interp.assert_stack(&[2i64, 1, 3]);
    }

    #[test]
    fn missing_name_is_an_error() {
        let mut interp = interp();
        let err = interp.run(":").unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::EndOfInput));
    }

    #[test]
    fn numerals_cannot_name_definitions() {
        let mut interp = interp();
        let err = interp.run(": 5 ;").unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::TypeMismatch(_)));
    }

    #[test]
    fn string_tokens_can_name_definitions() {
        let mut interp = interp();
        interp.run("word s\" spaced name\" create").unwrap();
        assert!(interp.dictionary().lookup("spaced name").is_some());
    }
}
