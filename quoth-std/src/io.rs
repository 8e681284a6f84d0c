use quoth_core::errors::*;
use quoth_core::io::format_stack;
use quoth_core::Interpreter;

/// Load the printing words.
pub fn io(interp: &mut Interpreter) -> Result<()> {
    interp.add_native_word(".", "( val -- )", |interp| {
        let val = interp.pop()?;
        let text = format!("{}", val);
        interp.print(&text)
    });

    interp.add_native_word(".s", "( -- )", |interp| {
        let text = format_stack(&interp.stack, usize::MAX);
        interp.print(&text)
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use quoth_core::Interpreter;

    use super::io;

    #[test]
    fn print_pops_and_renders() {
        let (mut interp, printer) = Interpreter::new_recording();
        io(&mut interp).unwrap();
        interp.run("42 . 2.5 . s\" hi\" .").unwrap();
        assert!(interp.stack.is_empty());
        assert_eq!(printer.lines(), vec!["42", "2.500000", "\"hi\""]);
    }

    #[test]
    fn stack_word_previews_without_popping() {
        let (mut interp, printer) = Interpreter::new_recording();
        io(&mut interp).unwrap();
        interp.run("1 2 .s").unwrap();
        assert_eq!(interp.stack.len(), 2);
        assert_eq!(printer.lines(), vec!["[1, 2]"]);
    }
}
