use quoth_core::errors::*;
use quoth_core::Interpreter;

/// Load the quotation control words.
pub fn branch(interp: &mut Interpreter) -> Result<()> {
    interp.add_native_word("if", "( ? then-q else-q -- .. )", |interp| {
        let else_branch = interp.pop_quotation()?;
        let if_branch = interp.pop_quotation()?;
        let cond = interp.pop_bool()?;
        if cond {
            interp.schedule(if_branch);
        } else {
            interp.schedule(else_branch);
        }
        Ok(())
    });

    interp.add_native_word("call", "( quot -- .. )", |interp| {
        let quot = interp.pop_quotation()?;
        interp.schedule(quot);
        Ok(())
    });

    Ok(())
}
