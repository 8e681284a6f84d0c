use quoth_core::errors::*;
use quoth_core::Interpreter;

/// Source executed at bootstrap, right after the native words are in place.
pub const PRELUDE: &str = include_str!("prelude.qth");

/// Install the complete built-in vocabulary, then run the prelude through
/// the ordinary interpretation path.
pub fn stdlib(interp: &mut Interpreter) -> Result<()> {
    crate::kernel(interp)?;
    crate::stack(interp)?;
    crate::ops(interp)?;
    crate::branch(interp)?;
    crate::io(interp)?;
    interp.run(PRELUDE)
}

#[cfg(test)]
mod tests {
    use quoth_core::Interpreter;

    use super::stdlib;

    fn interp() -> Interpreter {
        let (mut interp, _) = Interpreter::new_recording();
        stdlib(&mut interp).unwrap();
        interp
    }

    #[test]
    fn prelude_defines_the_derived_vocabulary() {
        let mut interp = interp();
        interp.run("1 2 nip 5 negate -3 abs").unwrap();
        interp.assert_stack(&[2i64, -5, 3]);
    }

    #[test]
    fn min_and_max() {
        let mut interp = interp();
        interp.run("3 7 max 3 7 min").unwrap();
        interp.assert_stack(&[7i64, 3]);
    }

    #[test]
    fn zero_comparisons() {
        let mut interp = interp();
        interp.run("0 0= 5 0= 5 0<> -1 0< 1 0>").unwrap();
        interp.assert_stack(&[true, false, true, true, true]);
    }

    #[test]
    fn prelude_and_user_definitions_compose() {
        let mut interp = interp();
        interp.run(": double 2 * ; 4 double negate").unwrap();
        interp.assert_stack(&[-8i64]);
    }
}
