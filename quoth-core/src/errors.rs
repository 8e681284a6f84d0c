error_chain! {
    foreign_links {
        Io(::std::io::Error);
    }

    errors {
        // tokenizing errors
        UnterminatedString
        UnterminatedQuotation
        UnknownNumericFormat(token: String) {
            display("Unknown Numeric Format: {:?}", token)
        }

        // evaluation errors
        EndOfInput
        StackUnderflow
        TypeMismatch(t: String) {
            display("Type Mismatch: {}", t)
        }

        // bootstrap errors
        DictionaryBootstrap(what: String) {
            display("Dictionary Bootstrap Failure: {}", what)
        }
    }
}
