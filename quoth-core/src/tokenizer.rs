use std::str::Chars;

use crate::errors::*;
use crate::numeric::Number;

/// One lexical unit of program text.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Number(Number),
    String(String),
    Quotation(Vec<Token>),
    Word(String),
}

/// Split `input` into tokens in a single pass.
///
/// Whitespace separates tokens. The token `s"` introduces a string literal
/// running to the next `"`. A `[` at the start of a token captures raw text
/// up to the first `]` and tokenizes it recursively. A token starting with
/// `#` discards the rest of its line. Everything else is classified as an
/// integer, a float, or a bare word, in that order.
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    let mut chars = input.chars();
    let mut tokens = Vec::new();
    let mut buffer = String::new();

    while let Some(ch) = chars.next() {
        if is_separator(ch) {
            if buffer == "s\"" {
                buffer.clear();
                tokens.push(Token::String(scan_string(&mut chars)?));
            } else if buffer.starts_with('#') {
                buffer.clear();
                if ch != '\n' {
                    skip_line(&mut chars);
                }
            } else {
                flush(&mut buffer, &mut tokens);
            }
        } else if ch == '[' && buffer.is_empty() {
            let inner = scan_quotation(&mut chars)?;
            tokens.push(Token::Quotation(tokenize(&inner)?));
        } else {
            buffer.push(ch);
        }
    }

    if buffer == "s\"" {
        return Err(ErrorKind::UnterminatedString.into());
    }
    if buffer.starts_with('#') {
        buffer.clear();
    }
    flush(&mut buffer, &mut tokens);

    Ok(tokens)
}

/// Classify and emit the pending token. Empty buffers emit nothing, so runs
/// of whitespace never produce tokens.
fn flush(buffer: &mut String, tokens: &mut Vec<Token>) {
    if buffer.is_empty() {
        return;
    }
    let token = match Number::parse(buffer) {
        Ok(n) => Token::Number(n),
        Err(_) => Token::Word(buffer.clone()),
    };
    tokens.push(token);
    buffer.clear();
}

fn is_separator(ch: char) -> bool {
    match ch {
        ' ' | '\t' | '\n' | '\r' | '\u{c}' => true,
        _ => false,
    }
}

fn scan_string(chars: &mut Chars) -> Result<String> {
    let mut text = String::new();
    for ch in chars {
        if ch == '"' {
            return Ok(text);
        }
        text.push(ch);
    }
    Err(ErrorKind::UnterminatedString.into())
}

/// Raw scan to the first `]`. Quotation literals do not nest.
fn scan_quotation(chars: &mut Chars) -> Result<String> {
    let mut text = String::new();
    for ch in chars {
        if ch == ']' {
            return Ok(text);
        }
        text.push(ch);
    }
    Err(ErrorKind::UnterminatedQuotation.into())
}

fn skip_line(chars: &mut Chars) {
    for ch in chars {
        if ch == '\n' {
            break;
        }
    }
}
