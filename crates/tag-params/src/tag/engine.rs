//! Token-driven state machine assembling parameters from a lexed tag.

use crate::errors::{ParseError, expected_argument, expected_delimiter, expected_name};
use crate::param::Param;

use super::lexer::{Lexer, Token};
use super::sink::ParamSink;
use super::unescape::unescape_quoted;

/// Run the grammar over `input`, reporting each completed parameter to
/// `sink` in source order.
///
/// `input` must already be trimmed and checked against the ignore
/// sentinel; the engine only knows the grammar. With no pending parameter,
/// any token except a delimiter starts one, its lexeme becoming the name.
/// End of input flushes a pending parameter, so a trailing delimiter is
/// equivalent to none.
pub(crate) fn run<S: ParamSink>(input: &str, sink: &mut S) -> Result<(), ParseError> {
    let mut lexer = Lexer::new(input);
    let mut pending: Option<Param> = None;

    while let Some(token) = lexer.next_token() {
        match token {
            Token::LParen if pending.is_some() => {
                let args = parse_args(&mut lexer)?;
                if let Some(param) = pending.as_mut() {
                    param.args = args;
                }
            }
            Token::Comma | Token::Semi => match pending.take() {
                Some(param) => sink.accept(param),
                None => return Err(expected_name(&token)),
            },
            other => {
                if pending.is_some() {
                    return Err(expected_delimiter(&other));
                }
                pending = Some(Param::new(other.to_string()));
            }
        }
    }

    if let Some(param) = pending {
        sink.accept(param);
    }
    Ok(())
}

/// Consume tokens up to the closing parenthesis of an argument list.
///
/// Commas separate arguments and are otherwise ignored, so `(1,,2)` and
/// `(1,2)` read the same. Quoted arguments are unescaped; anything else is
/// appended verbatim.
fn parse_args(lexer: &mut Lexer<'_>) -> Result<Vec<String>, ParseError> {
    let mut args = Vec::new();
    loop {
        match lexer.next_token() {
            None => return Err(ParseError::UnexpectedEndOfInput),
            Some(Token::RParen) => return Ok(args),
            Some(Token::Comma) => {}
            Some(Token::Semi) => return Err(expected_argument(Token::Semi)),
            Some(Token::Quoted(lexeme)) => args.push(unescape_quoted(&lexeme)),
            Some(other) => args.push(other.to_string()),
        }
    }
}
