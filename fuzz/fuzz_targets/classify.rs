#![no_main]

use hango_core::lang::token::{Span, Token};
use hango_core::lang::{literals, operators, tokens};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        if let Some(lit) = literals::classify(s) {
            let tok = Token::literal(lit, s, Span::new(0, s.len()));
            assert_eq!(tok.lit(), Some(lit));
        }
        if let Some(kind) = tokens::from_spelling(s) {
            assert_eq!(tokens::as_str(kind), s);
        }
        if let Some(op) = operators::from_str(s) {
            assert_eq!(operators::as_str(op), s);
            assert_eq!(operators::try_precedence(op).is_ok(), operators::is_binary(op));
        }
    }
});
