//! Parser recognizes decimal integers and decimal numbers with a fractional part.

use crate::defs::Sign;

#[cfg(feature = "std")]
use std::str::Chars;

#[cfg(not(feature = "std"))]
use {alloc::vec::Vec, core::str::Chars};

pub struct ParserState<'a> {
    chars: Chars<'a>,
    cur_ch: Option<char>,
    sign: Sign,
    int_digits: Vec<u8>,
    frac_digits: Vec<u8>,
    valid: bool,
}

impl<'a> ParserState<'a> {
    fn new(s: &'a str) -> Self {
        ParserState {
            chars: s.chars(),
            cur_ch: None,
            sign: Sign::Pos,
            int_digits: Vec::new(),
            frac_digits: Vec::new(),
            valid: false,
        }
    }

    /// Returns next character of a string, or None if string end reached.
    fn next_char(&mut self) -> Option<char> {
        self.cur_ch = self.chars.next();
        self.cur_ch
    }

    fn cur_char(&self) -> Option<char> {
        self.cur_ch
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Returns the sign, the digits of the integer part, and the digits of the fractional part.
    pub fn raw_parts(&self) -> (Sign, &[u8], &[u8]) {
        (self.sign, &self.int_digits, &self.frac_digits)
    }
}

// Leading minus sign.
fn parse_sign(parser_state: &mut ParserState) {
    if Some('-') == parser_state.next_char() {
        parser_state.sign = Sign::Neg;
        parser_state.next_char();
    }
}

/// Parse an integer: an optional minus sign followed by digits.
/// Leading zeroes are not accepted, and zero is accepted only as "0".
pub fn parse_int(s: &str) -> ParserState {
    let mut parser_state = ParserState::new(s);
    parse_sign(&mut parser_state);

    let mut int_digits = Vec::new();
    parse_digits(&mut parser_state, &mut int_digits);
    parser_state.int_digits = int_digits;

    let digits = &parser_state.int_digits;
    parser_state.valid = parser_state.cur_char().is_none()
        && !digits.is_empty()
        && (digits[0] != 0 || (digits.len() == 1 && parser_state.sign == Sign::Pos));

    parser_state
}

/// Parse a number with a fractional part: an optional minus sign,
/// one or more digits, a point, one or more digits.
pub fn parse_frac(s: &str) -> ParserState {
    let mut parser_state = ParserState::new(s);
    parse_sign(&mut parser_state);

    let mut int_digits = Vec::new();
    parse_digits(&mut parser_state, &mut int_digits);
    parser_state.int_digits = int_digits;

    if Some('.') == parser_state.cur_char() && !parser_state.int_digits.is_empty() {
        parser_state.next_char();

        let mut frac_digits = Vec::new();
        parse_digits(&mut parser_state, &mut frac_digits);
        parser_state.frac_digits = frac_digits;

        parser_state.valid =
            parser_state.cur_char().is_none() && !parser_state.frac_digits.is_empty();
    }

    parser_state
}

fn parse_digits(parser_state: &mut ParserState, digits: &mut Vec<u8>) {
    let mut ch = parser_state.cur_char();
    while let Some(c) = ch {
        if let Some(d) = c.to_digit(10) {
            digits.push(d as u8);
        } else {
            break;
        }
        ch = parser_state.next_char();
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_parser_int() {
        let ps = parse_int("-120");
        assert!(ps.is_valid());
        let (s, i, f) = ps.raw_parts();
        assert_eq!(s, Sign::Neg);
        assert_eq!(i, &[1, 2, 0]);
        assert!(f.is_empty());

        let ps = parse_int("0");
        assert!(ps.is_valid());
        assert_eq!(ps.raw_parts().0, Sign::Pos);

        for s in ["", "-", "-0", "00", "012", "+1", "1.0", "12a", " 1", "1 ", "١"] {
            assert!(!parse_int(s).is_valid(), "{:?}", s);
        }
    }

    #[test]
    fn test_parser_frac() {
        let ps = parse_frac("-0012.340");
        assert!(ps.is_valid());
        let (s, i, f) = ps.raw_parts();
        assert_eq!(s, Sign::Neg);
        assert_eq!(i, &[0, 0, 1, 2]);
        assert_eq!(f, &[3, 4, 0]);

        assert!(parse_frac("0.0").is_valid());
        assert!(parse_frac("-0.0").is_valid());

        for s in ["", "1", "1.", ".5", "-.5", "1.2.3", "1.5e3", "1,5", "+1.5", "- 1.5", "1.5 "] {
            assert!(!parse_frac(s).is_valid(), "{:?}", s);
        }
    }
}
