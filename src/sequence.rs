//! FooBar sequence generation.
//!
//! Every position `i` in `1..=length` is mapped to a token by walking an
//! ordered rule table; the first matching rule wins. Positions matching no
//! rule render as their decimal value.
//!
//! Note there is no rule for plain multiples of 5: position 5 renders as
//! `"5"` and position 10 as `"10"`. Multiples of 7 outrank multiples of 3,
//! so position 21 renders as `"bar"`.

use std::fmt;

/// Message carried by [`SequenceError::InvalidLength`].
pub const NEGATIVE_LENGTH_MESSAGE: &str = "length is negative";

/// Largest length a single request may ask for. The whole sequence is held
/// in memory, so this bounds the allocation per request.
pub const MAX_LENGTH: u64 = 1_000_000;

/// A single element of a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Number(u64),
    Foo,
    Bar,
    FooBar,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Foo => f.write_str("foo"),
            Token::Bar => f.write_str("bar"),
            Token::FooBar => f.write_str("foobar"),
        }
    }
}

/// Rules in priority order.
const RULES: [(fn(u64) -> bool, Token); 3] = [
    (|n| n % 3 == 0 && n % 5 == 0, Token::FooBar),
    (|n| n % 7 == 0, Token::Bar),
    (|n| n % 3 == 0, Token::Foo),
];

impl Token {
    /// Selects the token for a 1-indexed position.
    pub fn for_position(position: u64) -> Self {
        RULES
            .iter()
            .find(|(matches, _)| matches(position))
            .map(|(_, token)| *token)
            .unwrap_or(Token::Number(position))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SequenceError {
    #[error("{}", NEGATIVE_LENGTH_MESSAGE)]
    InvalidLength,

    #[error("length exceeds maximum of {}", MAX_LENGTH)]
    TooLong,
}

/// An ordered, immutable list of tokens for positions `1..=len`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sequence(Vec<Token>);

impl Sequence {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.0.iter()
    }

    /// Token text for each position, in order.
    pub fn to_strings(&self) -> Vec<String> {
        self.0.iter().map(Token::to_string).collect()
    }
}

/// Renders as `[1 2 foo]`: space separated, bracketed.
impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, token) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", token)?;
        }
        f.write_str("]")
    }
}

/// Generates the sequence for positions `1..=length`.
///
/// A length of zero yields an empty sequence. Negative lengths fail with
/// [`SequenceError::InvalidLength`], lengths above [`MAX_LENGTH`] with
/// [`SequenceError::TooLong`]; neither produces a partial sequence.
pub fn generate(length: i64) -> Result<Sequence, SequenceError> {
    let length = u64::try_from(length).map_err(|_| SequenceError::InvalidLength)?;
    if length > MAX_LENGTH {
        return Err(SequenceError::TooLong);
    }
    Ok(Sequence((1..=length).map(Token::for_position).collect()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(length: i64) -> Vec<String> {
        generate(length).unwrap().to_strings()
    }

    #[test]
    fn test_generate_seven() {
        assert_eq!(strings(7), ["1", "2", "foo", "4", "5", "foo", "bar"]);
    }

    #[test]
    fn test_generate_fifteen() {
        assert_eq!(
            strings(15),
            [
                "1", "2", "foo", "4", "5", "foo", "bar", "8", "foo", "10", "11", "foo", "13",
                "bar", "foobar"
            ]
        );
    }

    #[test]
    fn test_generate_zero_is_empty() {
        let seq = generate(0).unwrap();
        assert!(seq.is_empty());
        assert_eq!(seq.to_string(), "[]");
    }

    #[test]
    fn test_generate_negative_fails() {
        assert_eq!(generate(-3), Err(SequenceError::InvalidLength));
        assert_eq!(generate(i64::MIN), Err(SequenceError::InvalidLength));
        assert_eq!(
            SequenceError::InvalidLength.to_string(),
            "length is negative"
        );
    }

    #[test]
    fn test_length_matches_request() {
        for n in [1, 2, 14, 15, 16, 100, 1000] {
            assert_eq!(generate(n).unwrap().len(), n as usize);
        }
    }

    #[test]
    fn test_generate_at_max_length() {
        let seq = generate(MAX_LENGTH as i64).unwrap();
        assert_eq!(seq.len(), MAX_LENGTH as usize);
        assert_eq!(
            seq.iter().last(),
            Some(&Token::for_position(MAX_LENGTH))
        );
    }

    #[test]
    fn test_generate_over_max_length_fails() {
        for n in [MAX_LENGTH as i64 + 1, 100_000_000_000, i64::MAX] {
            assert_eq!(generate(n), Err(SequenceError::TooLong), "length {}", n);
        }
        assert_eq!(
            SequenceError::TooLong.to_string(),
            "length exceeds maximum of 1000000"
        );
    }

    #[test]
    fn test_every_position_follows_rule_order() {
        let seq = generate(315).unwrap();
        for (i, token) in seq.iter().enumerate() {
            let n = i as u64 + 1;
            let expected = if n % 15 == 0 {
                Token::FooBar
            } else if n % 7 == 0 {
                Token::Bar
            } else if n % 3 == 0 {
                Token::Foo
            } else {
                Token::Number(n)
            };
            assert_eq!(*token, expected, "position {}", n);
        }
    }

    #[test]
    fn test_seven_outranks_three() {
        assert_eq!(Token::for_position(21), Token::Bar);
        assert_eq!(Token::for_position(63), Token::Bar);
    }

    #[test]
    fn test_fifteen_outranks_seven() {
        assert_eq!(Token::for_position(105), Token::FooBar);
    }

    #[test]
    fn test_plain_multiples_of_five_stay_numeric() {
        assert_eq!(Token::for_position(5), Token::Number(5));
        assert_eq!(Token::for_position(10), Token::Number(10));
        assert_eq!(Token::for_position(35), Token::Bar);
    }

    #[test]
    fn test_generate_is_idempotent() {
        assert_eq!(generate(50).unwrap(), generate(50).unwrap());
    }

    #[test]
    fn test_display_format() {
        assert_eq!(generate(5).unwrap().to_string(), "[1 2 foo 4 5]");
    }
}
