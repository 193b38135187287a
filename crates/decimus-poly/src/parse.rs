//! Parsing of textual polynomial notation.
//!
//! Accepts the compact notation used throughout the toolkit: terms are a
//! signed coefficient, an optional `x` and an optional degree, so
//! `"x^2 + 5"`, `"4x3-2x+1"` and `"-x"` all parse. Spaces and `^` carry
//! no meaning and are stripped before scanning. Terms of equal degree
//! accumulate.

use decimus_decimal::{Decimal, NumericContext};
use thiserror::Error;

use crate::dense::Polynomial;

/// Errors produced when parsing polynomial notation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input contained no terms.
    #[error("empty polynomial expression")]
    Empty,
    /// A character that fits no term was encountered.
    #[error("unexpected character `{character}` at position {position}")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Its position in the stripped input.
        position: usize,
    },
    /// The input ended in the middle of a term.
    #[error("unexpected end of expression")]
    UnexpectedEnd,
    /// A coefficient did not scan as a decimal literal.
    #[error("invalid coefficient `{text}`")]
    InvalidCoefficient {
        /// The text that failed to scan.
        text: String,
    },
    /// A degree did not scan as a machine integer.
    #[error("invalid degree `{text}`")]
    InvalidDegree {
        /// The text that failed to scan.
        text: String,
    },
}

impl Polynomial {
    /// Parses polynomial notation into coefficients at the context's
    /// precision.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] for empty input, stray characters,
    /// malformed coefficients or malformed degrees.
    pub fn parse(text: &str, ctx: &NumericContext) -> Result<Self, ParseError> {
        let chars: Vec<char> = text.chars().filter(|c| *c != ' ' && *c != '^').collect();
        if chars.is_empty() {
            return Err(ParseError::Empty);
        }

        let mut terms: Vec<(Decimal, usize)> = Vec::new();
        let mut max_degree = 0usize;
        let mut pos = 0usize;

        while pos < chars.len() {
            let mut negative = false;
            if chars[pos] == '+' || chars[pos] == '-' {
                negative = chars[pos] == '-';
                pos += 1;
            }

            let number_start = pos;
            while pos < chars.len() && (chars[pos].is_ascii_digit() || chars[pos] == '.') {
                pos += 1;
            }
            let number: String = chars[number_start..pos].iter().collect();

            let degree = if pos < chars.len() && chars[pos] == 'x' {
                pos += 1;
                let degree_start = pos;
                while pos < chars.len() && chars[pos].is_ascii_digit() {
                    pos += 1;
                }
                let degree_text: String = chars[degree_start..pos].iter().collect();
                if degree_text.is_empty() {
                    1
                } else {
                    degree_text
                        .parse()
                        .map_err(|_| ParseError::InvalidDegree { text: degree_text })?
                }
            } else if number.is_empty() {
                // Neither a coefficient nor an `x`: nothing consumed.
                return match chars.get(pos) {
                    Some(&character) => Err(ParseError::UnexpectedCharacter {
                        character,
                        position: pos,
                    }),
                    None => Err(ParseError::UnexpectedEnd),
                };
            } else {
                0
            };

            let coefficient = if number.is_empty() {
                ctx.one()
            } else {
                ctx.parse(&number)
                    .map_err(|_| ParseError::InvalidCoefficient { text: number })?
            };
            let coefficient = if negative { -coefficient } else { coefficient };

            max_degree = max_degree.max(degree);
            terms.push((coefficient, degree));
        }

        let mut coeffs = vec![ctx.zero(); max_degree + 1];
        for (coefficient, degree) in terms {
            coeffs[degree] = coeffs[degree].clone() + coefficient;
        }

        Ok(Self::new(coeffs))
    }
}
