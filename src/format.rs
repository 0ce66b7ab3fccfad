//! Format strings for rendering differences.
//!
//! A format string is literal text with verbs: `%Y`, `%M`, `%W` and `%D`
//! render a counted noun ("3 years", "1 month"), while the lowercase forms
//! `%y`, `%m`, `%w` and `%d` render the bare number. Any other character after
//! `%` is rejected, as is a string without a single verb.

use std::fmt;
use std::str::FromStr;

use crate::decompose::Counts;
use crate::error::{DiffError, Result};
use crate::units::{Unit, UnitSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Verb {
    unit: Unit,
    /// Uppercase verb: number followed by the unit noun.
    counted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Literal(String),
    Verb(Verb),
}

/// What to do with verbs whose count is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zeros {
    /// Drop the verb together with one space in front of it.
    Elide,
    /// Render `0` like any other count.
    Keep,
}

/// A validated format string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatSpec {
    raw: String,
    tokens: Vec<Token>,
}

impl FormatSpec {
    pub fn parse(raw: &str) -> Result<FormatSpec> {
        let mut tokens = Vec::new();
        let mut literal = String::new();
        let mut chars = raw.chars();

        while let Some(c) = chars.next() {
            if c != '%' {
                literal.push(c);
                continue;
            }

            let verb = chars.next().ok_or_else(|| DiffError::DanglingPercent {
                format: raw.to_string(),
            })?;
            let unit = Unit::from_verb(verb).ok_or_else(|| DiffError::UnknownVerb {
                format: raw.to_string(),
                verb,
            })?;

            if !literal.is_empty() {
                tokens.push(Token::Literal(std::mem::take(&mut literal)));
            }
            tokens.push(Token::Verb(Verb {
                unit,
                counted: verb.is_ascii_uppercase(),
            }));
        }

        if !literal.is_empty() {
            tokens.push(Token::Literal(literal));
        }

        let spec = FormatSpec {
            raw: raw.to_string(),
            tokens,
        };
        if spec.units().is_empty() {
            return Err(DiffError::EmptyUnitSet);
        }
        Ok(spec)
    }

    /// Units referenced by the verbs of this format.
    pub fn units(&self) -> UnitSet {
        self.verbs().map(|v| v.unit).collect()
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    fn verbs(&self) -> impl Iterator<Item = Verb> + '_ {
        self.tokens.iter().filter_map(|t| match t {
            Token::Verb(v) => Some(*v),
            Token::Literal(_) => None,
        })
    }

    /// Substitutes every verb with its count from `counts`.
    pub fn render(&self, counts: &Counts, zeros: Zeros) -> String {
        let mut out = String::with_capacity(self.raw.len() * 2);

        for token in &self.tokens {
            match token {
                Token::Literal(text) => out.push_str(text),
                Token::Verb(verb) => {
                    let n = counts.get(verb.unit);
                    if n == 0 && zeros == Zeros::Elide {
                        if out.ends_with(' ') {
                            out.pop();
                        }
                    } else if verb.counted {
                        out.push_str(&verb.unit.counted(n));
                    } else {
                        out.push_str(&n.to_string());
                    }
                }
            }
        }

        out
    }
}

impl FromStr for FormatSpec {
    type Err = DiffError;

    fn from_str(s: &str) -> Result<Self> {
        FormatSpec::parse(s)
    }
}

impl fmt::Display for FormatSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
