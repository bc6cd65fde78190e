//! Textual concept syntax.
//!
//! The grammar accepts the rendered notation plus ASCII spellings:
//!
//! ```text
//! concept  := conjunct (AND conjunct)*
//! conjunct := EXISTS role '.' filler | atom
//! filler   := EXISTS role '.' filler | atom
//! atom     := name | '(' concept? ')'
//! AND      := '⊓' | '&' | "and"
//! EXISTS   := '∃' | "some" whitespace
//! ```
//!
//! A single conjunct parses to itself rather than to a one-element
//! conjunction, and `()` (or blank input) parses to the empty conjunction.
//! `and` and `some` are keywords of this syntax and cannot be used as names.
//! Parentheses and restrictions may nest at most [`MAX_NESTING`] levels.

use std::str::FromStr;

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{char, multispace0, multispace1, satisfy},
    combinator::{cut, map, map_res, not, opt},
    error::{context, VerboseError, VerboseErrorKind},
    multi::many0,
    sequence::{delimited, pair, preceded, terminated, tuple},
    IResult,
};
use thiserror::Error;

use super::expression::Concept;
use super::value_objects::RoleName;

type ParseResult<'a, T> = IResult<&'a str, T, VerboseError<&'a str>>;

const CLOSING_PARENTHESIS: &str = "closing parenthesis";
const ROLE: &str = "role";
const NESTING: &str = "nesting";

/// Deepest combined nesting of parentheses and restrictions accepted by
/// [`parse_concept`].
pub const MAX_NESTING: usize = 64;

/// Failure raised when text does not follow the concept syntax.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{kind} at column {position}")]
pub struct ParseError {
    /// Zero based character offset of the failure.
    pub position: usize,
    pub kind: ParseErrorKind,
}

/// Categorises a [`ParseError`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseErrorKind {
    #[error("unexpected character `{0}`")]
    UnexpectedCharacter(char),
    #[error("unexpected end of input")]
    UnexpectedEnd,
    #[error("missing closing parenthesis")]
    MissingClosingParenthesis,
    #[error("missing role name after existential quantifier")]
    MissingRole,
    #[error("unexpected trailing input starting with `{0}`")]
    TrailingInput(char),
    #[error("nesting deeper than {} levels", MAX_NESTING)]
    TooDeeplyNested,
}

impl ParseError {
    fn at(input: &str, rest: &str, kind: ParseErrorKind) -> Self {
        let consumed = input.len() - rest.len();
        Self {
            position: input[..consumed].chars().count(),
            kind,
        }
    }

    fn from_verbose(input: &str, error: &VerboseError<&str>) -> Self {
        let Some((location, _)) = error.errors.first() else {
            return Self::at(input, "", ParseErrorKind::UnexpectedEnd);
        };
        let label = error.errors.iter().find_map(|(_, kind)| match kind {
            VerboseErrorKind::Context(label) => Some(*label),
            VerboseErrorKind::Char(_) | VerboseErrorKind::Nom(_) => None,
        });
        let kind = match (label, location.chars().next()) {
            (Some(CLOSING_PARENTHESIS), _) => ParseErrorKind::MissingClosingParenthesis,
            (Some(ROLE), _) => ParseErrorKind::MissingRole,
            (Some(NESTING), _) => ParseErrorKind::TooDeeplyNested,
            (_, Some(found)) => ParseErrorKind::UnexpectedCharacter(found),
            (_, None) => ParseErrorKind::UnexpectedEnd,
        };
        Self::at(input, location, kind)
    }
}

/// Parses a concept written in the textual syntax.
pub fn parse_concept(input: &str) -> Result<Concept, ParseError> {
    if input.trim().is_empty() {
        return Ok(Concept::conjunction([]));
    }
    match concept(input, 0) {
        Ok((rest, parsed)) => {
            let trailing = rest.trim_start();
            match trailing.chars().next() {
                None => Ok(parsed),
                Some(found) => Err(ParseError::at(
                    input,
                    trailing,
                    ParseErrorKind::TrailingInput(found),
                )),
            }
        }
        Err(nom::Err::Error(error) | nom::Err::Failure(error)) => {
            Err(ParseError::from_verbose(input, &error))
        }
        Err(nom::Err::Incomplete(_)) => Err(ParseError::at(
            input,
            "",
            ParseErrorKind::UnexpectedEnd,
        )),
    }
}

impl FromStr for Concept {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_concept(s)
    }
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '-' | ':' | '/' | '#')
}

fn keyword<'a>(word: &'static str) -> impl FnMut(&'a str) -> ParseResult<'a, &'a str> {
    terminated(tag(word), not(satisfy(is_identifier_char)))
}

fn identifier(input: &str) -> ParseResult<&str> {
    take_while1(is_identifier_char)(input)
}

fn conjunction_operator(input: &str) -> ParseResult<&str> {
    delimited(
        multispace0,
        alt((tag("⊓"), tag("&"), keyword("and"))),
        multispace0,
    )(input)
}

fn concept<'a>(input: &'a str, depth: usize) -> ParseResult<'a, Concept> {
    map(
        pair(
            move |i: &'a str| conjunct(i, depth),
            many0(preceded(
                conjunction_operator,
                cut(move |i: &'a str| conjunct(i, depth)),
            )),
        ),
        |(first, rest)| {
            if rest.is_empty() {
                first
            } else {
                Concept::conjunction(std::iter::once(first).chain(rest))
            }
        },
    )(input)
}

fn conjunct<'a>(input: &'a str, depth: usize) -> ParseResult<'a, Concept> {
    preceded(
        multispace0,
        alt((
            move |i: &'a str| existential(i, depth),
            move |i: &'a str| atom(i, depth),
        )),
    )(input)
}

fn quantifier(input: &str) -> ParseResult<&str> {
    alt((tag("∃"), terminated(keyword("some"), multispace1)))(input)
}

fn too_deep(input: &str) -> nom::Err<VerboseError<&str>> {
    nom::Err::Failure(VerboseError {
        errors: vec![(input, VerboseErrorKind::Context(NESTING))],
    })
}

fn existential<'a>(input: &'a str, depth: usize) -> ParseResult<'a, Concept> {
    let (rest, _) = quantifier(input)?;
    if depth >= MAX_NESTING {
        return Err(too_deep(input));
    }
    map(
        tuple((
            cut(context(
                ROLE,
                preceded(multispace0, map_res(identifier, RoleName::new)),
            )),
            cut(preceded(multispace0, char('.'))),
            cut(preceded(
                multispace0,
                alt((
                    move |i: &'a str| existential(i, depth + 1),
                    move |i: &'a str| atom(i, depth + 1),
                )),
            )),
        )),
        |(role, _, filler)| Concept::restriction(role, filler),
    )(rest)
}

fn atom<'a>(input: &'a str, depth: usize) -> ParseResult<'a, Concept> {
    alt((
        map_res(identifier, Concept::name),
        move |i: &'a str| parenthesized(i, depth),
    ))(input)
}

fn open_parenthesis(input: &str) -> ParseResult<char> {
    char('(')(input)
}

fn parenthesized<'a>(input: &'a str, depth: usize) -> ParseResult<'a, Concept> {
    let (rest, _) = open_parenthesis(input)?;
    if depth >= MAX_NESTING {
        return Err(too_deep(input));
    }
    map(
        cut(terminated(
            opt(move |i: &'a str| concept(i, depth + 1)),
            context(CLOSING_PARENTHESIS, preceded(multispace0, char(')'))),
        )),
        |inner| inner.unwrap_or_else(|| Concept::conjunction([])),
    )(rest)
}
