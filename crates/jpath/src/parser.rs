//! A `nom`-based normalizer for JSONPath expressions.
use super::ast::PathElement;
use crate::error::JPathError;
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, take_while, take_while1},
    character::complete::{char, i64 as nom_i64, multispace0},
    combinator::{map, opt},
    error::{Error, ErrorKind},
    multi::{many0, separated_list1},
    sequence::{delimited, preceded},
};

// --- Main Public Parser ---

/// Parses a raw path into its normalized element sequence.
///
/// The result always starts with [`PathElement::Root`]. Both `$.a.b` and the
/// leading-dot form `.a.b` are accepted.
pub fn normalize(input: &str) -> Result<Vec<PathElement>, JPathError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(JPathError::EmptyPath);
    }
    match path(trimmed) {
        Ok(("", elements)) => Ok(elements),
        Ok((rem, _)) => Err(JPathError::JPathParse(
            input.to_string(),
            format!("Parser did not consume all input. Remainder: '{}'", rem),
        )),
        Err(e) => Err(JPathError::JPathParse(input.to_string(), e.to_string())),
    }
}

// --- Combinators ---

fn path(input: &str) -> IResult<&str, Vec<PathElement>> {
    let (input, _) = opt(char('$')).parse(input)?;
    let (input, head) = opt(map(member_name, PathElement::property)).parse(input)?;
    let (input, segments) = many0(segment).parse(input)?;

    let mut elements = vec![PathElement::Root];
    elements.extend(head);
    elements.extend(segments.into_iter().flatten());
    Ok((input, elements))
}

fn segment(input: &str) -> IResult<&str, Vec<PathElement>> {
    alt((
        recursive_segment, // Must be before dot_segment to parse `..` not `.`
        map(dot_segment, |e| vec![e]),
        map(bracket_segment, |e| vec![e]),
    ))
    .parse(input)
}

/// A member name runs until the next separator. Anything else, including `/`, `-`
/// and non-ASCII characters, belongs to the name.
fn member_name(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| !matches!(c, '.' | '[' | ']')).parse(input)
}

fn wildcard_or_name(input: &str) -> IResult<&str, PathElement> {
    alt((
        map(char('*'), |_| PathElement::AnyProperty),
        map(member_name, PathElement::property),
    ))
    .parse(input)
}

fn recursive_segment(input: &str) -> IResult<&str, Vec<PathElement>> {
    let (input, _) = tag("..").parse(input)?;
    let (input, target) = alt((wildcard_or_name, bracket_segment)).parse(input)?;
    Ok((input, vec![PathElement::RecursiveDescent, target]))
}

fn dot_segment(input: &str) -> IResult<&str, PathElement> {
    preceded(char('.'), wildcard_or_name).parse(input)
}

// --- Bracket Parsers ---

fn bracket_segment(input: &str) -> IResult<&str, PathElement> {
    delimited(char('['), ws(bracket_body), char(']')).parse(input)
}

fn bracket_body(input: &str) -> IResult<&str, PathElement> {
    alt((
        filter_expression,
        script_expression,
        map(char('*'), |_| PathElement::AnyArrayIndex),
        property_list,
        array_slice, // Must be before index_list, which would stop at the `:`
        index_list,
    ))
    .parse(input)
}

fn filter_expression(input: &str) -> IResult<&str, PathElement> {
    map(
        delimited(tag("?("), balanced, char(')')),
        |text: &str| PathElement::filter(text.trim()),
    )
    .parse(input)
}

fn script_expression(input: &str) -> IResult<&str, PathElement> {
    map(delimited(char('('), balanced, char(')')), |text: &str| {
        PathElement::Expression {
            text: text.trim().to_string(),
        }
    })
    .parse(input)
}

fn quoted(input: &str) -> IResult<&str, &str> {
    alt((
        delimited(char('\''), take_while(|c| c != '\''), char('\'')),
        delimited(char('"'), take_while(|c| c != '"'), char('"')),
    ))
    .parse(input)
}

fn property_list(input: &str) -> IResult<&str, PathElement> {
    map(separated_list1(ws(char(',')), quoted), |names: Vec<&str>| {
        if let [single] = names.as_slice() {
            PathElement::property(*single)
        } else {
            PathElement::PropertyList {
                names: names.into_iter().map(str::to_string).collect(),
            }
        }
    })
    .parse(input)
}

fn array_slice(input: &str) -> IResult<&str, PathElement> {
    let (input, start) = opt(ws(nom_i64)).parse(input)?;
    let (input, _) = char(':').parse(input)?;
    let (input, end) = opt(ws(nom_i64)).parse(input)?;
    let (input, step) = opt(preceded(char(':'), opt(ws(nom_i64)))).parse(input)?;
    Ok((
        input,
        PathElement::ArraySlice {
            start,
            end,
            step: step.flatten(),
        },
    ))
}

fn index_list(input: &str) -> IResult<&str, PathElement> {
    map(separated_list1(ws(char(',')), nom_i64), |indexes: Vec<i64>| {
        if let [single] = indexes.as_slice() {
            PathElement::ArrayIndex { index: *single }
        } else {
            PathElement::ArrayIndexList { indexes }
        }
    })
    .parse(input)
}

/// Consumes text up to the `)` that closes an already-opened parenthesis,
/// skipping over nested parentheses and quoted strings.
fn balanced(input: &str) -> IResult<&str, &str> {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    for (pos, c) in input.char_indices() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '\'' | '"') => quote = Some(c),
            (None, '(') => depth += 1,
            (None, ')') if depth == 0 => return Ok((&input[pos..], &input[..pos])),
            (None, ')') => depth -= 1,
            _ => {}
        }
    }
    Err(nom::Err::Error(Error::new(input, ErrorKind::TakeUntil)))
}

/// A combinator that takes a parser `inner` and produces a parser that consumes surrounding whitespace.
fn ws<'a, F, O, E>(inner: F) -> impl Parser<&'a str, Output = O, Error = E>
where
    F: Parser<&'a str, Output = O, Error = E>,
    E: nom::error::ParseError<&'a str>,
{
    delimited(multispace0, inner, multispace0)
}
