//! Parsers for CSS-like flow declarations.
//!
//! Lengths go through small nom combinators; keywords are matched directly.
//! A declaration block looks like
//! `line-spacing: 4pt; gap: 8; justify-content: space-between`.

use crate::config::FlowConfig;
use crate::flex::{AlignItems, JustifyContent};
use nom::branch::alt;
use nom::bytes::complete::tag_no_case;
use nom::character::complete::{char, digit1, space1};
use nom::combinator::{map_res, opt, recognize, value};
use nom::multi::separated_list1;
use nom::{IResult, Parser};
use thiserror::Error;

/// Errors that can occur during style parsing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleParseError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid value for '{property}': {value}")]
    InvalidValue { property: String, value: String },

    #[error("Unknown property '{0}'")]
    UnknownProperty(String),
}

// --- Numeric Parsers ---

fn parse_f32(input: &str) -> IResult<&str, f32> {
    map_res(
        recognize((
            opt(alt((char('+'), char('-')))),
            alt((
                recognize((digit1, opt((char('.'), digit1)))),
                recognize((char('.'), digit1)),
            )),
        )),
        |s: &str| s.parse::<f32>(),
    )
    .parse(input)
}

fn parse_unit(input: &str) -> IResult<&str, f32> {
    alt((
        value(1.0, tag_no_case("pt")),
        value(1.0, tag_no_case("px")), // Treat px as pt
        value(72.0, tag_no_case("in")),
        value(28.35, tag_no_case("cm")),
        value(2.835, tag_no_case("mm")),
    ))
    .parse(input)
}

/// Parses a length value with optional unit (e.g., "12pt", "1in", "10mm").
pub fn parse_length(input: &str) -> IResult<&str, f32> {
    let (input, amount) = parse_f32(input)?;
    let (input, unit_multiplier) = opt(parse_unit).parse(input)?;
    Ok((input, amount * unit_multiplier.unwrap_or(1.0)))
}

/// Parses the `gap` shorthand: one length for both axes, or `<row> <column>`.
pub fn parse_gap(input: &str) -> IResult<&str, (f32, f32)> {
    let (rest, parts) = separated_list1(space1, parse_length).parse(input)?;
    match parts.as_slice() {
        [both] => Ok((rest, (*both, *both))),
        [row, column] => Ok((rest, (*row, *column))),
        _ => Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Count,
        ))),
    }
}

/// Helper to run a nom parser and convert its result to a `Result<T, StyleParseError>`.
pub fn run_parser<'a, T, F>(parser: F, input: &'a str) -> Result<T, StyleParseError>
where
    F: Fn(&'a str) -> IResult<&'a str, T>,
{
    match parser(input.trim()) {
        Ok(("", result)) => Ok(result),
        Ok((rem, _)) => Err(StyleParseError::Parse(format!(
            "Parser did not consume all input. Remainder: '{}'",
            rem
        ))),
        Err(e) => Err(StyleParseError::Parse(e.to_string())),
    }
}

fn run_length_parser(property: &str, input: &str) -> Result<f32, StyleParseError> {
    run_parser(parse_length, input).map_err(|_| StyleParseError::InvalidValue {
        property: property.to_string(),
        value: input.trim().to_string(),
    })
}

// --- Keyword Parsers ---

/// Parses a justify-content (or align-content) value.
pub fn parse_justify_content(s: &str) -> Result<JustifyContent, StyleParseError> {
    match s.trim().to_lowercase().as_str() {
        "start" | "flex-start" => Ok(JustifyContent::Start),
        "end" | "flex-end" => Ok(JustifyContent::End),
        "center" => Ok(JustifyContent::Center),
        "space-between" => Ok(JustifyContent::SpaceBetween),
        "space-around" => Ok(JustifyContent::SpaceAround),
        "space-evenly" => Ok(JustifyContent::SpaceEvenly),
        _ => Err(StyleParseError::InvalidValue {
            property: "justify-content".to_string(),
            value: s.to_string(),
        }),
    }
}

/// Parses an align-items value.
pub fn parse_align_items(s: &str) -> Result<AlignItems, StyleParseError> {
    match s.trim().to_lowercase().as_str() {
        "start" | "flex-start" => Ok(AlignItems::Start),
        "end" | "flex-end" => Ok(AlignItems::End),
        "center" => Ok(AlignItems::Center),
        "stretch" => Ok(AlignItems::Stretch),
        _ => Err(StyleParseError::InvalidValue {
            property: "align-items".to_string(),
            value: s.to_string(),
        }),
    }
}

// --- Declaration Application ---

/// Applies a single flow property to a `FlowConfig`.
pub fn apply_flow_property(
    config: &mut FlowConfig,
    name: &str,
    raw: &str,
) -> Result<(), StyleParseError> {
    match name {
        "line-spacing" | "row-gap" => config.line_spacing = run_length_parser(name, raw)?,
        "interitem-spacing" | "column-gap" => {
            config.interitem_spacing = run_length_parser(name, raw)?
        }
        "gap" => {
            let (row, column) =
                run_parser(parse_gap, raw).map_err(|_| StyleParseError::InvalidValue {
                    property: name.to_string(),
                    value: raw.trim().to_string(),
                })?;
            config.line_spacing = row;
            config.interitem_spacing = column;
        }
        "justify-content" => config.justify_content = parse_justify_content(raw)?,
        "align-items" => config.align_items = parse_align_items(raw)?,
        "align-content" => {
            config.align_content =
                parse_justify_content(raw).map_err(|_| StyleParseError::InvalidValue {
                    property: name.to_string(),
                    value: raw.to_string(),
                })?
        }
        _ => return Err(StyleParseError::UnknownProperty(name.to_string())),
    }
    Ok(())
}

/// Parses a `;`-separated declaration block on top of the default config.
/// Later declarations override earlier ones.
pub fn parse_declarations(input: &str) -> Result<FlowConfig, StyleParseError> {
    let mut config = FlowConfig::default();
    for declaration in input.split(';') {
        let declaration = declaration.trim();
        if declaration.is_empty() {
            continue;
        }
        let (name, raw) = declaration.split_once(':').ok_or_else(|| {
            StyleParseError::Parse(format!("Expected 'name: value', got '{}'", declaration))
        })?;
        let name = name.trim().to_ascii_lowercase();
        apply_flow_property(&mut config, &name, raw.trim())?;
    }
    Ok(config)
}
