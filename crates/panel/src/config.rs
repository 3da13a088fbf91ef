//! Loading a [`FlexConfig`] from JSON or from CSS-style declarations.

use std::collections::HashMap;

use anyhow::{Context as _, Result};
use flexbox::{FlexConfig, FlexError};
use log::debug;

/// Parse a JSON configuration object and validate it.
///
/// Keys are kebab-case field names (`direction`, `justify-content`, `column-spacing`, ...) and
/// keywords use their CSS spelling. Missing keys keep their CSS initial values.
///
/// # Errors
/// Fails when the text is not a valid configuration object or when a spacing is negative or not
/// finite.
pub fn load_config(json: &str) -> Result<FlexConfig> {
    let config: FlexConfig = serde_json::from_str(json).context("parsing flex configuration")?;
    config.validate().context("validating flex configuration")?;
    Ok(config)
}

/// Parse a length in px; a bare number is taken as px.
fn parse_px(property: &'static str, value: &str) -> Result<f32, FlexError> {
    let trimmed = value.trim();
    let number = trimmed.strip_suffix("px").unwrap_or(trimmed).trim();
    number.parse::<f32>().map_err(|_| FlexError::UnknownKeyword {
        property,
        value: value.to_owned(),
    })
}

/// Split a `gap` shorthand into (row, column). One token sets both.
fn parse_gap_shorthand(value: &str) -> Result<(f32, f32), FlexError> {
    let parts: Vec<&str> = value.split_ascii_whitespace().collect();
    match parts.as_slice() {
        [both] => {
            let gap = parse_px("gap", both)?;
            Ok((gap, gap))
        }
        [row, column] => Ok((parse_px("gap", row)?, parse_px("gap", column)?)),
        _ => Err(FlexError::UnknownKeyword {
            property: "gap",
            value: value.to_owned(),
        }),
    }
}

/// Apply flex container declarations on top of `config`.
///
/// Understands `flex-direction`, `flex-wrap`, `justify-content`, `align-items`, `align-content`,
/// `gap`, `row-gap` and `column-gap`. The longhand gaps override the shorthand. Other properties
/// are ignored. `config` is only updated when every recognised declaration parses.
///
/// # Errors
/// Fails with [`FlexError::UnknownKeyword`] on an unparsable value and with
/// [`FlexError::InvalidSpacing`] on a negative gap.
pub fn apply_declarations(config: &mut FlexConfig, decls: &HashMap<String, String>) -> Result<()> {
    let mut next = *config;
    if let Some(value) = decls.get("flex-direction") {
        next.direction = value.parse()?;
    }
    if let Some(value) = decls.get("flex-wrap") {
        next.wrap = value.parse()?;
    }
    if let Some(value) = decls.get("justify-content") {
        next.justify_content = value.parse()?;
    }
    if let Some(value) = decls.get("align-items") {
        next.align_items = value.parse()?;
    }
    if let Some(value) = decls.get("align-content") {
        next.align_content = value.parse()?;
    }
    if let Some(value) = decls.get("gap") {
        (next.row_spacing, next.column_spacing) = parse_gap_shorthand(value)?;
    }
    if let Some(value) = decls.get("row-gap") {
        next.row_spacing = parse_px("row-gap", value)?;
    }
    if let Some(value) = decls.get("column-gap") {
        next.column_spacing = parse_px("column-gap", value)?;
    }
    next.validate().context("applying flex declarations")?;
    debug!(target: "flex_panel::config", "applied {} declarations: {next:?}", decls.len());
    *config = next;
    Ok(())
}
