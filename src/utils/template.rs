//! Format template handling
//!
//! Two template dialects are accepted wherever a format is taken:
//!
//! - chrono strftime templates, recognised by the presence of a `%`
//!   (e.g. `%Y-%m-%d %H:%M:%S`)
//! - PHP-style token templates without any `%` (e.g. `Y-m-d H:i:s`), which are
//!   translated to strftime before rendering
//!
//! Both are validated up front so a malformed template surfaces as
//! [`TimeError::InvalidFormatTemplate`] instead of a formatting panic.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, TimeZone};
use std::fmt::{Display, Write};

use crate::error::{TimeError, TimeResult};

enum Token {
    Spec(&'static str),
    Unsupported,
    Literal,
}

fn php_token(c: char) -> Token {
    match c {
        // Day
        'd' => Token::Spec("%d"),
        'D' => Token::Spec("%a"),
        'j' => Token::Spec("%-d"),
        'l' => Token::Spec("%A"),
        'N' => Token::Spec("%u"),
        'w' => Token::Spec("%w"),
        // Week
        'W' => Token::Spec("%V"),
        // Month
        'F' => Token::Spec("%B"),
        'M' => Token::Spec("%b"),
        'm' => Token::Spec("%m"),
        'n' => Token::Spec("%-m"),
        // Year
        'o' => Token::Spec("%G"),
        'Y' => Token::Spec("%Y"),
        'y' => Token::Spec("%y"),
        // Time
        'a' => Token::Spec("%P"),
        'A' => Token::Spec("%p"),
        'g' => Token::Spec("%-I"),
        'G' => Token::Spec("%-H"),
        'h' => Token::Spec("%I"),
        'H' => Token::Spec("%H"),
        'i' => Token::Spec("%M"),
        's' => Token::Spec("%S"),
        'u' => Token::Spec("%6f"),
        'v' => Token::Spec("%3f"),
        // Timezone
        'T' => Token::Spec("%Z"),
        'P' => Token::Spec("%:z"),
        'O' => Token::Spec("%z"),
        // Full date/time
        'U' => Token::Spec("%s"),
        'c' => Token::Spec("%Y-%m-%dT%H:%M:%S%:z"),
        'r' => Token::Spec("%a, %d %b %Y %H:%M:%S %z"),
        'z' | 't' | 'L' | 'B' | 'I' | 'S' | 'Z' | 'e' => Token::Unsupported,
        _ => Token::Literal,
    }
}

/// Whether a template is written in the strftime dialect
pub fn is_strftime(template: &str) -> bool {
    template.contains('%')
}

/// Check that every item of a strftime template can be rendered by chrono
///
/// `%#z` is accepted by chrono's parser but has no rendering, so it is
/// rejected here along with unknown specifiers.
pub fn validate_strftime(template: &str) -> TimeResult<()> {
    // chrono keeps the `%#z` variant private, so obtain it from the parser
    let permissive = StrftimeItems::new("%#z").next();
    let unrenderable = |item: &Item<'_>| {
        matches!(item, Item::Error) || Some(item) == permissive.as_ref()
    };
    if StrftimeItems::new(template).any(|item| unrenderable(&item)) {
        log::debug!("rejecting strftime template '{}'", template);
        return Err(TimeError::InvalidFormatTemplate(format!(
            "unrecognised specifier in '{}'",
            template
        )));
    }
    Ok(())
}

/// Translate any accepted template into a validated strftime template
///
/// # Arguments
/// * `template` - strftime template or PHP-style token template
///
/// # Returns
/// * `TimeResult<String>` - strftime template ready for chrono
pub fn to_strftime(template: &str) -> TimeResult<String> {
    if is_strftime(template) {
        validate_strftime(template)?;
        return Ok(template.to_string());
    }

    let mut out = String::with_capacity(template.len() * 2);
    let mut chars = template.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            // A trailing backslash is kept as-is
            out.push(chars.next().unwrap_or('\\'));
            continue;
        }
        match php_token(c) {
            Token::Spec(spec) => out.push_str(spec),
            Token::Literal => out.push(c),
            Token::Unsupported => {
                log::debug!("token '{}' in '{}' has no chrono equivalent", c, template);
                return Err(TimeError::InvalidFormatTemplate(format!(
                    "token '{}' in '{}' is not supported",
                    c, template
                )));
            }
        }
    }

    validate_strftime(&out)?;
    Ok(out)
}

/// Render an instant with any accepted template
pub fn format_with<Tz>(instant: &DateTime<Tz>, template: &str) -> TimeResult<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let strftime = to_strftime(template)?;
    render(instant.format(&strftime), template)
}

/// Write a delayed chrono rendering into a string
///
/// chrono reports items it cannot render through `fmt::Error`, which
/// `to_string` would turn into a panic.
pub fn render(formatted: impl Display, template: &str) -> TimeResult<String> {
    let mut out = String::new();
    write!(out, "{}", formatted).map_err(|_| {
        log::debug!("chrono could not render template '{}'", template);
        TimeError::InvalidFormatTemplate(format!("cannot render '{}'", template))
    })?;
    Ok(out)
}
