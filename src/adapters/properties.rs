// SPDX-License-Identifier: MIT OR Apache-2.0

//! `.properties` configuration parser.

use crate::domain::{ConfigError, ConfigValue, Result};
use crate::ports::ConfigParser;
use std::collections::HashMap;
use std::str::Chars;

/// Parser for Java-style `.properties` files.
///
/// Each logical line holds one `key=value`, `key: value` or `key value` entry.
/// Lines whose first non-blank character is `#` or `!` are comments, and a
/// line ending in an unescaped backslash continues on the next line. Values
/// are always `Text`; the typed layer coerces them on read.
///
/// # Examples
///
/// ```rust
/// use typedcfg::adapters::PropertiesParser;
/// use typedcfg::domain::ConfigValue;
/// use typedcfg::ports::ConfigParser;
///
/// let content = "# storage\nstorage.backend = berkeleyje\nstorage.batch-loading: true\n";
/// let result = PropertiesParser::new().parse(content).unwrap();
/// assert_eq!(result.get("storage.backend"), Some(&ConfigValue::from("berkeleyje")));
/// assert_eq!(result.get("storage.batch-loading"), Some(&ConfigValue::from("true")));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PropertiesParser;

impl PropertiesParser {
    /// Creates a new properties parser.
    pub fn new() -> Self {
        PropertiesParser
    }

    /// Joins continuation lines and drops blanks and comments.
    fn logical_lines(content: &str) -> Vec<String> {
        let mut lines = Vec::new();
        let mut current: Option<String> = None;

        for raw in content.lines() {
            let line = match current {
                // leading whitespace of a continuation line is not part of the value
                Some(_) => raw.trim_start(),
                None => {
                    let trimmed = raw.trim_start();
                    if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
                        continue;
                    }
                    trimmed
                }
            };

            let trailing = line.len() - line.trim_end_matches('\\').len();
            let continues = trailing % 2 == 1;
            let body = if continues { &line[..line.len() - 1] } else { line };

            let mut joined = current.take().unwrap_or_default();
            joined.push_str(body);
            if continues {
                current = Some(joined);
            } else {
                lines.push(joined);
            }
        }

        if let Some(rest) = current {
            lines.push(rest);
        }
        lines
    }

    /// Splits a logical line at the first unescaped separator.
    fn split_entry(line: &str) -> (&str, &str) {
        let mut escaped = false;
        for (i, c) in line.char_indices() {
            if escaped {
                escaped = false;
                continue;
            }
            match c {
                '\\' => escaped = true,
                '=' | ':' => return (&line[..i], line[i + 1..].trim_start()),
                c if c.is_whitespace() => {
                    let rest = line[i..].trim_start();
                    let rest = rest
                        .strip_prefix('=')
                        .or_else(|| rest.strip_prefix(':'))
                        .unwrap_or(rest);
                    return (&line[..i], rest.trim_start());
                }
                _ => {}
            }
        }
        (line, "")
    }

    /// Trims trailing whitespace that is not escaped.
    fn trim_value_end(s: &str) -> &str {
        let trimmed = s.trim_end();
        let backslashes = trimmed.len() - trimmed.trim_end_matches('\\').len();
        if backslashes % 2 == 0 {
            return trimmed;
        }
        // the first trimmed character follows a backslash and belongs to the value
        match s[trimmed.len()..].chars().next() {
            Some(c) => &s[..trimmed.len() + c.len_utf8()],
            None => trimmed,
        }
    }

    fn malformed_escape(escape: &str, line_no: usize) -> ConfigError {
        ConfigError::ParseError {
            message: format!(
                "Malformed \\uxxxx escape \"{}\" in properties entry {}",
                escape, line_no
            ),
            source: None,
        }
    }

    /// Reads the four hex digits of a `\uxxxx` escape.
    fn hex_unit(chars: &mut Chars<'_>, line_no: usize) -> Result<u32> {
        let hex: String = chars.by_ref().take(4).collect();
        if hex.len() != 4 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Self::malformed_escape(&format!("\\u{}", hex), line_no));
        }
        u32::from_str_radix(&hex, 16)
            .map_err(|_| Self::malformed_escape(&format!("\\u{}", hex), line_no))
    }

    /// Decodes a `\uxxxx` escape whose `\u` has been consumed. A high
    /// surrogate must be followed by a `\uxxxx` low surrogate and the pair
    /// decodes to one character.
    fn unicode_escape(chars: &mut Chars<'_>, line_no: usize) -> Result<char> {
        let unit = Self::hex_unit(chars, line_no)?;
        let code = if (0xD800..=0xDBFF).contains(&unit) {
            let mut rest = chars.clone();
            if rest.next() != Some('\\') || rest.next() != Some('u') {
                return Err(Self::malformed_escape(&format!("\\u{:04X}", unit), line_no));
            }
            let low = Self::hex_unit(&mut rest, line_no)?;
            if !(0xDC00..=0xDFFF).contains(&low) {
                return Err(Self::malformed_escape(
                    &format!("\\u{:04X}\\u{:04X}", unit, low),
                    line_no,
                ));
            }
            *chars = rest;
            0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00)
        } else {
            unit
        };
        char::from_u32(code)
            .ok_or_else(|| Self::malformed_escape(&format!("\\u{:04X}", unit), line_no))
    }

    fn unescape(s: &str, line_no: usize) -> Result<String> {
        let mut out = String::with_capacity(s.len());
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c != '\\' {
                out.push(c);
                continue;
            }
            match chars.next() {
                Some('t') => out.push('\t'),
                Some('n') => out.push('\n'),
                Some('r') => out.push('\r'),
                Some('f') => out.push('\u{000C}'),
                Some('u') => out.push(Self::unicode_escape(&mut chars, line_no)?),
                Some(other) => out.push(other),
                None => {}
            }
        }
        Ok(out)
    }
}

impl ConfigParser for PropertiesParser {
    fn parse(&self, content: &str) -> Result<HashMap<String, ConfigValue>> {
        let mut result = HashMap::new();
        for (line_no, line) in Self::logical_lines(content).iter().enumerate() {
            let (key, value) = Self::split_entry(line);
            let key = Self::unescape(key, line_no + 1)?;
            let value = Self::unescape(Self::trim_value_end(value), line_no + 1)?;
            result.insert(key, ConfigValue::Text(value));
        }
        Ok(result)
    }

    fn supported_extensions(&self) -> &[&str] {
        &["properties"]
    }
}
