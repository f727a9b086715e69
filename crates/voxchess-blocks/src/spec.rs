//! Parser for the textual material grammar:
//!
//! ```text
//! spec    := base ( ":" subtype )? ( "=" aux )?
//! base    := digits | name
//! subtype := digits | colour-name      (colour names only for wool)
//! aux     := segment ( ";" segment )*  (four kept, missing padded with "")
//! ```

use std::str::FromStr;

use crate::error::{MaterialError, Result};
use crate::names;

/// Number of text lines carried by sign-like blocks.
pub const TEXT_LINES: usize = 4;

/// Structural result of parsing a material spec; no caching involved.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MaterialSpec {
    pub type_id: u16,
    pub data: u8,
    pub text: Option<[String; TEXT_LINES]>,
}

impl MaterialSpec {
    pub fn parse(spec: &str) -> Result<Self> {
        let (head, aux) = match spec.split_once('=') {
            Some((head, aux)) => (head, Some(aux)),
            None => (spec, None),
        };
        let (base, subtype) = match head.split_once(':') {
            Some((base, sub)) => (base.trim(), Some(sub.trim())),
            None => (head.trim(), None),
        };

        let type_id = parse_base(base)?;
        let data = match subtype {
            None | Some("") => 0,
            Some(sub) => parse_subtype(type_id, sub)?,
        };
        Ok(Self {
            type_id,
            data,
            text: aux.map(split_text),
        })
    }

    /// Canonical spec string for a numeric triple; parses back to the same
    /// triple.
    pub fn compose(type_id: u16, data: u8, text: Option<&[String; TEXT_LINES]>) -> String {
        match text {
            Some(lines) => format!("{}:{}={}", type_id, data, lines.join(";")),
            None => format!("{}:{}", type_id, data),
        }
    }
}

impl FromStr for MaterialSpec {
    type Err = MaterialError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Registry key for a spec string. Names are case-insensitive so the part
/// before `=` is lowercased; attached text keeps its case.
pub fn cache_key(spec: &str) -> String {
    match spec.split_once('=') {
        Some((head, aux)) => format!("{}={}", head.to_lowercase(), aux),
        None => spec.to_lowercase(),
    }
}

fn parse_base(base: &str) -> Result<u16> {
    if is_digits(base) {
        return base
            .parse::<u16>()
            .map_err(|_| MaterialError::UnknownMaterial(base.to_string()));
    }
    names::lookup_block(base).ok_or_else(|| MaterialError::UnknownMaterial(base.to_string()))
}

fn parse_subtype(type_id: u16, sub: &str) -> Result<u8> {
    if is_digits(sub) {
        return match sub.parse::<u8>() {
            Ok(data) if data <= 15 => Ok(data),
            _ => Err(MaterialError::DataOutOfRange(sub.to_string())),
        };
    }
    if type_id == names::WOOL {
        return names::lookup_dye(sub).ok_or_else(|| MaterialError::UnknownDyeColor(sub.to_string()));
    }
    Err(MaterialError::InvalidDataSpecification(sub.to_string()))
}

fn split_text(aux: &str) -> [String; TEXT_LINES] {
    let mut lines: [String; TEXT_LINES] = Default::default();
    for (slot, segment) in lines.iter_mut().zip(aux.split(';')) {
        *slot = segment.to_string();
    }
    lines
}

#[inline]
fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
