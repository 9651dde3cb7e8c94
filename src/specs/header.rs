// src/specs/header.rs
//! Ruler name, alliance tag and current turn from the page header.
//!
//! Unlike the location fragments this is allowed to fail hard: a page
//! without the "Welcome ..." banner is not a page we know how to read,
//! and a summary without a turn number would be misleading anyway.

use std::error::Error;
use std::sync::OnceLock;

use regex::Regex;

use crate::config::consts::{HEADER_BANNER_CLASS, HEADER_ID, TURN_ID};
use crate::core::html::{element_with_class, element_with_id, inner, text};
use crate::core::num::unformat;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderData {
    /// Ruler name, trimmed.
    pub name: String,
    /// Alliance tag with its brackets, e.g. "[WP]".
    pub alliance: Option<String>,
    pub turn: u32,
}

static WELCOME_RE: OnceLock<Regex> = OnceLock::new();

/// `Welcome [TAG]Name` with the tag optional.
fn welcome_re() -> &'static Regex {
    WELCOME_RE.get_or_init(|| Regex::new(r"Welcome\s(\[[^\]]+\])?(.+)").expect("welcome pattern"))
}

pub fn parse(doc: &str) -> Result<HeaderData, Box<dyn Error>> {
    let header = element_with_id(doc, HEADER_ID).ok_or("page has no #header region")?;
    let banner = element_with_class(inner(header), HEADER_BANNER_CLASS)
        .ok_or("header region has no banner")?;

    let banner_text = text(banner);
    let caps = welcome_re()
        .captures(&banner_text)
        .ok_or_else(|| format!("unrecognized header banner: {banner_text:?}"))?;

    let turn_text = element_with_id(doc, TURN_ID)
        .map(text)
        .ok_or("page has no #turnNumber")?;
    let turn = unformat(&turn_text);
    if !turn.is_finite() {
        return Err(format!("unreadable turn number: {turn_text:?}").into());
    }

    Ok(HeaderData {
        name: s!(caps[2].trim()),
        alliance: caps.get(1).map(|m| s!(m.as_str())),
        turn: turn as u32,
    })
}
