// src/specs/mod.rs
//! Page-specific scraping specs.
//!
//! Each spec knows *where the ground truth lives in the HTML* of one
//! DarkGalaxy page region and *how to extract it tolerantly*:
//!
//! - `planets`: the `.locationWrapper` fragments of the `/planets`
//!   list; every field independently optional, coercion failures read
//!   as NaN rather than errors.
//! - `header`: ruler / alliance / turn from the page header; the one
//!   spec allowed to hard-fail, because a missing banner means the
//!   snapshot is not a supported page at all.
//!
//! Specs only extract. Aggregation lives in `stats`, presentation in
//! `report`, and neither is allowed back in here.

pub mod header;
pub mod planets;
