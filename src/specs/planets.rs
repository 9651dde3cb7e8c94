// src/specs/planets.rs
//! Scraping spec for the planet list page.
//!
//! One `.locationWrapper` fragment becomes one [`PlanetInfo`]. Every
//! field is extracted independently: a missing selector yields an empty
//! string / `None`, an unreadable number yields NaN. Nothing in here
//! returns an error; a half-broken fragment still produces a record.

use std::sync::OnceLock;

use regex::Regex;

use crate::config::consts::{
    BARRACKS, BUILDING, BUSY_WORKERS_CLASS, COMMUNICATIONS, COORDS_CLASS, FLEET_CLASS,
    FRIENDLY_CLASS, GROUND_CLASS, HEAD_SECTION_CLASS, HOSTILE_CLASS, LOCATION_CLASS,
    NEWS_HREF_PREFIX, ORBIT_CLASS, OrderCategory, PLANET_NAME_CLASS, POPULATION_CLASS,
    RESOURCE_CLASS, SHIP_YARD, SOLDIER_CLASS,
};
use crate::core::html::{self, element_with_class, elements_with_class, inner, text};
use crate::core::num::unformat;

/// Sentinel item name for "no active order in this category".
pub const NONE_ITEM: &str = "None";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resource {
    Metal,
    Mineral,
    Energy,
}

impl Resource {
    pub const ALL: [Resource; 3] = [Resource::Metal, Resource::Mineral, Resource::Energy];

    /// CSS class of the "stock production abundance" text node.
    pub fn class(self) -> &'static str {
        match self {
            Resource::Metal => "metal",
            Resource::Mineral => "mineral",
            Resource::Energy => "energy",
        }
    }
}

/// The "<stock> <production> <abundance>" triple of one resource kind.
#[derive(Clone, Copy, Debug)]
pub struct ResourceAmounts {
    pub in_stock: f64,
    pub production: f64,
    pub abundance: f64,
}

/// An in-progress build/train action with a remaining-turns countdown.
#[derive(Clone, Debug)]
pub struct BuildOrder {
    pub item: String,
    pub quantity: f64,
    pub turns: f64,
    pub link: Option<String>,
}

impl BuildOrder {
    /// The no-active-order sentinel.
    pub fn idle() -> Self {
        Self { item: s!(NONE_ITEM), quantity: 0.0, turns: 0.0, link: None }
    }

    pub fn is_idle(&self) -> bool {
        self.item == NONE_ITEM
    }
}

#[derive(Clone, Debug)]
pub struct FleetInOrbit {
    pub name: String,
    pub link: Option<String>,
    /// Independent flags, not a tri-state: the site can mark a fleet
    /// with both classes at once.
    pub friendly: bool,
    pub hostile: bool,
}

/// One owned location as scraped from the list page.
#[derive(Clone, Debug)]
pub struct PlanetInfo {
    pub coords: String,
    pub name: String,
    pub planet_link: Option<String>,
    pub news_link: Option<String>,
    pub orbit_remaining: f64,
    pub ground_remaining: f64,
    pub soldiers: f64,
    pub workers_idle: f64,
    pub workers_busy: f64,
    /// Indexed by [`Resource`]; use [`PlanetInfo::resource`].
    pub resources: [ResourceAmounts; 3],
    pub structure: BuildOrder,
    pub ship_yard: BuildOrder,
    pub barracks: BuildOrder,
    pub radar_link: Option<String>,
    /// Page order, section header already dropped.
    pub fleets: Vec<FleetInOrbit>,
}

impl PlanetInfo {
    pub fn resource(&self, kind: Resource) -> &ResourceAmounts {
        &self.resources[kind as usize]
    }

    pub fn workers(&self) -> f64 {
        self.workers_idle + self.workers_busy
    }
}

/// All location fragments on the page, in page order.
pub fn parse(doc: &str) -> Vec<PlanetInfo> {
    elements_with_class(doc, LOCATION_CLASS)
        .into_iter()
        .map(parse_location)
        .collect()
}

/// One `.locationWrapper` fragment → one record.
pub fn parse_location(el: &str) -> PlanetInfo {
    let body = inner(el);
    let population = element_with_class(body, POPULATION_CLASS);

    PlanetInfo {
        coords: class_text(body, COORDS_CLASS),
        name: class_text(body, PLANET_NAME_CLASS),
        planet_link: element_with_class(body, PLANET_NAME_CLASS).and_then(html::href),
        news_link: element_with_class(body, HEAD_SECTION_CLASS)
            .and_then(|b| html::href_with_prefix(b, NEWS_HREF_PREFIX)),
        orbit_remaining: unformat(&class_text(body, ORBIT_CLASS)),
        ground_remaining: unformat(&class_text(body, GROUND_CLASS)),
        soldiers: unformat(&class_text(body, SOLDIER_CLASS)),
        workers_idle: unformat(
            &population
                .and_then(|b| html::first_element(inner(b), "span"))
                .map(text)
                .unwrap_or_default(),
        ),
        workers_busy: unformat(
            &population
                .and_then(|b| element_with_class(inner(b), BUSY_WORKERS_CLASS))
                .map(text)
                .unwrap_or_default(),
        ),
        resources: Resource::ALL.map(|kind| parse_resource(body, kind)),
        structure: extract_order(body, &BUILDING),
        ship_yard: extract_order(body, &SHIP_YARD),
        barracks: extract_order(body, &BARRACKS),
        radar_link: radar_link(body),
        fleets: extract_fleets(body),
    }
}

fn class_text(scope: &str, class: &str) -> String {
    element_with_class(scope, class).map(text).unwrap_or_default()
}

/// Whitespace-split the resource text node and coerce the three tokens
/// positionally. A short line leaves the missing positions NaN; extra
/// tokens are ignored.
fn parse_resource(scope: &str, kind: Resource) -> ResourceAmounts {
    let line = class_text(scope, kind.class());
    let mut tokens = line.split_whitespace().map(unformat);
    ResourceAmounts {
        in_stock: tokens.next().unwrap_or(f64::NAN),
        production: tokens.next().unwrap_or(f64::NAN),
        abundance: tokens.next().unwrap_or(f64::NAN),
    }
}

/// Pick the `.resource` block whose label (its first anchor's text)
/// matches the category; the last match wins, mirroring how the site
/// renders one block per category. No match → idle sentinel.
fn extract_order(scope: &str, category: &OrderCategory) -> BuildOrder {
    let mut out = BuildOrder::idle();
    for block in elements_with_class(scope, RESOURCE_CLASS) {
        let label = html::first_anchor(block).map(text).unwrap_or_default();
        if !category.matches(&label) {
            continue;
        }
        out = parse_order_line(&text(block), html::href(block));
    }
    out
}

static ORDER_RE: OnceLock<Regex> = OnceLock::new();

/// `<label>: [<qty>x ]<item>[ (<turns> turns)]`
///
/// Quantity defaults to 1 and turns to 0 when their groups are absent.
/// A line that does not match at all (the site prints "<label>: None"
/// for an idle category) reads as item "None" with quantity 1; the
/// aggregator drops it by item, not by quantity.
fn parse_order_line(line: &str, link: Option<String>) -> BuildOrder {
    let re = ORDER_RE.get_or_init(|| {
        Regex::new(r"[^:]+:\s*([\d,]+x )?([^(]+)\s(?:\((\d+) turns?\))?").expect("order pattern")
    });

    let (quantity, item, turns) = match re.captures(line) {
        Some(c) => (
            c.get(1).map_or("1", |m| m.as_str()),
            c.get(2).map_or(NONE_ITEM, |m| m.as_str()),
            c.get(3).map_or("0", |m| m.as_str()),
        ),
        None => ("1", NONE_ITEM, "0"),
    };

    BuildOrder {
        item: s!(item.trim()),
        quantity: unformat(quantity),
        turns: unformat(turns),
        link,
    }
}

fn radar_link(scope: &str) -> Option<String> {
    elements_with_class(scope, RESOURCE_CLASS)
        .into_iter()
        .find(|block| {
            let label = html::first_anchor(block).map(text).unwrap_or_default();
            COMMUNICATIONS.matches(&label)
        })
        .and_then(html::href)
}

/// `.fleet` blocks in page order. The first block is the "Fleets in
/// orbit" section label, not a fleet, and is dropped unconditionally;
/// with zero real fleets and no label this eats the only entry. Known
/// discrepancy, kept on purpose.
fn extract_fleets(scope: &str) -> Vec<FleetInOrbit> {
    elements_with_class(scope, FLEET_CLASS)
        .into_iter()
        .skip(1)
        .map(|block| {
            let attrs = html::opener_attrs(block);
            FleetInOrbit {
                name: text(block),
                link: html::href(block),
                friendly: html::has_class(attrs, FRIENDLY_CLASS),
                hostile: html::has_class(attrs, HOSTILE_CLASS),
            }
        })
        .collect()
}
