// src/config/consts.rs
//
// The page schema lives here as data: every class name and label the
// game site uses on the planet list page, in one place. The site owns
// this contract; when it changes, this file is the blast radius.

// Logging
pub const LOG_FILE: &str = "dg_scrape.log";

// Planet list page: location fragments
pub const LOCATION_CLASS: &str = "locationWrapper";
pub const COORDS_CLASS: &str = "coords";
pub const PLANET_NAME_CLASS: &str = "planetName";
pub const HEAD_SECTION_CLASS: &str = "planetHeadSection";
pub const ORBIT_CLASS: &str = "orbit";
pub const GROUND_CLASS: &str = "ground";
pub const SOLDIER_CLASS: &str = "soldier";
pub const POPULATION_CLASS: &str = "population";
pub const BUSY_WORKERS_CLASS: &str = "neutral";
pub const RESOURCE_CLASS: &str = "resource";
pub const FLEET_CLASS: &str = "fleet";
pub const FRIENDLY_CLASS: &str = "friendly";
pub const HOSTILE_CLASS: &str = "hostile";

// Header region
pub const HEADER_ID: &str = "header";
pub const HEADER_BANNER_CLASS: &str = "header";
pub const TURN_ID: &str = "turnNumber";

// News link prefix inside the head section
pub const NEWS_HREF_PREFIX: &str = "/news";

/// One build-order category: the label text of a `.resource` block and
/// how strictly it is matched. The site capitalizes structure labels
/// consistently but "Communications" has been seen in mixed case.
#[derive(Clone, Copy, Debug)]
pub struct OrderCategory {
    pub label: &'static str,
    pub exact_case: bool,
}

impl OrderCategory {
    pub fn matches(&self, label: &str) -> bool {
        if self.exact_case {
            label == self.label
        } else {
            label.eq_ignore_ascii_case(self.label)
        }
    }
}

pub const BUILDING: OrderCategory = OrderCategory { label: "Building", exact_case: true };
pub const SHIP_YARD: OrderCategory = OrderCategory { label: "Ship Yard", exact_case: true };
pub const BARRACKS: OrderCategory = OrderCategory { label: "Barracks", exact_case: true };
pub const COMMUNICATIONS: OrderCategory = OrderCategory { label: "Communications", exact_case: false };
