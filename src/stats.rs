// src/stats.rs
//! Empire-wide aggregation over the scraped planet records.
//!
//! Sums and unweighted per-planet averages for the numeric fields, plus
//! the flattened order and fleet lists tagged with the coordinates they
//! came from. NaN in any input poisons the totals it touches, which is
//! the intended signal that a fragment did not scrape cleanly. Zero
//! planets gives NaN averages for the same reason.

use crate::specs::planets::{BuildOrder, PlanetInfo, Resource};

/// Totalled stock/production plus average abundance of one resource.
#[derive(Clone, Copy, Debug)]
pub struct ResourceSummary {
    pub in_stock: f64,
    pub production: f64,
    pub avg_abundance: f64,
}

/// A foreign or friendly fleet seen in orbit, with where it was seen.
#[derive(Clone, Debug)]
pub struct FleetSighting {
    pub coords: String,
    pub name: String,
    pub link: Option<String>,
    pub friendly: bool,
    pub hostile: bool,
}

/// One active order tagged with its planet's coordinates.
#[derive(Clone, Debug)]
pub struct OrderAtPlanet {
    pub coords: String,
    pub item: String,
    pub quantity: f64,
    pub turns: f64,
    pub link: Option<String>,
}

/// Identical orders merged across planets: same item finishing on the
/// same turn.
#[derive(Clone, Debug)]
pub struct GroupedOrder {
    pub item: String,
    pub quantity: f64,
    pub turns: f64,
}

#[derive(Clone, Debug)]
pub struct PlanetStats {
    pub planet_count: usize,
    pub workers: f64,
    pub avg_workers: f64,
    pub soldiers: f64,
    pub avg_soldiers: f64,
    pub orbit_free: f64,
    pub avg_orbit_free: f64,
    pub ground_free: f64,
    pub avg_ground_free: f64,
    /// Indexed by [`Resource`]; use [`PlanetStats::resource`].
    pub resources: [ResourceSummary; 3],
    pub building: Vec<OrderAtPlanet>,
    pub producing: Vec<OrderAtPlanet>,
    pub training: Vec<OrderAtPlanet>,
    pub fleets: Vec<FleetSighting>,
}

impl PlanetStats {
    pub fn resource(&self, kind: Resource) -> &ResourceSummary {
        &self.resources[kind as usize]
    }

    pub fn building_grouped(&self) -> Vec<GroupedOrder> {
        group_orders(&self.building)
    }

    pub fn producing_grouped(&self) -> Vec<GroupedOrder> {
        group_orders(&self.producing)
    }

    pub fn training_grouped(&self) -> Vec<GroupedOrder> {
        group_orders(&self.training)
    }
}

pub fn aggregate(planets: &[PlanetInfo]) -> PlanetStats {
    let count = planets.len();
    // 0 planets → 0/0 → NaN averages, never a panic
    let divisor = count as f64;

    let workers = sum(planets, |p| p.workers());
    let soldiers = sum(planets, |p| p.soldiers);
    let orbit_free = sum(planets, |p| p.orbit_remaining);
    let ground_free = sum(planets, |p| p.ground_remaining);

    let resources = Resource::ALL.map(|kind| ResourceSummary {
        in_stock: sum(planets, |p| p.resource(kind).in_stock),
        production: sum(planets, |p| p.resource(kind).production),
        avg_abundance: sum(planets, |p| p.resource(kind).abundance) / divisor,
    });

    PlanetStats {
        planet_count: count,
        workers,
        avg_workers: workers / divisor,
        soldiers,
        avg_soldiers: soldiers / divisor,
        orbit_free,
        avg_orbit_free: orbit_free / divisor,
        ground_free,
        avg_ground_free: ground_free / divisor,
        resources,
        building: collect_orders(planets, |p| &p.structure),
        producing: collect_orders(planets, |p| &p.ship_yard),
        training: collect_orders(planets, |p| &p.barracks),
        fleets: collect_fleets(planets),
    }
}

fn sum<F: Fn(&PlanetInfo) -> f64>(planets: &[PlanetInfo], f: F) -> f64 {
    planets.iter().map(f).sum()
}

/// Non-idle orders of one category, tagged with their coordinates, in
/// planet order.
fn collect_orders<F>(planets: &[PlanetInfo], pick: F) -> Vec<OrderAtPlanet>
where
    F: Fn(&PlanetInfo) -> &BuildOrder,
{
    planets
        .iter()
        .filter_map(|p| {
            let o = pick(p);
            if o.is_idle() {
                return None;
            }
            Some(OrderAtPlanet {
                coords: p.coords.clone(),
                item: o.item.clone(),
                quantity: o.quantity,
                turns: o.turns,
                link: o.link.clone(),
            })
        })
        .collect()
}

fn collect_fleets(planets: &[PlanetInfo]) -> Vec<FleetSighting> {
    planets
        .iter()
        .flat_map(|p| {
            p.fleets.iter().map(|f| FleetSighting {
                coords: p.coords.clone(),
                name: f.name.clone(),
                link: f.link.clone(),
                friendly: f.friendly,
                hostile: f.hostile,
            })
        })
        .collect()
}

/// Merge orders that finish the same item on the same turn, summing
/// quantities. First-appearance order; exact float comparison on the
/// countdown, so a NaN countdown never merges with anything.
pub fn group_orders(orders: &[OrderAtPlanet]) -> Vec<GroupedOrder> {
    let mut out: Vec<GroupedOrder> = Vec::new();
    for o in orders {
        match out.iter_mut().find(|g| g.item == o.item && g.turns == o.turns) {
            Some(g) => g.quantity += o.quantity,
            None => out.push(GroupedOrder {
                item: o.item.clone(),
                quantity: o.quantity,
                turns: o.turns,
            }),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specs::planets::{FleetInOrbit, ResourceAmounts};

    fn planet(coords: &str, workers: (f64, f64), soldiers: f64, metal: (f64, f64, f64)) -> PlanetInfo {
        let blank = ResourceAmounts { in_stock: 0.0, production: 0.0, abundance: 0.0 };
        PlanetInfo {
            coords: s!(coords),
            name: s!("P"),
            planet_link: None,
            news_link: None,
            orbit_remaining: 4.0,
            ground_remaining: 10.0,
            soldiers,
            workers_idle: workers.0,
            workers_busy: workers.1,
            resources: [
                ResourceAmounts { in_stock: metal.0, production: metal.1, abundance: metal.2 },
                blank,
                blank,
            ],
            structure: BuildOrder::idle(),
            ship_yard: BuildOrder::idle(),
            barracks: BuildOrder::idle(),
            radar_link: None,
            fleets: Vec::new(),
        }
    }

    fn order(item: &str, quantity: f64, turns: f64) -> BuildOrder {
        BuildOrder { item: s!(item), quantity, turns, link: None }
    }

    #[test]
    fn sums_and_unweighted_averages() {
        let planets = vec![
            planet("[1.1.1.1]", (800.0, 200.0), 100.0, (100.0, 10.0, 5.0)),
            planet("[2.2.2.2]", (0.0, 0.0), 300.0, (200.0, 20.0, 7.0)),
        ];
        let s = aggregate(&planets);

        assert_eq!(s.planet_count, 2);
        assert_eq!(s.workers, 1000.0);
        assert_eq!(s.avg_workers, 500.0);
        assert_eq!(s.soldiers, 400.0);
        assert_eq!(s.avg_soldiers, 200.0);
        assert_eq!(s.orbit_free, 8.0);
        assert_eq!(s.avg_ground_free, 10.0);

        let m = s.resource(Resource::Metal);
        assert_eq!(m.in_stock, 300.0);
        assert_eq!(m.production, 30.0);
        assert_eq!(m.avg_abundance, 6.0);
    }

    #[test]
    fn empty_empire_averages_are_nan() {
        let s = aggregate(&[]);
        assert_eq!(s.planet_count, 0);
        assert_eq!(s.workers, 0.0);
        assert!(s.avg_workers.is_nan());
        assert!(s.resource(Resource::Energy).avg_abundance.is_nan());
    }

    #[test]
    fn nan_field_poisons_its_total() {
        let mut p = planet("[1.1.1.1]", (10.0, f64::NAN), 5.0, (1.0, 1.0, 1.0));
        p.soldiers = f64::NAN;
        let s = aggregate(&[p, planet("[2.2.2.2]", (5.0, 5.0), 5.0, (1.0, 1.0, 1.0))]);
        assert!(s.workers.is_nan());
        assert!(s.soldiers.is_nan());
        // untouched totals stay clean
        assert_eq!(s.resource(Resource::Metal).in_stock, 2.0);
    }

    #[test]
    fn idle_orders_are_dropped_and_coords_tagged() {
        let mut a = planet("[1.1.1.1]", (0.0, 0.0), 0.0, (0.0, 0.0, 0.0));
        a.barracks = order("Soldier", 3.0, 5.0);
        let b = planet("[2.2.2.2]", (0.0, 0.0), 0.0, (0.0, 0.0, 0.0));

        let s = aggregate(&[a, b]);
        assert_eq!(s.training.len(), 1);
        assert_eq!(s.training[0].coords, "[1.1.1.1]");
        assert_eq!(s.training[0].item, "Soldier");
        assert!(s.building.is_empty());
        assert!(s.producing.is_empty());
    }

    #[test]
    fn grouping_merges_same_item_same_countdown() {
        let mut a = planet("[1.1.1.1]", (0.0, 0.0), 0.0, (0.0, 0.0, 0.0));
        a.barracks = order("Soldier", 3.0, 5.0);
        let mut b = planet("[2.2.2.2]", (0.0, 0.0), 0.0, (0.0, 0.0, 0.0));
        b.barracks = order("Soldier", 5.0, 5.0);
        let mut c = planet("[3.3.3.3]", (0.0, 0.0), 0.0, (0.0, 0.0, 0.0));
        c.barracks = order("Soldier", 2.0, 7.0);

        let groups = aggregate(&[a, b, c]).training_grouped();
        assert_eq!(groups.len(), 2);
        assert_eq!((groups[0].quantity, groups[0].turns), (8.0, 5.0));
        assert_eq!((groups[1].quantity, groups[1].turns), (2.0, 7.0));
    }

    #[test]
    fn nan_countdown_never_merges() {
        let orders = vec![
            OrderAtPlanet {
                coords: s!("[1.1.1.1]"),
                item: s!("Soldier"),
                quantity: 1.0,
                turns: f64::NAN,
                link: None,
            },
            OrderAtPlanet {
                coords: s!("[2.2.2.2]"),
                item: s!("Soldier"),
                quantity: 1.0,
                turns: f64::NAN,
                link: None,
            },
        ];
        assert_eq!(group_orders(&orders).len(), 2);
    }

    #[test]
    fn fleet_sightings_keep_planet_coords() {
        let mut a = planet("[1.1.1.1]", (0.0, 0.0), 0.0, (0.0, 0.0, 0.0));
        a.fleets = vec![
            FleetInOrbit { name: s!("Raiders"), link: None, friendly: false, hostile: true },
            FleetInOrbit { name: s!("Guard"), link: None, friendly: true, hostile: false },
        ];
        let s = aggregate(&[a]);
        assert_eq!(s.fleets.len(), 2);
        assert_eq!(s.fleets[0].coords, "[1.1.1.1]");
        assert!(s.fleets[0].hostile);
        assert!(s.fleets[1].friendly);
    }
}
