// src/csv.rs
//! CSV/TSV writing for the per-planet record table. std-only writer in
//! the usual quoting dialect (quote when the cell holds the separator,
//! a quote or a newline; double-quote escapes).

use std::io::{self, Write};

use crate::core::num::format_grouped;
use crate::specs::planets::{BuildOrder, PlanetInfo, Resource};

pub const PLANET_HEADERS: [&str; 20] = [
    "Coords",
    "Name",
    "Workers (idle)",
    "Workers (busy)",
    "Soldiers",
    "Orbit",
    "Ground",
    "Metal",
    "Metal (+)",
    "Metal %",
    "Mineral",
    "Mineral (+)",
    "Mineral %",
    "Energy",
    "Energy (+)",
    "Energy %",
    "Building",
    "Producing",
    "Training",
    "Fleets",
];

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

pub fn rows_to_string(rows: &[Vec<String>], headers: &Option<Vec<String>>, sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if let Some(h) = headers {
        let _ = write_row(&mut buf, h, sep);
    }
    for r in rows {
        let _ = write_row(&mut buf, r, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

/// Numeric cell: plain Display, so NaN prints as "NaN" and integral
/// values carry no trailing ".0".
fn num(v: f64) -> String {
    format!("{v}")
}

/// "25x Soldier (5 turns)", or "None" for an idle slot.
fn order_cell(o: &BuildOrder) -> String {
    if o.is_idle() {
        return o.item.clone();
    }
    format!("{}x {} ({} turns)", format_grouped(o.quantity, 0), o.item, o.turns)
}

/// One table row per planet, columns per [`PLANET_HEADERS`].
pub fn planet_rows(planets: &[PlanetInfo]) -> Vec<Vec<String>> {
    planets
        .iter()
        .map(|p| {
            let mut row = vec![
                p.coords.clone(),
                p.name.clone(),
                num(p.workers_idle),
                num(p.workers_busy),
                num(p.soldiers),
                num(p.orbit_remaining),
                num(p.ground_remaining),
            ];
            for kind in Resource::ALL {
                let r = p.resource(kind);
                row.push(num(r.in_stock));
                row.push(num(r.production));
                row.push(num(r.abundance));
            }
            row.push(order_cell(&p.structure));
            row.push(order_cell(&p.ship_yard));
            row.push(order_cell(&p.barracks));
            row.push(
                p.fleets
                    .iter()
                    .map(|f| f.name.as_str())
                    .collect::<Vec<_>>()
                    .join("; "),
            );
            row
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specs::planets::parse_location;

    #[test]
    fn quoting_rules() {
        let mut buf = Vec::new();
        let row = vec![s!("plain"), s!("a,b"), s!("say \"hi\""), s!("line\nbreak")];
        write_row(&mut buf, &row, ',').unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "plain,\"a,b\",\"say \"\"hi\"\"\",\"line\nbreak\"\n"
        );
    }

    #[test]
    fn tsv_does_not_quote_commas() {
        let mut buf = Vec::new();
        write_row(&mut buf, &[s!("1,234"), s!("x")], '\t').unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "1,234\tx\n");
    }

    #[test]
    fn planet_row_matches_headers() {
        let el = r#"<div class="locationWrapper">
            <div class="coords">[1.2.3.4]</div>
            <div class="planetName">Kessel</div>
            <div class="population"><span>1,000</span><span class="neutral">250</span></div>
            <div class="metal">100 10 5</div>
            <div class="resource"><a href="/c">Barracks</a>: 25x Soldier (5 turns)</div>
        </div>"#;
        let rows = planet_rows(&[parse_location(el)]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].len(), PLANET_HEADERS.len());
        assert_eq!(rows[0][0], "[1.2.3.4]");
        assert_eq!(rows[0][2], "1000");
        assert_eq!(rows[0][7], "100");
        // unreadable fields export as NaN rather than vanishing
        assert_eq!(rows[0][4], "NaN");
        assert_eq!(rows[0][16], "None");
        assert_eq!(rows[0][18], "25x Soldier (5 turns)");
    }

    #[test]
    fn full_table_string() {
        let headers = Some(PLANET_HEADERS.iter().map(|h| s!(*h)).collect::<Vec<_>>());
        let out = rows_to_string(&[vec![s!("a"), s!("b")]], &headers, '\t');
        assert!(out.starts_with("Coords\tName\t"));
        assert!(out.ends_with("a\tb\n"));
    }
}
