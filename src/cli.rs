// src/cli.rs
use std::{env, error::Error, fs, path::PathBuf};

use crate::config::options::{ExportFormat, RunOptions};
use crate::core::num::format_grouped;
use crate::{csv, report, specs, stats, view};

pub fn run() -> Result<(), Box<dyn Error>> {
    let opts = parse_cli()?;
    logf!("Run: input={:?} records={} format={:?}", opts.input, opts.records, opts.format);
    execute(&opts)
}

fn parse_cli() -> Result<RunOptions, Box<dyn Error>> {
    let mut opts = RunOptions::default();

    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "--url" => opts.url = Some(args.next().ok_or("Missing value for --url")?),
            "-o" | "--out" => {
                opts.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?))
            }
            "--records" => opts.records = true,
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                opts.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => ExportFormat::Csv,
                    "tsv" => ExportFormat::Tsv,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };
            }
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ if !a.starts_with('-') && opts.input.as_os_str().is_empty() => {
                opts.input = PathBuf::from(a);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    if opts.input.as_os_str().is_empty() {
        return Err("Missing input file (saved planet list page)".into());
    }

    Ok(opts)
}

fn execute(opts: &RunOptions) -> Result<(), Box<dyn Error>> {
    if let Some(url) = &opts.url {
        let v = view::resolve(url);
        if v != view::View::PlanetList {
            return Err(format!("{}: {}", v, url).into());
        }
    }

    let doc = fs::read_to_string(&opts.input)?;
    let header = specs::header::parse(&doc)?;
    let planets = specs::planets::parse(&doc);
    logf!("Scrape: {} locations, turn {}", planets.len(), header.turn);

    let output = if opts.records {
        let headers = Some(csv::PLANET_HEADERS.iter().map(|h| s!(*h)).collect::<Vec<_>>());
        csv::rows_to_string(&csv::planet_rows(&planets), &headers, opts.format.delim())
    } else {
        let s = stats::aggregate(&planets);
        let mut block = report::render(&s, &header);
        block.push('\n');

        if !s.fleets.is_empty() {
            logf!("Scrape: {} fleet sightings", s.fleets.len());
        }
        let m = s.resource(crate::specs::planets::Resource::Metal);
        logd!("Totals: workers={} metal={}", format_grouped(s.workers, 0), format_grouped(m.in_stock, 0));
        block
    };

    match &opts.out {
        Some(path) => {
            fs::write(path, &output)?;
            logf!("Write: {:?} ({} bytes)", path, output.len());
        }
        None => print!("{}", output),
    }

    Ok(())
}
