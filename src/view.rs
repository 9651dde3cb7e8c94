// src/view.rs
//! Map a page URL onto the view we know how to scrape.
//!
//! Only the planet list is supported today; the resolver exists so that
//! adding the fleet and navigation pages later is a matter of one more
//! pattern and variant.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    PlanetList,
    Unmatched,
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::PlanetList => write!(f, "Planet list"),
            View::Unmatched => write!(f, "No view matched"),
        }
    }
}

static PLANETS_RE: OnceLock<Regex> = OnceLock::new();

/// Path component of a URL: scheme and host dropped, query and fragment
/// cut off. A bare path passes through unchanged.
fn path_of(url: &str) -> &str {
    let rest = match url.find("://") {
        Some(p) => {
            let after = &url[p + 3..];
            match after.find('/') {
                Some(slash) => &after[slash..],
                None => "/",
            }
        }
        None => url,
    };
    let end = rest.find(['?', '#']).unwrap_or(rest.len());
    &rest[..end]
}

pub fn resolve(url: &str) -> View {
    let re = PLANETS_RE.get_or_init(|| Regex::new(r"/planets/?$").expect("planets pattern"));
    if re.is_match(path_of(url)) {
        View::PlanetList
    } else {
        View::Unmatched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn planet_list_paths() {
        assert_eq!(resolve("/planets"), View::PlanetList);
        assert_eq!(resolve("/planets/"), View::PlanetList);
        assert_eq!(resolve("https://beta.darkgalaxy.com/planets"), View::PlanetList);
        assert_eq!(resolve("https://beta.darkgalaxy.com/planets/?sort=coords"), View::PlanetList);
    }

    #[test]
    fn everything_else_is_unmatched() {
        assert_eq!(resolve("/fleets"), View::Unmatched);
        assert_eq!(resolve("/planets/5"), View::Unmatched);
        assert_eq!(resolve("https://beta.darkgalaxy.com/"), View::Unmatched);
        assert_eq!(resolve("https://beta.darkgalaxy.com"), View::Unmatched);
    }

    #[test]
    fn display_labels() {
        assert_eq!(View::PlanetList.to_string(), "Planet list");
        assert_eq!(View::Unmatched.to_string(), "No view matched");
    }
}
