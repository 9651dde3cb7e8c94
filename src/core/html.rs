// src/core/html.rs
// Low-level HTML string helpers, deliberately naive but tailored to the
// DarkGalaxy page structure. The game addresses everything by CSS class,
// so the central primitive is "find the element block with this class",
// with same-tag depth tracking so nested <div>s close correctly.
// Tag and attribute names match case-insensitively on ASCII.

use crate::core::sanitize::{normalize_entities, normalize_ws};

/// One tag as scanned from the raw document.
#[derive(Debug, Clone, Copy)]
pub struct Tag<'a> {
    /// Index of the '<'.
    pub start: usize,
    /// Index just past the '>'.
    pub end: usize,
    pub name: &'a str,
    /// Raw text between the name and the '>'.
    pub attrs: &'a str,
    pub closing: bool,
}

impl<'a> Tag<'a> {
    fn self_closing(&self) -> bool {
        self.attrs.trim_end().ends_with('/')
    }

    /// Whether this opener never takes a closing tag.
    fn childless(&self) -> bool {
        is_void(self.name) || self.self_closing()
    }
}

fn is_void(name: &str) -> bool {
    const VOID: [&str; 13] = [
        "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
        "track", "wbr",
    ];
    VOID.iter().any(|v| name.eq_ignore_ascii_case(v))
}

/// Scan the next real tag from `from` onwards. Comments, doctypes and
/// stray '<' are skipped.
pub fn next_tag(s: &str, from: usize) -> Option<Tag<'_>> {
    let mut i = from;
    loop {
        let lt = s.get(i..)?.find('<')? + i;
        if s[lt..].starts_with("<!--") {
            match s[lt + 4..].find("-->") {
                Some(p) => {
                    i = lt + 4 + p + 3;
                    continue;
                }
                None => return None,
            }
        }
        let gt = match s[lt + 1..].find('>') {
            Some(p) => lt + 1 + p,
            None => return None,
        };

        let body = s[lt + 1..gt].trim_start();
        let closing = body.starts_with('/');
        let body = if closing { body[1..].trim_start() } else { body };
        let name_len = body
            .bytes()
            .take_while(|b| b.is_ascii_alphanumeric())
            .count();
        if name_len == 0 {
            // "<!DOCTYPE", "<?", or malformed; not a tag we care about
            i = gt + 1;
            continue;
        }

        return Some(Tag {
            start: lt,
            end: gt + 1,
            name: &body[..name_len],
            attrs: &body[name_len..],
            closing,
        });
    }
}

/// Value of `name=` in a tag's attribute text. Double/single quoted and
/// unquoted values are all accepted.
pub fn attr<'a>(attrs: &'a str, name: &str) -> Option<&'a str> {
    let lc = attrs.to_ascii_lowercase();
    let needle = format!("{}=", name.to_ascii_lowercase());

    let mut search = 0usize;
    loop {
        let p = lc.get(search..)?.find(&needle)? + search;
        // word boundary: "data-class=" must not satisfy "class="
        let boundary = p == 0
            || !matches!(lc.as_bytes()[p - 1], b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_');
        if !boundary {
            search = p + needle.len();
            continue;
        }

        let val = attrs[p + needle.len()..].trim_start();
        return Some(match val.as_bytes().first() {
            Some(b'"') => val[1..].split('"').next().unwrap_or(""),
            Some(b'\'') => val[1..].split('\'').next().unwrap_or(""),
            _ => val
                .split(|c: char| c.is_ascii_whitespace())
                .next()
                .unwrap_or(""),
        });
    }
}

/// Class-attribute membership, whole class names only.
pub fn has_class(attrs: &str, class: &str) -> bool {
    attr(attrs, "class")
        .map(|v| v.split_ascii_whitespace().any(|c| c == class))
        .unwrap_or(false)
}

/// Find the next element whose opening tag satisfies `pred`; the span
/// covers the whole block including the closing tag. Depth-aware for
/// nested same-named tags; an element left unclosed runs to the end of
/// the input.
pub fn find_element<F>(s: &str, from: usize, pred: F) -> Option<(usize, usize)>
where
    F: Fn(&Tag) -> bool,
{
    let mut pos = from;
    while let Some(t) = next_tag(s, pos) {
        pos = t.end;
        if t.closing || !pred(&t) {
            continue;
        }
        if t.childless() {
            return Some((t.start, t.end));
        }

        let mut depth = 1usize;
        let mut scan = t.end;
        while let Some(u) = next_tag(s, scan) {
            scan = u.end;
            if !u.name.eq_ignore_ascii_case(t.name) {
                continue;
            }
            if u.closing {
                depth -= 1;
                if depth == 0 {
                    return Some((t.start, u.end));
                }
            } else if !u.childless() {
                depth += 1;
            }
        }
        return Some((t.start, s.len()));
    }
    None
}

/// All blocks carrying `class`, in document order. A match is not
/// re-entered, so a hit nested inside another hit is only reported once
/// as part of its parent; the game page never nests the classes we ask
/// for.
pub fn elements_with_class<'a>(s: &'a str, class: &str) -> Vec<&'a str> {
    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some((a, b)) = find_element(s, pos, |t| has_class(t.attrs, class)) {
        out.push(&s[a..b]);
        pos = b;
    }
    out
}

pub fn element_with_class<'a>(s: &'a str, class: &str) -> Option<&'a str> {
    find_element(s, 0, |t| has_class(t.attrs, class)).map(|(a, b)| &s[a..b])
}

pub fn element_with_id<'a>(s: &'a str, id: &str) -> Option<&'a str> {
    find_element(s, 0, |t| attr(t.attrs, "id") == Some(id)).map(|(a, b)| &s[a..b])
}

/// First element with the given tag name.
pub fn first_element<'a>(s: &'a str, name: &str) -> Option<&'a str> {
    find_element(s, 0, |t| t.name.eq_ignore_ascii_case(name)).map(|(a, b)| &s[a..b])
}

/// Content between a block's opening and closing tags.
pub fn inner(block: &str) -> &str {
    match (block.find('>'), block.rfind('<')) {
        (Some(o), Some(c)) if c > o => &block[o + 1..c],
        _ => "",
    }
}

/// Attribute text of a block's opening tag.
pub fn opener_attrs(block: &str) -> &str {
    next_tag(block, 0).map(|t| t.attrs).unwrap_or("")
}

/// Visible text of a block: tags stripped, entities decoded, whitespace
/// collapsed. The stand-in for the browser's `innerText`.
pub fn text(block: &str) -> String {
    normalize_ws(&strip_tags(&normalize_entities(block)))
}

/// Remove all `<...>` spans from the string.
pub fn strip_tags(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;
    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

/// First `<a>` descendant of a block, if any.
pub fn first_anchor(block: &str) -> Option<&str> {
    first_element(inner(block), "a")
}

/// href of a block's first `<a>` descendant.
pub fn href(block: &str) -> Option<String> {
    first_anchor(block).and_then(|a| attr(opener_attrs(a), "href").map(String::from))
}

/// href of the first `<a>` descendant whose href starts with `prefix`.
pub fn href_with_prefix(block: &str, prefix: &str) -> Option<String> {
    let scope = inner(block);
    let mut pos = 0usize;
    while let Some((a, b)) = find_element(scope, pos, |t| t.name.eq_ignore_ascii_case("a")) {
        pos = b;
        if let Some(h) = attr(opener_attrs(&scope[a..b]), "href") {
            if h.starts_with(prefix) {
                return Some(s!(h));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scans_tags_and_skips_noise() {
        let doc = r#"<!DOCTYPE html><!-- note --><div class="a">x</div>"#;
        let t = next_tag(doc, 0).unwrap();
        assert_eq!(t.name, "div");
        assert!(!t.closing);
        assert!(has_class(t.attrs, "a"));
    }

    #[test]
    fn attr_variants() {
        assert_eq!(attr(r#" class="coords orbit""#, "class"), Some("coords orbit"));
        assert_eq!(attr(r#" class='x'"#, "class"), Some("x"));
        assert_eq!(attr(r#" class=x id=y"#, "class"), Some("x"));
        assert_eq!(attr(r#" data-class="x""#, "class"), None);
        assert_eq!(attr(r#" HREF="/planet/1""#, "href"), Some("/planet/1"));
    }

    #[test]
    fn class_membership_is_whole_word() {
        assert!(has_class(r#" class="fleet friendly""#, "friendly"));
        assert!(!has_class(r#" class="fleets""#, "fleet"));
    }

    #[test]
    fn block_capture_is_depth_aware() {
        let doc = r#"<div class="outer"><div>in</div> tail</div><div class="next">n</div>"#;
        let block = element_with_class(doc, "outer").unwrap();
        assert!(block.ends_with("tail</div>"));
        assert_eq!(text(block), "in tail");
    }

    #[test]
    fn finds_all_blocks_in_order() {
        let doc = r#"<div class="fleet">a</div><span class="fleet">b</span><div class="fleet">c</div>"#;
        let blocks = elements_with_class(doc, "fleet");
        let names: Vec<String> = blocks.iter().map(|b| text(b)).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn id_lookup() {
        let doc = r#"<div id="header"><div class="header">Welcome X</div></div>"#;
        let el = element_with_id(doc, "header").unwrap();
        assert_eq!(text(el), "Welcome X");
        assert!(element_with_id(doc, "footer").is_none());
    }

    #[test]
    fn anchors_and_hrefs() {
        let block = r#"<div class="planetName"><a href="/planet/5">Alpha</a></div>"#;
        assert_eq!(href(block).as_deref(), Some("/planet/5"));
        assert_eq!(text(first_anchor(block).unwrap()), "Alpha");

        let head = r#"<div><a href="/planet/5">p</a><a href="/news/9">n</a></div>"#;
        assert_eq!(href_with_prefix(head, "/news").as_deref(), Some("/news/9"));
        assert_eq!(href_with_prefix(head, "/radar"), None);
    }

    #[test]
    fn missing_selector_is_none_not_error() {
        let doc = r#"<div class="x">y</div>"#;
        assert!(element_with_class(doc, "coords").is_none());
        assert_eq!(href(doc), None);
    }

    #[test]
    fn void_and_unclosed_elements() {
        let doc = r#"<div class="population"><span>5</span><br><span class="neutral">7</span></div>"#;
        let pop = element_with_class(doc, "population").unwrap();
        assert_eq!(text(first_element(inner(pop), "span").unwrap()), "5");
        assert_eq!(text(element_with_class(inner(pop), "neutral").unwrap()), "7");

        // unclosed element runs to end of input rather than panicking
        let doc = r#"<div class="a">x<div>y"#;
        assert_eq!(element_with_class(doc, "a").unwrap(), doc);
    }
}
