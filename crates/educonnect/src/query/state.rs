//! Query state: the per-listing map of active filter values.
//!
//! State round-trips through a URL-style query string so a filtered view
//! is shareable and reproducible: `parse` seeds the state from whatever
//! parameters are present (unknown keys are ignored, missing keys stay
//! inactive), setters keep the map minimal (set when non-empty, remove
//! when cleared), and `to_query_string` emits active entries in a
//! deterministic order.
//!
//! Every change other than paging resets the page back to 1, so a
//! narrower result set always starts at its first page.

use std::collections::BTreeMap;

/// Free-text search term, shared by all listings.
pub const SEARCH_KEY: &str = "search";
/// Sort mode, where a listing supports one.
pub const SORT_KEY: &str = "orden";
/// 1-based page number, catalog only.
pub const PAGE_KEY: &str = "pagina";

/// The active filter/search/sort/page values for one listing instance.
///
/// Values are raw strings exactly as they came from the query string or
/// the UI; interpretation (numeric bounds, sort keys) happens in the
/// filter and sort layers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    values: BTreeMap<String, String>,
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed state from a query string (`a=1&b=x`, leading `?` allowed).
    /// Only keys listed in `known` are kept; everything else is ignored.
    /// Decoding is lenient: `+` means space, malformed `%` escapes are
    /// kept literally.
    pub fn parse(query: &str, known: &[&str]) -> Self {
        let mut state = QueryState::default();
        let query = query.strip_prefix('?').unwrap_or(query);
        for pair in query.split('&') {
            if pair.is_empty() {
                continue;
            }
            let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
            let key = decode_component(raw_key);
            if !known.contains(&key.as_str()) {
                continue;
            }
            let value = decode_component(raw_value);
            if !value.is_empty() {
                state.values.insert(key, value);
            }
        }
        state
    }

    /// The value for `key`, or `""` when the filter is inactive.
    pub fn get(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or("")
    }

    /// Set or clear one value. A non-empty value activates the filter, an
    /// empty one removes it. Any change other than the page itself resets
    /// the page to 1.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            self.values.remove(key);
        } else {
            self.values.insert(key.to_string(), value);
        }
        if key != PAGE_KEY {
            self.values.remove(PAGE_KEY);
        }
    }

    pub fn search(&self) -> &str {
        self.get(SEARCH_KEY)
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.set(SEARCH_KEY, term);
    }

    pub fn sort(&self) -> &str {
        self.get(SORT_KEY)
    }

    pub fn set_sort(&mut self, key: impl Into<String>) {
        self.set(SORT_KEY, key);
    }

    /// The requested 1-based page. Missing, zero, or unparsable values
    /// mean page 1.
    pub fn page(&self) -> usize {
        self.get(PAGE_KEY)
            .parse::<usize>()
            .ok()
            .filter(|p| *p >= 1)
            .unwrap_or(1)
    }

    /// Page 1 is the default and is kept out of the map (and therefore
    /// out of the query string).
    pub fn set_page(&mut self, page: usize) {
        if page <= 1 {
            self.values.remove(PAGE_KEY);
        } else {
            self.values.insert(PAGE_KEY.to_string(), page.to_string());
        }
    }

    /// Drop every filter, the search term, the sort, and the page.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// True when nothing is active, i.e. the listing shows its default
    /// view.
    pub fn is_default(&self) -> bool {
        self.values.is_empty()
    }

    /// Serialize active entries as `key=value&...` in deterministic
    /// (alphabetical) key order. Returns `""` for the default state.
    pub fn to_query_string(&self) -> String {
        self.values
            .iter()
            .map(|(k, v)| format!("{}={}", encode_component(k), encode_component(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

fn hex_val(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

fn decode_component(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out: Vec<u8> = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                match (hex_val(bytes[i + 1]), hex_val(bytes[i + 2])) {
                    (Some(hi), Some(lo)) => {
                        out.push(hi * 16 + lo);
                        i += 3;
                    }
                    _ => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn encode_component(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char)
            }
            b' ' => out.push('+'),
            _ => out.push_str(&format!("%{:02X}", b)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEYS: &[&str] = &["search", "universidad", "materia", "orden", "pagina"];

    #[test]
    fn test_parse_seeds_known_keys() {
        let s = QueryState::parse("search=calculo&universidad=UTP", KEYS);
        assert_eq!(s.search(), "calculo");
        assert_eq!(s.get("universidad"), "UTP");
        assert_eq!(s.get("materia"), "");
    }

    #[test]
    fn test_parse_ignores_unknown_keys() {
        let s = QueryState::parse("search=x&utm_source=mail&foo=bar", KEYS);
        assert_eq!(s.search(), "x");
        assert_eq!(s.get("utm_source"), "");
        assert_eq!(s.to_query_string(), "search=x");
    }

    #[test]
    fn test_parse_accepts_leading_question_mark() {
        let s = QueryState::parse("?materia=Anatomía", KEYS);
        assert_eq!(s.get("materia"), "Anatomía");
    }

    #[test]
    fn test_parse_decodes_escapes_and_plus() {
        let s = QueryState::parse("search=C%C3%A1lculo+I", KEYS);
        assert_eq!(s.search(), "Cálculo I");
    }

    #[test]
    fn test_parse_keeps_malformed_escape_literally() {
        let s = QueryState::parse("search=50%25&materia=a%zz", KEYS);
        assert_eq!(s.search(), "50%");
        assert_eq!(s.get("materia"), "a%zz");
    }

    #[test]
    fn test_empty_values_stay_inactive() {
        let s = QueryState::parse("search=&universidad=UTP", KEYS);
        assert_eq!(s.search(), "");
        assert_eq!(s.to_query_string(), "universidad=UTP");
    }

    #[test]
    fn test_set_and_clear_one_value() {
        let mut s = QueryState::new();
        s.set("universidad", "PUCP");
        assert_eq!(s.get("universidad"), "PUCP");
        s.set("universidad", "");
        assert_eq!(s.get("universidad"), "");
        assert!(s.is_default());
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut s = QueryState::new();
        s.set_page(4);
        assert_eq!(s.page(), 4);
        s.set("materia", "Cálculo I");
        assert_eq!(s.page(), 1);

        s.set_page(3);
        s.set_search("limites");
        assert_eq!(s.page(), 1);
    }

    #[test]
    fn test_page_defaults_and_fallbacks() {
        assert_eq!(QueryState::parse("pagina=3", KEYS).page(), 3);
        assert_eq!(QueryState::parse("pagina=abc", KEYS).page(), 1);
        assert_eq!(QueryState::parse("pagina=0", KEYS).page(), 1);
        assert_eq!(QueryState::new().page(), 1);
    }

    #[test]
    fn test_page_one_is_not_serialized() {
        let mut s = QueryState::new();
        s.set_page(1);
        assert_eq!(s.to_query_string(), "");
        s.set_page(2);
        assert_eq!(s.to_query_string(), "pagina=2");
    }

    #[test]
    fn test_query_string_is_deterministic_and_round_trips() {
        let mut s = QueryState::new();
        s.set_search("Cálculo I");
        s.set("universidad", "UTP");
        s.set_sort("rating");
        let qs = s.to_query_string();
        assert_eq!(qs, "orden=rating&search=C%C3%A1lculo+I&universidad=UTP");
        let back = QueryState::parse(&qs, KEYS);
        assert_eq!(back, s);
    }

    #[test]
    fn test_clear_restores_default_state() {
        let mut s = QueryState::parse("search=x&universidad=UTP&pagina=5", KEYS);
        assert!(!s.is_default());
        s.clear();
        assert!(s.is_default());
        assert_eq!(s.page(), 1);
        assert_eq!(s.to_query_string(), "");
    }
}
