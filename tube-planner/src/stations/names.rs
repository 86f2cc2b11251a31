//! Station name lookup.

use std::cmp::Reverse;

use crate::domain::StationId;
use crate::network::Network;

use super::error::ResolveError;

/// How many spelling suggestions a miss returns.
const MAX_SUGGESTIONS: usize = 5;

/// A station id with its canonical name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationMatch {
    pub id: StationId,
    pub name: String,
}

#[derive(Debug, Clone)]
struct Entry {
    id: StationId,
    name: String,
    normalized: String,
}

impl Entry {
    fn to_match(&self) -> StationMatch {
        StationMatch {
            id: self.id,
            name: self.name.clone(),
        }
    }
}

/// Name → station lookup over a network.
///
/// Built once from the network and read-only afterwards.
#[derive(Debug, Clone)]
pub struct StationIndex {
    /// Sorted by name, then id.
    entries: Vec<Entry>,
}

impl StationIndex {
    /// Index every station in the network.
    pub fn new(network: &Network) -> Self {
        let mut entries: Vec<Entry> = network
            .stations()
            .iter()
            .map(|s| Entry {
                id: s.id,
                name: s.name.clone(),
                normalized: normalize(&s.name),
            })
            .collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Self { entries }
    }

    /// Returns the number of indexed stations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no stations are indexed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve a user-supplied name to one station.
    ///
    /// Tries, in order, and stops at the first tier with any match:
    /// 1. exact name
    /// 2. name ignoring case, punctuation and `&`/`and`
    /// 3. normalised substring
    ///
    /// One match resolves; several give `Ambiguous`. No match gives
    /// `NotFound` with the closest names by edit distance.
    pub fn resolve(&self, query: &str) -> Result<StationId, ResolveError> {
        let trimmed = query.trim();
        let wanted = normalize(trimmed);
        if wanted.is_empty() {
            return Err(ResolveError::NotFound {
                query: query.to_string(),
                suggestions: Vec::new(),
            });
        }

        let tiers: [&dyn Fn(&Entry) -> bool; 3] = [
            &|e| e.name == trimmed,
            &|e| e.normalized == wanted,
            &|e| e.normalized.contains(&wanted),
        ];

        for matches_tier in tiers {
            let found: Vec<&Entry> = self.entries.iter().filter(|e| matches_tier(*e)).collect();
            match found.as_slice() {
                [] => continue,
                [only] => return Ok(only.id),
                many => {
                    return Err(ResolveError::Ambiguous {
                        query: query.to_string(),
                        candidates: many.iter().map(|e| e.to_match()).collect(),
                    });
                }
            }
        }

        Err(ResolveError::NotFound {
            query: query.to_string(),
            suggestions: self.suggest(&wanted),
        })
    }

    /// Stations whose names contain `query`, best first.
    ///
    /// Exact matches rank first, then prefix matches, then the rest, each
    /// group alphabetical. An empty query lists stations alphabetically.
    pub fn search(&self, query: &str, limit: usize) -> Vec<StationMatch> {
        let wanted = normalize(query);

        let mut found: Vec<(u8, &Entry)> = self
            .entries
            .iter()
            .filter_map(|e| {
                let rank = if wanted.is_empty() {
                    2
                } else if e.normalized == wanted {
                    0
                } else if e.normalized.starts_with(&wanted) {
                    1
                } else if e.normalized.contains(&wanted) {
                    2
                } else {
                    return None;
                };
                Some((rank, e))
            })
            .collect();
        // Stable, so ties keep the name order of `entries`
        found.sort_by_key(|&(rank, _)| rank);

        found
            .into_iter()
            .take(limit)
            .map(|(_, e)| e.to_match())
            .collect()
    }

    /// Closest names by edit distance.
    fn suggest(&self, wanted: &str) -> Vec<StationMatch> {
        let mut scored: Vec<(usize, &Entry)> = self
            .entries
            .iter()
            .map(|e| (edit_distance(wanted, &e.normalized), e))
            .collect();
        scored.sort_by_key(|&(distance, e)| (distance, Reverse(shared_prefix(wanted, &e.normalized))));

        scored
            .into_iter()
            .take(MAX_SUGGESTIONS)
            .map(|(_, e)| e.to_match())
            .collect()
    }
}

/// Canonical form of a station name for matching.
///
/// Lower-case, `&` spelled `and`, punctuation dropped, whitespace collapsed.
///
/// ```
/// use tube_planner::stations::normalize;
///
/// assert_eq!(normalize("King's Cross St. Pancras"), "kings cross st pancras");
/// assert_eq!(normalize("Elephant & Castle"), "elephant and castle");
/// assert_eq!(normalize("  Edgware Road (B) "), "edgware road b");
/// ```
pub fn normalize(name: &str) -> String {
    let mut spelled = String::with_capacity(name.len());
    for c in name.chars() {
        match c {
            '&' => spelled.push_str(" and "),
            '-' | '/' => spelled.push(' '),
            c if c.is_alphanumeric() || c.is_whitespace() => spelled.extend(c.to_lowercase()),
            _ => {}
        }
    }
    spelled.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Levenshtein distance over chars.
fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let substitute = prev[j] + usize::from(ca != cb);
            curr[j + 1] = substitute.min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

fn shared_prefix(a: &str, b: &str) -> usize {
    a.chars().zip(b.chars()).take_while(|(x, y)| x == y).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Colour, GeoPoint, Line, LineId, Station};
    use crate::network::NetworkBuilder;

    fn index() -> StationIndex {
        let names = [
            (1, "Baker Street"),
            (2, "Bank"),
            (3, "Barking"),
            (4, "Edgware Road (B)"),
            (5, "Edgware Road (C)"),
            (6, "Elephant & Castle"),
            (7, "King's Cross St. Pancras"),
            (8, "Paddington"),
            (9, "Edgware"),
        ];
        let mut builder = NetworkBuilder::new().add_line(Line::new(LineId(1), "One", Colour::from_rgb(0, 0, 0)));
        for (id, name) in names {
            builder = builder.add_station(Station::new(StationId(id), name, GeoPoint::new(51.5, -0.1)));
        }
        StationIndex::new(&builder.build().unwrap())
    }

    #[test]
    fn exact_name() {
        assert_eq!(index().resolve("Baker Street"), Ok(StationId(1)));
        assert_eq!(index().resolve("  Paddington "), Ok(StationId(8)));
    }

    #[test]
    fn exact_beats_substring() {
        // "Edgware" is also a substring of both Edgware Road stations
        assert_eq!(index().resolve("Edgware"), Ok(StationId(9)));
    }

    #[test]
    fn case_and_punctuation_insensitive() {
        assert_eq!(index().resolve("baker street"), Ok(StationId(1)));
        assert_eq!(index().resolve("kings cross st pancras"), Ok(StationId(7)));
        assert_eq!(index().resolve("Elephant and Castle"), Ok(StationId(6)));
        assert_eq!(index().resolve("edgware road (c)"), Ok(StationId(5)));
    }

    #[test]
    fn unique_substring() {
        assert_eq!(index().resolve("pancras"), Ok(StationId(7)));
        assert_eq!(index().resolve("elephant"), Ok(StationId(6)));
    }

    #[test]
    fn ambiguous_substring() {
        match index().resolve("edgware road") {
            Err(ResolveError::Ambiguous { candidates, .. }) => {
                let ids: Vec<_> = candidates.iter().map(|c| c.id).collect();
                assert_eq!(ids, vec![StationId(4), StationId(5)]);
            }
            other => panic!("expected ambiguous, got {other:?}"),
        }
    }

    #[test]
    fn not_found_suggests_close_names() {
        match index().resolve("Bakr Stret") {
            Err(ResolveError::NotFound { suggestions, query }) => {
                assert_eq!(query, "Bakr Stret");
                assert_eq!(suggestions[0].name, "Baker Street");
                assert!(suggestions.len() <= MAX_SUGGESTIONS);
            }
            other => panic!("expected not found, got {other:?}"),
        }
    }

    #[test]
    fn empty_query_not_found() {
        assert!(matches!(
            index().resolve("   "),
            Err(ResolveError::NotFound { suggestions, .. }) if suggestions.is_empty()
        ));
        assert!(matches!(
            index().resolve("?!"),
            Err(ResolveError::NotFound { suggestions, .. }) if suggestions.is_empty()
        ));
    }

    #[test]
    fn search_ranks_exact_then_prefix_then_substring() {
        let names: Vec<_> = index()
            .search("ba", 10)
            .into_iter()
            .map(|m| m.name)
            .collect();
        assert_eq!(names, vec!["Baker Street", "Bank", "Barking"]);

        let names: Vec<_> = index()
            .search("edgware", 10)
            .into_iter()
            .map(|m| m.name)
            .collect();
        assert_eq!(names, vec!["Edgware", "Edgware Road (B)", "Edgware Road (C)"]);
    }

    #[test]
    fn search_limit_and_empty_query() {
        assert_eq!(index().search("", 3).len(), 3);
        assert_eq!(index().search("", 3)[0].name, "Baker Street");
        assert!(index().search("zzz", 10).is_empty());
        assert!(index().search("a", 0).is_empty());
    }

    #[test]
    fn normalize_examples() {
        assert_eq!(normalize("Harrow-on-the-Hill"), "harrow on the hill");
        assert_eq!(normalize("Heathrow Terminals 1, 2 & 3"), "heathrow terminals 1 2 and 3");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn edit_distance_basics() {
        assert_eq!(edit_distance("", ""), 0);
        assert_eq!(edit_distance("abc", ""), 3);
        assert_eq!(edit_distance("", "abc"), 3);
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("bank", "bank"), 0);
    }
}
