//! Venue registry for pool location lookups
//!
//! Maps canonical team names to static pool reference data. The table is an
//! explicit ordered sequence: lookups scan entries in insertion order and
//! the first match wins, so disambiguation between overlapping names is
//! fixed by table order rather than by hash iteration.

use crate::app::models::Venue;
use tracing::warn;

#[cfg(test)]
pub mod tests;

/// Ordered mapping of canonical team name to pool information
#[derive(Debug, Clone)]
pub struct VenueRegistry {
    entries: Vec<(String, Venue)>,
}

impl VenueRegistry {
    /// Create a registry from an ordered table of (canonical name, venue)
    pub fn new(entries: Vec<(String, Venue)>) -> Self {
        Self { entries }
    }

    /// The pool table of the current deployment, in reference order
    pub fn builtin() -> Self {
        Self::new(vec![
            (
                "C.n. Caballa - Ciudad De Ceuta".to_string(),
                Venue::new("Piscina Lorena Miranda", "Ceuta", 35.8893, -5.3198),
            ),
            (
                "C.n. Terrassa".to_string(),
                Venue::new("Piscina Municipal Can Xarau", "Terrassa", 41.5630, 2.0082),
            ),
            (
                "C.n. Barcelona".to_string(),
                Venue::new("Club Natació Barcelona", "Barcelona", 41.3851, 2.1923),
            ),
            (
                "C.e. Mediterrani".to_string(),
                Venue::new("CE Mediterrani", "Barcelona", 41.3879, 2.1942),
            ),
            (
                "Solartradex C.n. Mataró".to_string(),
                Venue::new("Piscina Municipal Mataró", "Mataró", 41.5381, 2.4445),
            ),
            (
                "Santa Cruz Tenerife Echeyde".to_string(),
                Venue::new(
                    "Piscina Acidalio Lorenzo",
                    "Santa Cruz de Tenerife",
                    28.4636,
                    -16.2518,
                ),
            ),
            (
                "C. Encinas De Boadilla".to_string(),
                Venue::new(
                    "Piscina Municipal Boadilla",
                    "Boadilla del Monte",
                    40.4058,
                    -3.8756,
                ),
            ),
            (
                "C.n. Sant Andreu".to_string(),
                Venue::new(
                    "Piscina Municipal Trinitat Vella",
                    "Barcelona",
                    41.4456,
                    2.1892,
                ),
            ),
            (
                "C.n. Atlètic-Barceloneta".to_string(),
                Venue::new(
                    "Club Natació Atlètic-Barceloneta",
                    "Barcelona",
                    41.3809,
                    2.1897,
                ),
            ),
            (
                "Real Canoe N.c.".to_string(),
                Venue::new("Real Canoe NC", "Madrid", 40.4538, -3.6745),
            ),
            (
                "C.n. Sabadell".to_string(),
                Venue::new("Piscina Can Llong", "Sabadell", 41.5500, 2.1028),
            ),
        ])
    }

    /// Resolve a team display name to its pool.
    ///
    /// An entry matches when its canonical key (case-folded) is a substring
    /// of the input, or the input (case-folded) is a substring of the key.
    /// The bidirectional test tolerates both abbreviated and decorated
    /// spellings. The first matching entry in table order wins.
    pub fn resolve(&self, team_display_name: &str) -> Option<&Venue> {
        let needle = team_display_name.to_lowercase();
        for (canonical, venue) in &self.entries {
            let key = canonical.to_lowercase();
            if needle.contains(&key) || key.contains(&needle) {
                return Some(venue);
            }
        }
        warn!("No venue found for team: {}", team_display_name);
        None
    }

    /// Number of entries in the table
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in table order
    pub fn iter(&self) -> impl Iterator<Item = &(String, Venue)> {
        self.entries.iter()
    }
}
