//! Shared test fixtures for venue registry tests

use crate::app::models::Venue;
use crate::app::services::venue_registry::VenueRegistry;


/// Registry with two deliberately overlapping keys to exercise table order
pub fn create_overlapping_registry() -> VenueRegistry {
    VenueRegistry::new(vec![
        (
            "C.n. Barcelona".to_string(),
            Venue::new("Club Natació Barcelona", "Barcelona", 41.3851, 2.1923),
        ),
        (
            "C.n. Barcelona B".to_string(),
            Venue::new("Piscina Annexa", "Barcelona", 41.3852, 2.1924),
        ),
    ])
}
