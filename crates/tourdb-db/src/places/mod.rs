//! Database operations for the `places` table.

mod query;
mod read;
mod types;
mod write;

pub use read::{count_places, get_place, list_places_page};
pub use types::{NewPlace, PlaceRow};
pub use write::insert_place;
