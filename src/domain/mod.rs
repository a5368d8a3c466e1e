pub mod listing;

pub use listing::{InputError, NeighbourhoodGroup, RawListingInput, RoomType};
