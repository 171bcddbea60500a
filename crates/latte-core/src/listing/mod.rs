//! Listing domain model (the marketplace entity, read/written via the API).

pub mod model;

pub use model::{
    CreateListingRequest, Listing, ListingCategory, ListingPage, UpdateListingRequest,
};
