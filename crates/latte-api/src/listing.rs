//! Listing domain service: thin request/response mappers over the API client.

use uuid::Uuid;

use latte_core::error::Result;
use latte_core::listing::{CreateListingRequest, Listing, ListingPage, UpdateListingRequest};

use crate::client::ApiClient;
use crate::endpoints;

#[derive(Clone)]
pub struct ListingService {
    client: ApiClient,
}

impl ListingService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetches a page of public listings.
    pub async fn list(&self, page: u32, page_size: u32) -> Result<ListingPage> {
        self.client
            .get_with_query(
                endpoints::LISTINGS,
                &[("page", page), ("pageSize", page_size)],
            )
            .await
    }

    /// Fetches the signed-in seller's own listings.
    pub async fn my_listings(&self) -> Result<ListingPage> {
        self.client.get(endpoints::MY_LISTINGS).await
    }

    pub async fn get(&self, id: Uuid) -> Result<Listing> {
        self.client.get(&endpoints::listing(id)).await
    }

    pub async fn create(&self, request: &CreateListingRequest) -> Result<Listing> {
        self.client.post(endpoints::LISTINGS, request).await
    }

    pub async fn update(&self, id: Uuid, request: &UpdateListingRequest) -> Result<Listing> {
        self.client.put(&endpoints::listing(id), request).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        self.client.delete(&endpoints::listing(id)).await
    }
}
