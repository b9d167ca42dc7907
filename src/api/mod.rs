mod api_error;
mod client;
pub mod models;

pub use api_error::ApiError;
pub use client::HttpKitnetApi;
pub use models::{
    Credentials, Listing, ListingUpdate, LoginResponse, NewAccount, NewListing, Photo,
    PhotoUpload, SearchQuery,
};

/// Everything the front end asks of the kitnets backend.
///
/// Handlers only talk to the backend through this trait so router tests
/// can swap in a canned implementation.
pub trait KitnetApi: Send + Sync {
    fn search(&self, query: &SearchQuery) -> Result<Vec<Listing>, ApiError>;

    fn get_listing(&self, id: &str) -> Result<Listing, ApiError>;

    /// Listings owned by the bearer of `token`.
    fn my_listings(&self, token: &str) -> Result<Vec<Listing>, ApiError>;

    fn create_listing(
        &self,
        token: &str,
        listing: &NewListing,
        photos: Vec<PhotoUpload>,
    ) -> Result<(), ApiError>;

    fn update_listing(&self, token: &str, id: &str, update: &ListingUpdate)
        -> Result<(), ApiError>;

    fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError>;

    fn register(&self, account: &NewAccount) -> Result<(), ApiError>;
}
