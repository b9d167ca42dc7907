pub mod edit_listing;
pub mod home;
pub mod listing;
pub mod login;
pub mod my_listings;
pub mod new_listing;
pub mod register;

pub use edit_listing::{edit_listing_page, EditListingVm};
pub use home::{home_page, SearchVm};
pub use listing::{listing_error_page, listing_page, ListingVm};
pub use login::login_page;
pub use my_listings::{my_listings_page, MyListingsVm};
pub use new_listing::{new_listing_page, NewListingVm};
pub use register::register_page;
