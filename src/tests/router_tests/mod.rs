mod address_tests;
mod auth_tests;
mod edit_tests;
mod listing_tests;
mod search_tests;
