pub mod gallery;
pub mod pagination;
pub mod photos;
