//! Data model and content rules shared by the H Media reader site, its admin
//! console and the operator CLI.
//!
//! Everything in here is pure: no I/O, no browser APIs. The frontend and the
//! CLI fetch records from the REST API and hand them to these functions for
//! pagination, ad placement, tag cleanup and preview text.

pub mod ads;
pub mod category;
pub mod dates;
pub mod endpoints;
pub mod error;
pub mod feed;
pub mod forms;
pub mod media;
pub mod models;
pub mod pagination;
pub mod share;
pub mod summary;
pub mod tags;

pub use category::ArticleCategory;
pub use error::ApiError;
pub use models::{
    Advertisement, ArticleRecord, Banner, FlashNews, LoginResponse, Paginated, RawTags, Teaser,
};
