pub mod admin;
pub mod article_detail;
pub mod category_listing;
pub mod home;
pub mod latest_news;
pub mod not_found;
pub mod teasers;
