// Reusable components live here.

pub mod ad_list;
pub mod admin_sidebar;
pub mod article_card;
pub mod confirm_dialog;
pub mod error_banner;
pub mod flash_news;
pub mod footer;
pub mod full_width_ad;
pub mod header;
pub mod hero;
pub mod image_picker;
pub mod loading_spinner;
pub mod news_column;
pub mod pagination;
pub mod raw_html;
pub mod share_buttons;
pub mod video_card;
pub mod video_modal;
