#![allow(dead_code, reason = "not every string is rendered by every build")]

pub mod common {
    pub const LOADING: &str = "Loading...";
}

pub mod pagination {
    pub const ARIA_NAV: &str = "Pagination";
    pub const ARIA_PREV: &str = "Previous page";
    pub const ARIA_NEXT: &str = "Next page";
    pub const ARIA_GOTO_PAGE_TEMPLATE: &str = "Go to page {}";
}

pub mod error_banner {
    pub const TITLE: &str = "Something went wrong";
    pub const SUCCESS_TITLE: &str = "Done";
    pub const CLOSE_ARIA: &str = "Dismiss message";
}

pub mod news_column {
    pub const VIEW_MORE: &str = "View More";
}

pub mod ads {
    pub const ALT: &str = "Advertisement";
    pub const CONTACT_US: &str = "Contact Us";
}

pub mod hero {
    pub const BANNER_ALT: &str = "Featured banner";
    pub const GOTO_SLIDE_TEMPLATE: &str = "Go to slide {}";
}

pub mod flash_news {
    pub const LOADING: &str = "Loading flash news...";
    pub const LABEL: &str = "Flash News";
}

pub mod video_modal {
    pub const CLOSE_ARIA: &str = "Close video";
    pub const PLAYER_TITLE: &str = "YouTube video player";
}

pub mod share {
    pub const SHARE: &str = "Share";
    pub const FACEBOOK: &str = "Share on Facebook";
    pub const WHATSAPP: &str = "Share on WhatsApp";
    pub const INSTAGRAM: &str = "Open Instagram";
    pub const COPY_LINK: &str = "Copy link";
    pub const COPIED: &str = "Link copied";
}

pub mod confirm_dialog {
    pub const DEFAULT_TITLE: &str = "Confirm Deletion";
    pub const DEFAULT_MESSAGE: &str = "Are you sure you want to delete this item? This action cannot be undone.";
    pub const DEFAULT_CONFIRM: &str = "Delete";
    pub const CANCEL: &str = "Cancel";
    pub const CLOSE_ARIA: &str = "Close dialog";
}

pub mod header {
    pub const NAV_HOME: &str = "Home";
    pub const NAV_LATEST: &str = "Latest News";
    pub const NAV_CINEMA: &str = "Cinema News";
    pub const NAV_MEET: &str = "Meet the Person";
    pub const NAV_TEASERS: &str = "Teaser & Promo";
    pub const NAV_MORE: &str = "More News";
    pub const BRAND_NAME: &str = "Channel H Media";
    pub const NAV_MAIN_ARIA: &str = "Main navigation";
    pub const SUBSCRIBE: &str = "Subscribe";
    pub const OPEN_MENU_ARIA: &str = "Open menu";
    pub const CLOSE_MENU_ARIA: &str = "Close menu";
    pub const MOBILE_NAV_ARIA: &str = "Mobile navigation";
    pub const FACEBOOK: &str = "Facebook";
    pub const INSTAGRAM: &str = "Instagram";
}

pub mod footer {
    pub const SOCIAL_ARIA: &str = "Social links";
    pub const CONTACT_LABEL: &str = "Contact:";
    pub const COPYRIGHT_TEMPLATE: &str = "© {} Channel H Media. All rights reserved.";
}

pub mod admin_sidebar {
    pub const DASHBOARD: &str = "Dashboard";
    pub const HOME_BANNER: &str = "Home Banner";
    pub const FLASH_NEWS: &str = "Flash News";
    pub const TRENDING_NEWS: &str = "Trending News";
    pub const LATEST_NEWS: &str = "Latest News";
    pub const CINEMA_NEWS: &str = "Cinema News";
    pub const MEET_THE_PERSON: &str = "Meet the Person";
    pub const TEASER_AND_PROMO: &str = "Teaser & Promo";
    pub const MORE_NEWS: &str = "More News";
    pub const ADVERTISEMENT: &str = "Advertisement";
    pub const VIEW_SITE: &str = "View Site";
    pub const BRAND: &str = "Channel H Admin";
    pub const NAV_ARIA: &str = "Admin navigation";
    pub const LOGOUT: &str = "Logout";
    pub const LOGOUT_TITLE: &str = "Confirm Logout";
    pub const LOGOUT_MESSAGE: &str = "Are you sure you want to log out?";
}

pub mod image_picker {
    pub const UNREADABLE: &str = "Could not read the selected image.";
    pub const HINT: &str = "JPG, PNG or WebP, under 5MB.";
    pub const HINT_LANDSCAPE: &str = "Landscape JPG, PNG or WebP, under 5MB.";
    pub const PREVIEW_ALT: &str = "Selected image preview";
}

pub mod home_page {
    pub const SEO_TITLE: &str = "Channel H Media | Latest News, Cinema and Interviews";
    pub const TRAILERS: &str = "Trailers";
    pub const LATEST_NEWS: &str = "Latest News";
    pub const CINEMA_NEWS: &str = "Cinema News";
    pub const MEET_THE_PERSON: &str = "Meet the Person";
    pub const TRENDING_NEWS: &str = "Trending News";
    pub const MORE_NEWS: &str = "More News";
    pub const VIEW_MORE: &str = "View More";
}

pub mod listing_page {
    pub const EMPTY: &str = "No news available.";
}

pub mod teasers_page {
    pub const TITLE: &str = "Teaser & Promo";
    pub const EMPTY: &str = "No videos available.";
}

pub mod article_detail {
    pub const BY: &str = "Written by";
    pub const TAGS_ARIA: &str = "Tags";
}

pub mod not_found {
    pub const BACK_HOME: &str = "Back to Home";
    pub const PAGE_TITLE: &str = "404 - Page Not Found";
    pub const PAGE_MESSAGE: &str = "Sorry, the page you are looking for does not exist.";
    pub const ARTICLE_TITLE: &str = "404 - News Not Found";
    pub const ARTICLE_MESSAGE: &str = "Sorry, we couldn't find the News you were looking for.";
}

pub mod admin_common {
    pub const LOADING: &str = "Loading...";
    pub const EMPTY: &str = "No records found.";
    pub const ACTIVE: &str = "Active";
    pub const INACTIVE: &str = "Inactive";
    pub const EDIT: &str = "Edit";
    pub const DELETE: &str = "Delete";
    pub const CLOSE_ARIA: &str = "Close";
    pub const SAVING: &str = "Saving...";
}

pub mod login_page {
    pub const PAGE_TITLE: &str = "Admin Login | Channel H Media";
    pub const LOGO_ALT: &str = "Channel H Media";
    pub const HEADING: &str = "Sign in to the admin panel";
    pub const USERNAME: &str = "Username";
    pub const USERNAME_PLACEHOLDER: &str = "Enter your username";
    pub const PASSWORD: &str = "Password";
    pub const PASSWORD_PLACEHOLDER: &str = "Enter your password";
    pub const INVALID_CREDENTIALS: &str = "Invalid username or password.";
    pub const GENERIC_FAILURE: &str = "Login failed. Please try again.";
    pub const SIGNING_IN: &str = "Signing in...";
    pub const SIGN_IN: &str = "Sign In";
}

pub mod dashboard {
    pub const PAGE_TITLE: &str = "Dashboard | Channel H Admin";
    pub const HEADING: &str = "Dashboard";
    pub const RECENT_NEWS: &str = "Recent News";
    pub const NO_RECENT: &str = "No recent news.";
    pub const PUBLISHED: &str = "Published";
    pub const LIVE: &str = "LIVE";
    pub const OVERVIEW: &str = "Content Overview";
}

pub mod admin_articles {
    pub const FALLBACK_SECTION: &str = "News";
    pub const PAGE_TITLE_TEMPLATE: &str = "{} | Channel H Admin";
    pub const SAVE_FAILED: &str = "Failed to save the article.";
    pub const DELETE_FAILED: &str = "Failed to delete the article.";
    pub const UPDATED: &str = "{} article updated.";
    pub const CREATED: &str = "{} article created.";
    pub const DELETED: &str = "Article deleted.";
    pub const EDIT_TITLE_TEMPLATE: &str = "Edit {}";
    pub const UPDATE_BUTTON_TEMPLATE: &str = "Update {}";
    pub const ADD_TITLE_TEMPLATE: &str = "Add {}";
    pub const ADD_BUTTON_TEMPLATE: &str = "Add {}";
    pub const BACK_ARIA: &str = "Back to list";
    pub const SUBTITLE_TEMPLATE: &str = "Manage {} articles.";
    pub const COL_INDEX: &str = "#";
    pub const COL_IMAGE: &str = "Image";
    pub const COL_TITLE: &str = "Title";
    pub const COL_SLUG: &str = "Slug";
    pub const COL_DATE: &str = "Date";
    pub const COL_ACTIONS: &str = "Actions";
    pub const DELETE_MESSAGE: &str = "Are you sure you want to delete this article? This action cannot be undone.";
    pub const FIELD_TITLE: &str = "Title";
    pub const TITLE_PLACEHOLDER: &str = "Enter news title";
    pub const FIELD_SLUG: &str = "Slug";
    pub const SLUG_PLACEHOLDER: &str = "news-title-in-lowercase";
    pub const FIELD_AUTHOR: &str = "Author";
    pub const AUTHOR_PLACEHOLDER: &str = "Enter author name";
    pub const FIELD_DATE: &str = "Published Date";
    pub const FIELD_IMAGE: &str = "Image";
    pub const FIELD_CONTENT: &str = "Content";
    pub const CONTENT_PLACEHOLDER: &str = "Write the article body. Basic HTML is allowed.";
    pub const FIELD_TRENDING: &str = "Show in Trending News";
    pub const FIELD_TAGS: &str = "Tags";
    pub const EDIT_TAG: &str = "Click to edit tag";
    pub const REMOVE_TAG: &str = "Remove tag";
    pub const TAGS_FULL: &str = "Tag limit reached";
    pub const TAGS_PLACEHOLDER: &str = "Type a tag and press Enter";
    pub const TAGS_HINT_TEMPLATE: &str = "Up to {} tags. Press Enter or comma to add.";
}

pub mod admin_trending {
    pub const PAGE_TITLE: &str = "Trending News | Channel H Admin";
    pub const REMOVE_FAILED: &str = "Failed to remove the article from Trending.";
    pub const REMOVED: &str = "Removed from Trending.";
    pub const VIEW_IMAGE: &str = "View Image";
    pub const REMOVE_TITLE: &str = "Remove from Trending";
    pub const REMOVE: &str = "Remove";
    pub const HEADING: &str = "Trending News";
    pub const SUBTITLE: &str = "Articles flagged as trending from the news sections.";
    pub const COL_IMAGE: &str = "Image";
    pub const COL_TITLE: &str = "Title";
    pub const COL_DATE: &str = "Date";
    pub const COL_ACTIONS: &str = "Actions";
    pub const REMOVE_MESSAGE: &str = "Remove this article from the Trending News strip?";
    pub const CLOSE_PREVIEW: &str = "Close preview";
    pub const PREVIEW_ALT: &str = "Trending article image";
}

pub mod admin_banners {
    pub const PAGE_TITLE: &str = "Home Banner | Channel H Admin";
    pub const SAVE_FAILED: &str = "Failed to save the banner.";
    pub const DELETE_FAILED: &str = "Failed to delete the banner.";
    pub const UPDATED: &str = "Banner updated.";
    pub const CREATED: &str = "Banner created.";
    pub const DELETED: &str = "Banner deleted.";
    pub const EDIT_TITLE: &str = "Edit Banner";
    pub const ADD_TITLE: &str = "Add Banner";
    pub const HEADING: &str = "Home Banner";
    pub const SUBTITLE: &str = "Manage the slides of the home page carousel.";
    pub const ADD_BUTTON: &str = "Add Banner";
    pub const COL_INDEX: &str = "#";
    pub const COL_IMAGE: &str = "Image";
    pub const COL_TITLE: &str = "Title";
    pub const COL_STATUS: &str = "Status";
    pub const COL_ACTIONS: &str = "Actions";
    pub const DELETE_TITLE: &str = "Delete Banner";
    pub const FIELD_TITLE: &str = "Title";
    pub const TITLE_PLACEHOLDER: &str = "Enter banner title";
    pub const FIELD_IMAGE: &str = "Image";
    pub const FIELD_ACTIVE: &str = "Active";
    pub const UPDATE_BUTTON: &str = "Update Banner";
}

pub mod admin_flash_news {
    pub const PAGE_TITLE: &str = "Flash News | Channel H Admin";
    pub const SAVE_FAILED: &str = "Failed to save the flash news.";
    pub const DELETE_FAILED: &str = "Failed to delete the flash news.";
    pub const UPDATED: &str = "Flash news updated.";
    pub const CREATED: &str = "Flash news added.";
    pub const DELETED: &str = "Flash news deleted.";
    pub const EDIT_TITLE: &str = "Edit Flash News";
    pub const ADD_TITLE: &str = "Add Flash News";
    pub const HEADING: &str = "Flash News";
    pub const SUBTITLE: &str = "Manage breaking news and quick updates.";
    pub const ADD_BUTTON: &str = "Add Flash News";
    pub const COL_INDEX: &str = "#";
    pub const COL_TITLE: &str = "Title";
    pub const COL_STATUS: &str = "Status";
    pub const COL_ACTIONS: &str = "Actions";
    pub const DELETE_TITLE: &str = "Confirm Deletion";
    pub const DELETE_MESSAGE: &str = "Are you sure you want to delete this flash news?";
    pub const FIELD_TITLE: &str = "Title";
    pub const TITLE_PLACEHOLDER: &str = "Enter flash news title";
    pub const FIELD_ACTIVE: &str = "Active";
    pub const SAVE_BUTTON: &str = "Save Changes";
    pub const ADD_BUTTON_SHORT: &str = "Add News";
}

pub mod admin_teasers {
    pub const PAGE_TITLE: &str = "Teaser & Promo | Channel H Admin";
    pub const SAVE_FAILED: &str = "Failed to save the video.";
    pub const ADD_FAILED: &str = "Failed to add teaser";
    pub const UPDATE_FAILED: &str = "Failed to update video";
    pub const DELETE_FAILED: &str = "Failed to delete teaser";
    pub const UPDATED: &str = "Video updated.";
    pub const CREATED: &str = "Video added.";
    pub const DELETED: &str = "Teaser deleted.";
    pub const EDIT_TITLE: &str = "Edit Teaser/Promo";
    pub const ADD_TITLE: &str = "Add New Teaser/Promo";
    pub const HEADING: &str = "Teaser & Promo";
    pub const SUBTITLE: &str = "Manage the YouTube trailers and promos shown on the site.";
    pub const ADD_BUTTON: &str = "Add Video";
    pub const ADD_VIDEO: &str = "Add Video";
    pub const SAVE_BUTTON: &str = "Save Changes";
    pub const WATCH: &str = "Watch on YouTube";
    pub const NO_DATE: &str = "N/A";
    pub const COL_INDEX: &str = "#";
    pub const COL_THUMBNAIL: &str = "Thumbnail";
    pub const COL_TITLE: &str = "Title";
    pub const COL_DATE: &str = "Published";
    pub const COL_STATUS: &str = "Status";
    pub const COL_ACTIONS: &str = "Actions";
    pub const DELETE_TITLE: &str = "Delete Teaser";
    pub const FIELD_TITLE: &str = "Video Title";
    pub const FIELD_URL: &str = "YouTube URL";
    pub const FIELD_DATE: &str = "Published Date";
    pub const FIELD_ACTIVE: &str = "Active";
}

pub mod admin_ads {
    pub const PAGE_TITLE: &str = "Advertisement | Channel H Admin";
    pub const FILTER_ALL: &str = "All";
    pub const SAVE_FAILED: &str = "Failed to save the advertisement.";
    pub const DELETE_FAILED: &str = "Failed to delete the advertisement.";
    pub const UPDATED: &str = "Advertisement updated.";
    pub const CREATED: &str = "Advertisement created.";
    pub const DELETED: &str = "Advertisement deleted.";
    pub const ADD_TITLE: &str = "Add Advertisement";
    pub const CHOOSE_TITLE: &str = "Choose Advertisement Type";
    pub const BANNER_HINT: &str = "Uses a wide, full-width layout design.";
    pub const SQUARE_HINT: &str = "Uses a boxed layout for side sections and content.";
    pub const EDIT_TITLE_TEMPLATE: &str = "Edit {} Advertisement";
    pub const ADD_TITLE_TEMPLATE: &str = "Add {} Advertisement";
    pub const HEADING: &str = "Advertisement Management";
    pub const SUBTITLE: &str = "Manage ad placements across the site.";
    pub const ADD_BUTTON: &str = "Add Advertisement";
    pub const FILTER_LABEL: &str = "Filter by Page Type";
    pub const COL_INDEX: &str = "#";
    pub const COL_IMAGE: &str = "Image";
    pub const COL_TITLE: &str = "Title";
    pub const COL_PAGE: &str = "Page";
    pub const COL_TYPE: &str = "Type";
    pub const COL_ORDER: &str = "Order";
    pub const COL_STATUS: &str = "Status";
    pub const COL_ACTIONS: &str = "Actions";
    pub const DELETE_TITLE: &str = "Delete Advertisement";
    pub const SAVE_BUTTON: &str = "Save Changes";
    pub const CREATE_BUTTON: &str = "Create Advertisement";
    pub const FIELD_TITLE: &str = "Title";
    pub const FIELD_IMAGE: &str = "Image";
    pub const FIELD_PAGE: &str = "Page";
    pub const FIELD_ORDER: &str = "Display Order";
    pub const FIELD_LINK: &str = "Link URL";
    pub const FIELD_ACTIVE: &str = "Active";
    pub const FIELD_CONTACT: &str = "Show \"Contact Us\" button";
}
