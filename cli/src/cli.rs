use clap::{Parser, Subcommand, ValueEnum};
use hmedia_shared::{ads::AdShape, endpoints::Collection, ArticleCategory};

/// Production content API.
pub const DEFAULT_API_BASE: &str = "http://hmedia-api.channelhmedia.in";

/// Page size used when a collection without server pagination is paged
/// locally. Matches the admin tables.
pub const DEFAULT_PER_PAGE: usize = 10;

/// Channel H Media content API console.
#[derive(Parser, Debug)]
#[command(name = "hmedia-cli", version, about = "Channel H Media content API console")]
pub struct Cli {
    /// Base URL of the content API.
    #[arg(long, global = true, env = "HMEDIA_API_BASE", default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List a collection, optionally one page of it.
    List {
        /// Collection segment, e.g. `news`, `cinema-news`, `banner-ads`.
        #[arg(value_parser = parse_collection)]
        collection: Collection,
        /// 1-based page. Server-paginated where the API supports it.
        #[arg(long)]
        page: Option<usize>,
        /// Page size for collections paged locally.
        #[arg(long, default_value_t = DEFAULT_PER_PAGE)]
        per_page: usize,
    },
    /// Show one article by category token and slug.
    Show {
        /// `news`, `cinema-news`, `meet-person`, `more-news` or `trending-news`.
        #[arg(value_parser = parse_category)]
        category: ArticleCategory,
        /// Article slug.
        slug: String,
        /// Site origin used for the reader URL in the output.
        #[arg(long, default_value = "https://channelhmedia.in")]
        origin: String,
    },
    /// Ads a page would render, in display order.
    Ads {
        /// Placement page label, e.g. `Home` or `News Detail`.
        page: String,
        /// Only this shape; both when omitted.
        #[arg(long, value_enum)]
        shape: Option<ShapeArg>,
    },
    /// Active flash-news headlines, newest first.
    Flash,
    /// Sign in and print the admin token.
    Login {
        /// Admin account name.
        #[arg(long)]
        username: String,
        /// Admin password.
        #[arg(long, env = "HMEDIA_ADMIN_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Revoke an admin token.
    Logout {
        /// Token returned by `login`.
        #[arg(long, env = "HMEDIA_TOKEN", hide_env_values = true)]
        token: String,
    },
    /// Delete one record.
    Delete {
        /// Collection segment.
        #[arg(value_parser = parse_collection)]
        collection: Collection,
        /// Record id.
        id: String,
        /// Token returned by `login`.
        #[arg(long, env = "HMEDIA_TOKEN", hide_env_values = true)]
        token: String,
    },
}

/// Ad shape filter for the `ads` subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShapeArg {
    /// Sidebar tiles.
    Square,
    /// Full-width slides.
    Banner,
}

impl From<ShapeArg> for AdShape {
    fn from(value: ShapeArg) -> Self {
        match value {
            ShapeArg::Square => AdShape::Square,
            ShapeArg::Banner => AdShape::Banner,
        }
    }
}

fn parse_collection(value: &str) -> Result<Collection, String> {
    Collection::from_segment(value).ok_or_else(|| {
        let known: Vec<&str> = Collection::ALL.iter().map(|c| c.segment()).collect();
        format!("unknown collection `{value}` (expected one of: {})", known.join(", "))
    })
}

fn parse_category(value: &str) -> Result<ArticleCategory, String> {
    ArticleCategory::from_token(value).ok_or_else(|| {
        let known: Vec<&str> = ArticleCategory::ALL.iter().map(|c| c.token()).collect();
        format!("unknown category `{value}` (expected one of: {})", known.join(", "))
    })
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn list_parses_collection_and_page() {
        let cli = Cli::try_parse_from(["hmedia-cli", "list", "cinema-news", "--page", "2"])
            .expect("parse list");
        match cli.command {
            Commands::List {
                collection,
                page,
                per_page,
            } => {
                assert_eq!(collection, Collection::CinemaNews);
                assert_eq!(page, Some(2));
                assert_eq!(per_page, DEFAULT_PER_PAGE);
            },
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn unknown_collection_is_rejected() {
        let err = Cli::try_parse_from(["hmedia-cli", "list", "videos"]).expect_err("reject");
        assert!(err.to_string().contains("unknown collection"));
    }

    #[test]
    fn show_rejects_unknown_category() {
        assert!(Cli::try_parse_from(["hmedia-cli", "show", "sports", "x"]).is_err());
        assert!(Cli::try_parse_from(["hmedia-cli", "show", "meet-person", "x"]).is_ok());
    }

    #[test]
    fn api_base_flag_overrides_default() {
        let cli = Cli::try_parse_from(["hmedia-cli", "--api-base", "http://localhost:9000", "flash"])
            .expect("parse flash");
        assert_eq!(cli.api_base, "http://localhost:9000");
    }
}
