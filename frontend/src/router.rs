use hmedia_shared::{endpoints::Collection, ArticleCategory};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    auth::AdminGuard,
    components::{
        admin_sidebar::AdminSidebar, flash_news::FlashNewsTicker, footer::Footer, header::Header,
    },
    hooks::use_scroll_to_top,
    pages,
};

#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/latestnews")]
    LatestNews,
    #[at("/cinemanews")]
    CinemaNews,
    #[at("/meettheperson")]
    MeetThePerson,
    #[at("/teaserandpromo")]
    Teasers,
    #[at("/more")]
    MoreNews,

    #[at("/hmedianews/login")]
    AdminLogin,
    #[at("/hmedianews")]
    AdminDashboard,
    #[at("/hmedianews/homebanner")]
    AdminBanners,
    #[at("/hmedianews/flashnews")]
    AdminFlashNews,
    #[at("/hmedianews/trendingnews")]
    AdminTrending,
    #[at("/hmedianews/latestnews")]
    AdminLatestNews,
    #[at("/hmedianews/cinemanews")]
    AdminCinemaNews,
    #[at("/hmedianews/meettheperson")]
    AdminMeetThePerson,
    #[at("/hmedianews/teaserandpromo")]
    AdminTeasers,
    #[at("/hmedianews/more")]
    AdminMoreNews,
    #[at("/hmedianews/advertisement")]
    AdminAdvertisements,

    #[at("/:category/:slug")]
    Article { category: String, slug: String },

    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Reader route of an article.
    pub fn article(category: ArticleCategory, slug: &str) -> Self {
        Route::Article {
            category: category.token().to_string(),
            slug: slug.to_string(),
        }
    }

    /// Reader listing page of a category, if it has one.
    pub fn listing(category: ArticleCategory) -> Option<Self> {
        category.listing_route().and_then(Route::recognize)
    }
}

#[derive(Properties, PartialEq)]
struct LayoutProps {
    children: Html,
}

#[function_component(PublicLayout)]
fn public_layout(props: &LayoutProps) -> Html {
    use_scroll_to_top();
    html! {
        <div class="flex min-h-screen flex-col bg-white text-gray-900">
            <Header />
            <FlashNewsTicker />
            <div class="flex-1">
                { props.children.clone() }
            </div>
            <Footer />
        </div>
    }
}

#[function_component(AdminLayout)]
fn admin_layout(props: &LayoutProps) -> Html {
    use_scroll_to_top();
    html! {
        <AdminGuard>
            <div class="flex min-h-screen bg-gray-900 text-white">
                <AdminSidebar />
                <main class="flex-1 overflow-x-hidden p-4 md:p-8">
                    { props.children.clone() }
                </main>
            </div>
        </AdminGuard>
    }
}

fn public(page: Html) -> Html {
    html! { <PublicLayout>{ page }</PublicLayout> }
}

fn admin(page: Html) -> Html {
    html! { <AdminLayout>{ page }</AdminLayout> }
}

fn admin_articles(collection: Collection) -> Html {
    // Keyed so switching sections drops any open form.
    let key = collection.segment();
    admin(html! { <pages::admin::articles::AdminArticlesPage key={key} {collection} /> })
}

fn switch(route: Route) -> Html {
    use pages::category_listing::CategoryListingPage;

    match route {
        Route::Home => public(html! { <pages::home::HomePage /> }),
        Route::LatestNews => public(html! { <pages::latest_news::LatestNewsPage /> }),
        Route::CinemaNews => {
            public(html! { <CategoryListingPage category={ArticleCategory::CinemaNews} /> })
        },
        Route::MeetThePerson => {
            public(html! { <CategoryListingPage category={ArticleCategory::MeetPerson} /> })
        },
        Route::MoreNews => {
            public(html! { <CategoryListingPage category={ArticleCategory::MoreNews} /> })
        },
        Route::Teasers => public(html! { <pages::teasers::TeasersPage /> }),
        Route::Article {
            category,
            slug,
        } => match ArticleCategory::from_token(&category) {
            Some(category) => public(html! {
                <pages::article_detail::ArticleDetailPage {category} {slug} />
            }),
            None => html! { <Redirect<Route> to={Route::NotFound} /> },
        },

        Route::AdminLogin => html! { <pages::admin::login::LoginPage /> },
        Route::AdminDashboard => admin(html! { <pages::admin::dashboard::DashboardPage /> }),
        Route::AdminBanners => admin(html! { <pages::admin::banners::AdminBannersPage /> }),
        Route::AdminFlashNews => admin(html! { <pages::admin::flash_news::AdminFlashNewsPage /> }),
        Route::AdminTrending => admin(html! { <pages::admin::trending::AdminTrendingPage /> }),
        Route::AdminLatestNews => admin_articles(Collection::News),
        Route::AdminCinemaNews => admin_articles(Collection::CinemaNews),
        Route::AdminMeetThePerson => admin_articles(Collection::MeetPerson),
        Route::AdminMoreNews => admin_articles(Collection::MoreNews),
        Route::AdminTeasers => admin(html! { <pages::admin::teasers::AdminTeasersPage /> }),
        Route::AdminAdvertisements => {
            admin(html! { <pages::admin::advertisements::AdminAdvertisementsPage /> })
        },

        Route::NotFound => public(html! { <pages::not_found::NotFoundPage /> }),
    }
}

#[function_component(AppRouter)]
pub fn app_router() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
