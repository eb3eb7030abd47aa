use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::core::config::SiteConfig;
use ui::core::context::use_site_root;
use ui::views::{BlogList, BlogPost, Home, NotFound};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/blog")]
    BlogList {},
    #[route("/blog/:slug")]
    BlogPost { slug: String },
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

fn nav_home(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Home {},
        "{label}"
    })
}
fn nav_blog(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::BlogList {},
        "{label}"
    })
}
fn nav_post(slug: &str, label: &str) -> Element {
    rsx!(Link {
        to: Route::BlogPost {
            slug: slug.to_string()
        },
        "{label}"
    })
}

fn main() {
    dioxus::logger::init(Level::INFO).ok();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let locale_state = use_site_root(SiteConfig::load());
    register_nav(NavBuilder {
        home: nav_home,
        blog: nav_blog,
        post: nav_post,
    });

    // Reading the state here re-renders the shell (dir/lang) on every language change.
    let locale = locale_state.read().active();
    let dir = locale.direction().as_attr();

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::MAIN_CSS }

        div { class: "app", dir, lang: locale.code(),
            Router::<Route> {}
        }
    }
}

/// A web-specific Router around the shared `AppNavbar` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}
