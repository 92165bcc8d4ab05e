use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{GameView, HomeView, QuizView, TrackerView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/quiz", QuizView)] Quiz {},
        #[route("/game", GameView)] Game {},
        #[route("/tracker", TrackerView)] Tracker {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { "EcoSteps" }
            ul {
                li { Link { to: Route::Home {}, "Home" } }
                li { Link { to: Route::Quiz {}, "Impact Quiz" } }
                li { Link { to: Route::Game {}, "Recycling Game" } }
                li { Link { to: Route::Tracker {}, "Tracker" } }
            }
        }
    }
}
