use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::format_datetime;

#[derive(Clone, Debug, PartialEq)]
struct HomeData {
    last_survey: Option<String>,
}

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let surveys = ctx.surveys();

    let mut resource = use_resource(move || {
        let surveys = surveys.clone();
        async move {
            let snapshot = surveys.latest().await.map_err(|_| ViewError::Unknown)?;
            Ok(HomeData {
                last_survey: snapshot.map(|snapshot| format_datetime(snapshot.taken_at())),
            })
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page",
            h2 { "EcoSteps" }
            p { "Small daily steps toward a lighter footprint." }

            ul { class: "home-nav",
                li {
                    Link { to: Route::Quiz {}, "Take the impact quiz" }
                    p { "Seven quick questions about your habits, with personalized tips." }
                }
                li {
                    Link { to: Route::Game {}, "Play the recycling game" }
                    p { "Recyclable or not? Guess your way through the item catalog." }
                }
                li {
                    Link { to: Route::Tracker {}, "Open the tracker" }
                    p { "Daily challenges generated from your quiz answers." }
                }
            }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(data) => rsx! {
                    if let Some(taken_at) = data.last_survey {
                        p { class: "home-survey", "Last survey taken: {taken_at}" }
                    } else {
                        p { class: "home-survey", "No survey yet. Start with the quiz." }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                    button { onclick: move |_| resource.restart(), "Retry" }
                },
            }
        }
    }
}
