use dioxus::prelude::*;
use dioxus_router::Link;

use eco_core::model::{Day, DayError, DayPhase};
use services::{TrackerBoard, TrackerError};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{impact_line, streak_line};

/// Loads the snapshot and hands the board to the stateful inner view.
///
/// `None` means no usable survey exists; that is a prompt, not an error.
#[component]
pub fn TrackerView() -> Element {
    let ctx = use_context::<AppContext>();
    let tracker = ctx.tracker();

    let mut resource = use_resource(move || {
        let tracker = tracker.clone();
        async move {
            match tracker.initialize().await {
                Ok(board) => Ok(Some(board)),
                Err(TrackerError::SurveyMissing) => Ok(None),
                Err(_) => Err(ViewError::Unknown),
            }
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page",
            h2 { "Sustainability Tracker" }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(Some(board)) => rsx! {
                    TrackerBoardView { board }
                },
                ViewState::Ready(None) => rsx! {
                    p { "Please complete the survey first." }
                    Link { to: Route::Quiz {}, "Go to Survey" }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                    button { onclick: move |_| resource.restart(), "Retry" }
                },
            }
        }
    }
}

/// Owns the board for the sitting; mounted once per successful load.
#[component]
fn TrackerBoardView(board: TrackerBoard) -> Element {
    let mut board = use_signal(|| board);
    let mut notice = use_signal(|| None::<&'static str>);
    let mut show_impact = use_signal(|| false);

    let progress = board.read().progress();
    let streak = board.read().streak();
    let trees = board.read().trees_planted();
    let days: Vec<Day> = board.read().days().to_vec();
    let day_count = days.len();

    let on_confirm = move |_| match board.write().confirm_current() {
        Ok(()) => notice.set(None),
        Err(TrackerError::Day(DayError::NoTasksSelected)) => {
            notice.set(Some("Please select at least one challenge for today."));
        }
        Err(_) => notice.set(Some("Something went wrong. Please try again.")),
    };

    rsx! {
        div { class: "stats",
            div {
                p { class: "value", "{progress}%" }
                p { "Tasks Completed" }
            }
            div {
                p { class: "value", "{streak}" }
                p { "Streak" }
            }
            Link { to: Route::Quiz {}, "Retake Survey" }
        }

        div { class: "card",
            h3 { "Learn More About Your Impact" }
            p { "Discover how your daily habits affect the environment." }
            button {
                onclick: move |_| {
                    let shown = show_impact();
                    show_impact.set(!shown);
                },
                "Learn More"
            }
            if show_impact() {
                p { class: "impact", "{impact_line(trees)}" }
            }
        }

        div { class: "day-list",
            for day in days {
                DayCard {
                    key: "{day.number()}",
                    day: day.clone(),
                    is_current: day.number() as usize == day_count,
                    board,
                    notice,
                    on_confirm,
                }
            }
        }

        div { class: "wizard-nav",
            button { onclick: move |_| board.write().add_day(), "New Day" }
        }

        p { "Overall Completion: {progress}%" }
        p { "{streak_line(streak)}" }
    }
}

#[component]
fn DayCard(
    day: Day,
    is_current: bool,
    board: Signal<TrackerBoard>,
    notice: Signal<Option<&'static str>>,
    on_confirm: EventHandler<MouseEvent>,
) -> Element {
    let mut board = board;
    let selecting = is_current && day.phase() == DayPhase::Selecting;

    rsx! {
        div { class: "card",
            h3 { "Day {day.number()}" }
            if selecting {
                p { "Select the challenges you want to complete today:" }
            }
            ul {
                for task in day.tasks().iter().cloned() {
                    li {
                        label { class: "option",
                            input {
                                r#type: "checkbox",
                                checked: if selecting { task.is_selected() } else { task.is_done() },
                                disabled: !is_current,
                                onchange: {
                                    let id = task.id();
                                    move |_| {
                                        // The id belongs to the latest day, so
                                        // these cannot fail while enabled.
                                        let result = if selecting {
                                            board.write().toggle_selected(id)
                                        } else {
                                            board.write().toggle_done(id)
                                        };
                                        let _ = result;
                                    }
                                },
                            }
                            span {
                                class: if !selecting && task.is_done() { "done" } else { "" },
                                "{task.description()}"
                            }
                        }
                    }
                }
            }
            if selecting {
                if let Some(message) = notice() {
                    p { class: "notice", "{message}" }
                }
                button { onclick: move |event| on_confirm.call(event), "Submit Challenges" }
            }
        }
    }
}
