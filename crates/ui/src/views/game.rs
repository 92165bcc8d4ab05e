use dioxus::prelude::*;

use services::{GameSession, GuessOutcome};

use crate::vm::{final_game_line, map_guess_feedback};

#[component]
pub fn GameView() -> Element {
    let mut session = use_signal(GameSession::shuffled);
    let mut last_outcome = use_signal(|| None::<GuessOutcome>);

    let mut on_guess = move |recyclable: bool| {
        if let Ok(outcome) = session.write().guess(recyclable) {
            last_outcome.set(Some(outcome));
        }
    };

    let score = session.read().score();
    let total = session.read().total();
    let complete = session.read().is_complete();
    let current = session.read().current_item().copied();

    rsx! {
        div { class: "page",
            h2 { "Recyclable or Not?" }

            div { class: "scoreboard",
                p { "Score: " strong { "{score}" } " / {total}" }
            }

            if complete {
                div { class: "card",
                    h3 { "Game over" }
                    p { "{final_game_line(score, total)}" }
                    button {
                        onclick: move |_| {
                            session.set(GameSession::shuffled());
                            last_outcome.set(None);
                        },
                        "Play Again"
                    }
                }
            } else if let Some(item) = current {
                div { class: "card",
                    h3 { "{item.name}" }
                    div { class: "wizard-nav",
                        button { onclick: move |_| on_guess(true), "Recyclable" }
                        button {
                            class: "secondary",
                            onclick: move |_| on_guess(false),
                            "Not Recyclable"
                        }
                    }
                }
            }

            if let Some(outcome) = last_outcome() {
                {
                    let feedback = map_guess_feedback(&outcome);
                    rsx! {
                        div { class: "feedback",
                            p { strong { "{feedback.verdict}" } " {outcome.item.name}" }
                            p { class: "info", "{feedback.info}" }
                        }
                    }
                }
            }
        }
    }
}
