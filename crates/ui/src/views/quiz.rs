use dioxus::prelude::*;
use dioxus_router::Link;

use services::QuizSession;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::ViewError;
use crate::vm::map_quiz_result;

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let surveys = ctx.surveys();

    let mut session = use_signal(QuizSession::new);
    let mut submitted = use_signal(|| false);
    let mut submit_error = use_signal(|| None::<ViewError>);

    let on_submit = move |_| {
        let surveys = surveys.clone();
        let answers = session.read().answers().to_vec();
        spawn(async move {
            match surveys.submit(answers).await {
                Ok(_) => {
                    submit_error.set(None);
                    submitted.set(true);
                }
                Err(_) => submit_error.set(Some(ViewError::Unknown)),
            }
        });
    };

    if submitted() {
        return rsx! { QuizResults { session, submitted } };
    }

    let current = session.read().current_question();
    let index = session.read().current_index();
    let total = session.read().questions().len();
    let selected = session.read().selected_value();
    let is_first = session.read().is_first();
    let is_last = session.read().is_last();

    rsx! {
        div { class: "page",
            h2 { "Environmental Impact Quiz" }
            p {
                "Answer the questions below to see personalized insights on how "
                "your choices impact the environment."
            }

            div { class: "card",
                h3 { "{current.category.label()}" }
                p { "Question {index + 1} of {total}" }
                p { "{current.prompt}" }
                for option in current.options {
                    label { class: "option",
                        input {
                            r#type: "radio",
                            name: "question-{index}",
                            checked: selected == Some(option.value),
                            onchange: {
                                let value = option.value;
                                move |_| {
                                    // Options come straight from the catalog,
                                    // so the value is always offered.
                                    let _ = session.write().select(value);
                                }
                            },
                        }
                        span { "{option.label}" }
                    }
                }
            }

            if let Some(err) = submit_error() {
                p { class: "notice", "{err.message()}" }
            }

            div { class: "wizard-nav",
                button {
                    class: "secondary",
                    disabled: is_first,
                    onclick: move |_| session.write().previous(),
                    "Previous"
                }
                if is_last {
                    button { onclick: on_submit, "Submit" }
                } else {
                    button { onclick: move |_| session.write().next(), "Next" }
                }
            }
        }
    }
}

#[component]
fn QuizResults(session: Signal<QuizSession>, submitted: Signal<bool>) -> Element {
    let result = map_quiz_result(&session.read());

    let mut submitted = submitted;
    let mut session = session;
    let retake = move |_| {
        session.set(QuizSession::new());
        submitted.set(false);
    };

    rsx! {
        div { class: "page",
            h2 { "Your Overall Results" }
            p { "{result.score_line}" }

            h3 { "Personalized Insights" }
            ul { class: "tips",
                for line in result.tips {
                    li {
                        p { strong { "{line.prompt}" } }
                        p { class: "tip", "{line.tip}" }
                    }
                }
            }

            div { class: "wizard-nav",
                Link { to: Route::Tracker {}, "Go to Tracker" }
                button { class: "secondary", onclick: retake, "Retake Quiz" }
            }
        }
    }
}
