use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use eco_core::time::fixed_clock;
use services::{SurveyService, TrackerService};
use storage::repository::{SnapshotRepository, Storage};

use crate::context::{UiApp, build_app_context};
use crate::views::{GameView, HomeView, QuizView, TrackerView};

struct TestApp {
    surveys: Arc<SurveyService>,
    tracker: Arc<TrackerService>,
}

impl UiApp for TestApp {
    fn survey_service(&self) -> Arc<SurveyService> {
        Arc::clone(&self.surveys)
    }

    fn tracker_service(&self) -> Arc<TrackerService> {
        Arc::clone(&self.tracker)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Quiz,
    Game,
    Tracker,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Quiz => rsx! { QuizView {} },
        ViewKind::Game => rsx! { GameView {} },
        ViewKind::Tracker => rsx! { TrackerView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub storage: Storage,
    pub surveys: Arc<SurveyService>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub async fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let storage = Storage::in_memory();
    let snapshots = Arc::clone(&storage.snapshots);
    setup_view_harness_with_snapshot_repo(view, storage, snapshots).await
}

pub async fn setup_view_harness_with_snapshot_repo(
    view: ViewKind,
    storage: Storage,
    snapshots: Arc<dyn SnapshotRepository>,
) -> ViewHarness {
    let surveys = Arc::new(SurveyService::new(fixed_clock(), Arc::clone(&snapshots)));
    let tracker = Arc::new(TrackerService::new(snapshots));

    let app = Arc::new(TestApp {
        surveys: Arc::clone(&surveys),
        tracker,
    });

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });

    ViewHarness {
        dom,
        storage,
        surveys,
    }
}
