use std::sync::Arc;

use eco_core::model::AnswerSnapshot;
use eco_core::time::fixed_now;
use storage::repository::{SnapshotRecord, SnapshotRepository, Storage, StorageError};

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_snapshot_repo};

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_prompts_for_first_survey() {
    let mut harness = setup_view_harness(ViewKind::Home).await;
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("EcoSteps"), "missing heading in {html}");
    assert!(
        html.contains("No survey yet. Start with the quiz."),
        "missing prompt in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_last_survey_date() {
    let mut harness = setup_view_harness(ViewKind::Home).await;
    harness
        .surveys
        .submit(vec![1; 7])
        .await
        .expect("submit survey");

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(
        html.contains("Last survey taken: 2023-11-14"),
        "missing survey date in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_first_question() {
    let mut harness = setup_view_harness(ViewKind::Quiz).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Waste Management"), "missing category in {html}");
    assert!(
        html.contains("How do you handle waste at home?"),
        "missing prompt in {html}"
    );
    assert!(html.contains("Question 1 of 7"), "missing counter in {html}");
    assert!(html.contains("Next"), "missing next button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn game_view_smoke_renders_scoreboard_and_buttons() {
    let mut harness = setup_view_harness(ViewKind::Game).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Recyclable or Not?"), "missing title in {html}");
    assert!(html.contains("/ 8"), "missing scoreboard in {html}");
    assert!(html.contains("Not Recyclable"), "missing buttons in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn tracker_view_smoke_prompts_without_survey() {
    let mut harness = setup_view_harness(ViewKind::Tracker).await;
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(
        html.contains("Please complete the survey first."),
        "missing prompt in {html}"
    );
    assert!(html.contains("Go to Survey"), "missing link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn tracker_view_smoke_renders_day_one_selection() {
    let mut harness = setup_view_harness(ViewKind::Tracker).await;
    let snapshot = AnswerSnapshot::new(vec![4; 7], fixed_now()).expect("snapshot");
    harness
        .storage
        .snapshots
        .save(&snapshot)
        .await
        .expect("save snapshot");

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Day 1"), "missing day card in {html}");
    assert!(
        html.contains("Select the challenges you want to complete today:"),
        "missing selection prompt in {html}"
    );
    assert!(html.contains("Separate your waste"), "missing task in {html}");
    assert!(html.contains("Submit Challenges"), "missing confirm in {html}");
}

struct FailingSnapshotRepo;

#[async_trait::async_trait]
impl SnapshotRepository for FailingSnapshotRepo {
    async fn load(&self) -> Result<Option<SnapshotRecord>, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn save(&self, _snapshot: &AnswerSnapshot) -> Result<(), StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn clear(&self) -> Result<(), StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn tracker_view_smoke_renders_error_state() {
    let mut harness = setup_view_harness_with_snapshot_repo(
        ViewKind::Tracker,
        Storage::in_memory(),
        Arc::new(FailingSnapshotRepo),
    )
    .await;
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(
        html.contains("Something went wrong"),
        "missing error in {html}"
    );
    assert!(html.contains("Retry"), "missing retry in {html}");
}
