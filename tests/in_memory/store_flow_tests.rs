//! In-memory integration tests for store actions.

use std::sync::Arc;

use super::helpers::{create_all, id_of, repository, store_over};
use rstest::rstest;
use tallyo::todo::{
    domain::{Priority, TodoFilter},
    ports::TodoRepository,
    services::{CreateTodoRequest, UpdateTodoRequest},
    store::StoreStatus,
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_todos_are_persisted_newest_first(
    repository: Arc<dyn TodoRepository>,
) -> eyre::Result<()> {
    let store = store_over(&repository);

    let created = create_all(&store, &["Buy milk", "Walk dog"]).await?;

    let titles: Vec<String> = store
        .todos()
        .iter()
        .map(|todo| todo.title().to_string())
        .collect();
    eyre::ensure!(titles == ["Walk dog", "Buy milk"], "unexpected order: {titles:?}");
    for todo in &created {
        let stored = repository.get_by_id(id_of(todo)?).await?;
        eyre::ensure!(stored.as_ref() == Some(todo), "store and repository disagree");
    }
    eyre::ensure!(store.status() == StoreStatus::Succeeded, "status not settled");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn fresh_store_loads_what_another_store_wrote(
    repository: Arc<dyn TodoRepository>,
) -> eyre::Result<()> {
    let writer = store_over(&repository);
    let created = create_all(&writer, &["Buy milk", "Walk dog", "Feed cat"]).await?;

    let reader = store_over(&repository);
    reader.load().await;

    eyre::ensure!(reader.status() == StoreStatus::Succeeded, "load failed");
    eyre::ensure!(reader.todos().len() == created.len(), "missing todos");
    for todo in &created {
        eyre::ensure!(reader.todos().contains(todo), "'{}' not loaded", todo.title());
    }
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_toggle_and_delete_round_trip(
    repository: Arc<dyn TodoRepository>,
) -> eyre::Result<()> {
    let store = store_over(&repository);
    let created = create_all(&store, &["Buy milk"]).await?;
    let id = id_of(created.first().ok_or_else(|| eyre::eyre!("nothing created"))?)?;

    let updated = store
        .update(
            id,
            UpdateTodoRequest::new()
                .with_title("Buy oat milk")
                .with_priority("high"),
        )
        .await?;
    eyre::ensure!(updated.title().as_str() == "Buy oat milk", "title not updated");
    eyre::ensure!(updated.priority() == Priority::High, "priority not updated");

    let toggled = store.toggle(id).await?;
    eyre::ensure!(toggled.is_completed(), "toggle did not complete the todo");
    store.set_filter(TodoFilter::Completed);
    eyre::ensure!(store.filtered() == vec![toggled], "completed view is stale");

    store.delete(id).await?;
    eyre::ensure!(store.todos().is_empty(), "todo still shown");
    eyre::ensure!(repository.get_by_id(id).await?.is_none(), "todo still stored");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rejected_create_leaves_store_and_repository_empty(
    repository: Arc<dyn TodoRepository>,
) -> eyre::Result<()> {
    let store = store_over(&repository);

    let result = store.create(CreateTodoRequest::new(" x ")).await;

    eyre::ensure!(result.is_err(), "one-character title was accepted");
    eyre::ensure!(store.todos().is_empty(), "provisional todo left behind");
    eyre::ensure!(repository.get_all().await?.is_empty(), "todo persisted");
    eyre::ensure!(
        store.error().as_deref() == Some("todo title must be at least 2 characters, got 1"),
        "unexpected error: {:?}",
        store.error()
    );
    store.clear_error();
    eyre::ensure!(store.is_idle(), "clear_error did not return to idle");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_twice_restores_the_collection_and_reports_missing(
    repository: Arc<dyn TodoRepository>,
) -> eyre::Result<()> {
    let store = store_over(&repository);
    let created = create_all(&store, &["Buy milk", "Walk dog"]).await?;
    let first = created.first().ok_or_else(|| eyre::eyre!("nothing created"))?;
    let id = id_of(first)?;

    let other = store_over(&repository);
    other.delete(id).await?;
    let before = store.todos();
    let result = store.delete(id).await;

    eyre::ensure!(result.is_err(), "second delete succeeded");
    eyre::ensure!(store.todos() == before, "collection not restored");
    eyre::ensure!(
        store.error() == Some(format!("todo not found: {id}")),
        "unexpected error: {:?}",
        store.error()
    );
    Ok(())
}
