//! In-memory integration tests for query use cases.

use std::sync::Arc;

use super::helpers::{create_all, id_of, repository, store_over};
use rstest::rstest;
use tallyo::todo::{
    domain::{Priority, TodoFilter, TodoSpecification, TodoStats},
    ports::TodoRepository,
    services::{TodoQueries, TodoQueryService, UpdateTodoRequest},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn queries_see_store_mutations(repository: Arc<dyn TodoRepository>) -> eyre::Result<()> {
    let store = store_over(&repository);
    let created = create_all(&store, &["Buy milk", "Walk dog", "Feed cat"]).await?;
    let done = created.first().ok_or_else(|| eyre::eyre!("nothing created"))?;
    store.toggle(id_of(done)?).await?;
    let queries = TodoQueryService::new(Arc::clone(&repository));

    let stats = queries.get_todo_stats().await?;
    eyre::ensure!(
        stats
            == TodoStats {
                total: 3,
                active: 2,
                completed: 1
            },
        "unexpected stats: {stats:?}"
    );
    eyre::ensure!(stats == store.stats(), "store and query stats disagree");

    let completed = queries.get_filtered_todos(TodoFilter::Completed).await?;
    eyre::ensure!(completed.len() == 1, "expected one completed todo");
    eyre::ensure!(
        queries.get_active_todos().await?.len() == 2,
        "expected two active todos"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn specification_queries_combine_predicates(
    repository: Arc<dyn TodoRepository>,
) -> eyre::Result<()> {
    let store = store_over(&repository);
    let created = create_all(&store, &["Buy milk", "Buy bread", "Walk dog"]).await?;
    for todo in created.iter().skip(1) {
        store
            .update(id_of(todo)?, UpdateTodoRequest::new().with_priority("high"))
            .await?;
    }
    let queries = TodoQueryService::new(Arc::clone(&repository));

    let found = queries
        .find_todos(
            &TodoSpecification::TitleContains("BUY".to_owned())
                .and(TodoSpecification::Priority(Priority::High)),
        )
        .await?;

    let titles: Vec<String> = found.iter().map(|todo| todo.title().to_string()).collect();
    eyre::ensure!(titles == ["Buy bread"], "unexpected matches: {titles:?}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn lookup_by_text_identifier(repository: Arc<dyn TodoRepository>) -> eyre::Result<()> {
    let store = store_over(&repository);
    let created = create_all(&store, &["Buy milk"]).await?;
    let todo = created.first().ok_or_else(|| eyre::eyre!("nothing created"))?;
    let queries = TodoQueryService::new(Arc::clone(&repository));

    let found = queries
        .get_todo_by_id(&id_of(todo)?.to_string())
        .await?;

    eyre::ensure!(found.as_ref() == Some(todo), "lookup returned {found:?}");
    eyre::ensure!(
        queries.get_todo_by_id("not-a-uuid").await.is_err(),
        "malformed identifier accepted"
    );
    Ok(())
}
