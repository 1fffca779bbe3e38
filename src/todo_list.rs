//! Todo list view state
//!
//! [`TodoList`] holds everything the page renders: the draft text currently in
//! the input and the last loaded snapshot of stored todos. All database access
//! goes through it, and the snapshot is always replaced wholesale by a fresh
//! select, never patched incrementally.

use crate::actions::{CreateTodoAction, ListTodosAction};
use crate::database::DbConnection;
use crate::error::AppError;
use crate::models::todos::TodoItem;

/// Result of a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The todo was inserted and the snapshot refreshed
    Saved,
    /// The trimmed draft was empty; nothing was written
    Empty,
    /// A submit was already in flight; this one was ignored
    InFlight,
}

/// View state for the todo page
pub struct TodoList {
    list: ListTodosAction,
    create: CreateTodoAction,
    draft: String,
    todos: Vec<TodoItem>,
    submitting: bool,
}

impl TodoList {
    pub fn new(db: DbConnection) -> Self {
        Self {
            list: ListTodosAction::new(db.clone()),
            create: CreateTodoAction::new(db),
            draft: String::new(),
            todos: Vec::new(),
            submitting: false,
        }
    }

    /// Load the stored todos, newest first, replacing the current snapshot
    ///
    /// On failure the snapshot is left as it was (initially empty).
    pub async fn load(&mut self) -> Result<(), AppError> {
        self.todos = self.list.execute().await?;
        Ok(())
    }

    /// Store the raw input text verbatim as the current draft
    pub fn set_draft(&mut self, raw: impl Into<String>) {
        self.draft = raw.into();
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn todos(&self) -> &[TodoItem] {
        &self.todos
    }

    /// Submit the current draft
    ///
    /// Trims the draft; an empty result is a silent no-op. Otherwise inserts
    /// the trimmed text, refreshes the snapshot with a fresh select, and only
    /// then clears the draft. If the insert or the refresh fails, the draft
    /// and the snapshot are left untouched so the user can retry.
    pub async fn submit(&mut self) -> Result<SubmitOutcome, AppError> {
        if self.submitting {
            return Ok(SubmitOutcome::InFlight);
        }

        let trimmed = self.draft.trim().to_owned();
        if trimmed.is_empty() {
            return Ok(SubmitOutcome::Empty);
        }

        self.submitting = true;
        let result = self.persist(&trimmed).await;
        self.submitting = false;

        result?;
        self.draft.clear();
        Ok(SubmitOutcome::Saved)
    }

    /// Insert, then refresh: the insert must complete before the select is
    /// issued. The snapshot is only replaced once both have succeeded.
    async fn persist(&mut self, trimmed: &str) -> Result<(), AppError> {
        self.create.execute(trimmed).await?;
        self.todos = self.list.execute().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseConfig;
    use crate::migrations::Migrator;
    use sea_orm_migration::MigratorTrait;

    // A single pooled connection so the in-memory database is shared.
    async fn connect_memory() -> DbConnection {
        let config = DatabaseConfig::builder()
            .url("sqlite::memory:")
            .max_connections(1)
            .build();
        DbConnection::connect(&config).await.unwrap()
    }

    async fn migrated_db() -> DbConnection {
        let db = connect_memory().await;
        Migrator::up(db.inner(), None).await.unwrap();
        db
    }

    fn texts(list: &TodoList) -> Vec<&str> {
        list.todos().iter().map(|t| t.todo.as_str()).collect()
    }

    #[tokio::test]
    async fn test_load_empty_table() {
        let mut list = TodoList::new(migrated_db().await);
        list.load().await.unwrap();
        assert!(list.todos().is_empty());
    }

    #[tokio::test]
    async fn test_submit_stores_trimmed_text_and_clears_draft() {
        let mut list = TodoList::new(migrated_db().await);
        list.load().await.unwrap();

        list.set_draft("  Buy milk  ");
        let outcome = list.submit().await.unwrap();

        assert_eq!(outcome, SubmitOutcome::Saved);
        assert_eq!(list.draft(), "");
        assert_eq!(texts(&list), vec!["Buy milk"]);
    }

    #[tokio::test]
    async fn test_whitespace_submit_is_a_silent_noop() {
        let mut list = TodoList::new(migrated_db().await);
        list.load().await.unwrap();
        list.set_draft("   ");

        // Twice in a row: zero writes, zero list changes both times.
        for _ in 0..2 {
            let outcome = list.submit().await.unwrap();
            assert_eq!(outcome, SubmitOutcome::Empty);
            assert!(list.todos().is_empty());
            assert_eq!(list.draft(), "   ");
        }
    }

    #[tokio::test]
    async fn test_submit_ignored_while_in_flight() {
        let db = migrated_db().await;
        let mut list = TodoList::new(db.clone());
        list.set_draft("double click");
        list.submitting = true;

        let outcome = list.submit().await.unwrap();
        assert_eq!(outcome, SubmitOutcome::InFlight);

        let stored = ListTodosAction::new(db).execute().await.unwrap();
        assert!(stored.is_empty());
        assert_eq!(list.draft(), "double click");
    }

    #[tokio::test]
    async fn test_failed_submit_preserves_draft_and_snapshot() {
        // No migration has run, so the insert fails with a missing table.
        let mut list = TodoList::new(connect_memory().await);
        assert!(list.load().await.is_err());
        assert!(list.todos().is_empty());

        list.set_draft("Buy milk");
        let result = list.submit().await;

        assert!(result.is_err());
        assert_eq!(list.draft(), "Buy milk");
        assert!(list.todos().is_empty());

        // The failure resets the in-flight flag, so a retry is possible.
        assert!(!list.submitting);
    }
}
