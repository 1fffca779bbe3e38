//! Todo actions
//!
//! The only two statements this application ever issues:
//!
//! - `SELECT id, todo FROM todos_table ORDER BY date DESC`
//! - `INSERT INTO todos_table (todo) VALUES ($1)`

use sea_orm::{EntityTrait, QueryOrder, QuerySelect, Set};

use crate::database::DbConnection;
use crate::error::AppError;
use crate::models::todos;
use crate::models::todos::TodoItem;

/// Fetch all todos, newest first
pub struct ListTodosAction {
    db: DbConnection,
}

impl ListTodosAction {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    pub async fn execute(&self) -> Result<Vec<TodoItem>, AppError> {
        let rows = todos::Entity::find()
            .select_only()
            .column(todos::Column::Id)
            .column(todos::Column::Todo)
            .order_by_desc(todos::Column::Date)
            .into_model::<TodoItem>()
            .all(self.db.inner())
            .await?;

        Ok(rows)
    }
}

/// Insert a single todo
///
/// `id` and `date` are left unset so the database assigns them.
pub struct CreateTodoAction {
    db: DbConnection,
}

impl CreateTodoAction {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    pub async fn execute(&self, text: &str) -> Result<(), AppError> {
        let new_todo = todos::ActiveModel {
            todo: Set(text.to_owned()),
            ..Default::default()
        };

        todos::Entity::insert(new_todo).exec(self.db.inner()).await?;
        Ok(())
    }
}
