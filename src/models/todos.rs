//! Todos model
//!
//! Maps the `todos_table` table. `id` and `date` are assigned by the database
//! on insert (auto-increment and `CURRENT_TIMESTAMP` respectively), so inserts
//! only ever set the `todo` column.

use sea_orm::entity::prelude::*;
use sea_orm::FromQueryResult;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "todos_table")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub todo: String,
    pub date: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// The row shape returned to the view: `SELECT id, todo` only
///
/// `date` exists solely for ordering and is never rendered.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct TodoItem {
    pub id: i32,
    pub todo: String,
}
