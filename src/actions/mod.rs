//! Application actions

pub mod todo_action;

pub use todo_action::{CreateTodoAction, ListTodosAction};
