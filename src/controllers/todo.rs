//! Todo page controllers

use serde::Deserialize;

use crate::database::DbConnection;
use crate::http::{Redirect, Request, Response, ResponseExt};
use crate::todo_list::TodoList;
use crate::views;

#[derive(Deserialize)]
pub struct TodoForm {
    pub todo: String,
}

/// GET / - render the todo page
///
/// A failed load is logged and the page renders with an empty list; the
/// application stays up either way.
pub async fn index(_req: Request, db: DbConnection) -> Response {
    let mut list = TodoList::new(db);

    if let Err(e) = list.load().await {
        eprintln!("Failed to load todos: {}", e);
    }

    views::todo_page(list.todos(), list.draft()).ok()
}

/// POST /todos - submit the form
///
/// Saved and empty submissions both redirect back to the page; the fresh GET
/// renders the refreshed list with an empty input. On a database failure the
/// page re-renders with the draft preserved and the previous snapshot.
pub async fn store(req: Request, db: DbConnection) -> Response {
    let form: TodoForm = req.form().await?;

    let mut list = TodoList::new(db);
    if let Err(e) = list.load().await {
        eprintln!("Failed to load todos: {}", e);
    }
    list.set_draft(form.todo);

    match list.submit().await {
        Ok(_) => Redirect::to("/").into(),
        Err(e) => {
            eprintln!("Failed to save todo: {}", e);
            views::todo_page(list.todos(), list.draft()).ok().status(500)
        }
    }
}
