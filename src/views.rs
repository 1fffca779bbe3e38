//! Page rendering
//!
//! The application serves exactly one page: the todo form above the list of
//! stored items, newest first.

use crate::http::HttpResponse;
use crate::models::todos::TodoItem;

/// Render the todo page
///
/// `draft` is echoed back into the input so a failed submission never loses
/// the user's text.
pub fn todo_page(todos: &[TodoItem], draft: &str) -> HttpResponse {
    let items: String = todos
        .iter()
        .map(|todo| {
            format!(
                "            <li class=\"todo-item\">{}</li>\n",
                escape(&todo.todo)
            )
        })
        .collect();

    let html = format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Todo List</title>
</head>
<body>
    <div class="app-container">
        <h1>Todo List</h1>

        <form method="post" action="/todos" class="todo-form">
            <input
                type="text"
                name="todo"
                value="{draft}"
                placeholder="Add a new todo"
                class="todo-input"
            >
            <button type="submit" class="add-button">Add</button>
        </form>

        <ul class="todo-list">
{items}        </ul>
    </div>
</body>
</html>"#,
        draft = escape(draft),
        items = items,
    );

    HttpResponse::html(html)
}

// Escape text for an HTML body or attribute value
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i32, todo: &str) -> TodoItem {
        TodoItem {
            id,
            todo: todo.to_string(),
        }
    }

    #[test]
    fn test_renders_items_in_given_order() {
        let response = todo_page(&[item(2, "B"), item(1, "A")], "");
        let body = response.body();

        let b = body.find("<li class=\"todo-item\">B</li>").unwrap();
        let a = body.find("<li class=\"todo-item\">A</li>").unwrap();
        assert!(b < a);
    }

    #[test]
    fn test_renders_placeholder_and_draft() {
        let response = todo_page(&[], "Buy milk");
        let body = response.body();

        assert!(body.contains("placeholder=\"Add a new todo\""));
        assert!(body.contains("value=\"Buy milk\""));
    }

    #[test]
    fn test_escapes_markup_in_items_and_draft() {
        let response = todo_page(&[item(1, "<script>alert(1)</script>")], "\"><img>");
        let body = response.body();

        assert!(!body.contains("<script>"));
        assert!(body.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(body.contains("value=\"&quot;&gt;&lt;img&gt;\""));
    }
}
