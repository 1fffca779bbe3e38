use todo_web::controllers;
use todo_web::{bootstrap, Router, Server};

#[tokio::main]
async fn main() {
    let db = bootstrap::boot()
        .await
        .expect("Failed to connect to database");

    let router = {
        let index_db = db.clone();
        let store_db = db;
        Router::new()
            .get("/", move |req| controllers::todo::index(req, index_db.clone()))
            .post("/todos", move |req| {
                controllers::todo::store(req, store_db.clone())
            })
    };

    Server::from_config(router)
        .run()
        .await
        .expect("Failed to start server");
}
