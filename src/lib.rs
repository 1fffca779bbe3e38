pub mod actions;
pub mod bootstrap;
pub mod config;
pub mod controllers;
pub mod database;
pub mod error;
pub mod http;
pub mod migrations;
pub mod models;
pub mod routing;
pub mod server;
pub mod todo_list;
pub mod views;

pub use database::DbConnection;
pub use error::AppError;
pub use http::{HttpResponse, Redirect, Request, Response};
pub use routing::Router;
pub use server::Server;
pub use todo_list::{SubmitOutcome, TodoList};
