//! Migration runner binary
//!
//! Usage:
//!   cargo run --bin migrate           - Run all pending migrations
//!   cargo run --bin migrate rollback  - Rollback the last migration
//!   cargo run --bin migrate status    - Show migration status
//!   cargo run --bin migrate fresh     - Drop all tables and re-run migrations

use sea_orm_migration::prelude::*;
use std::env;

use todo_web::database::normalize_sqlite_url;
use todo_web::migrations::Migrator;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let database_url = normalize_sqlite_url(&database_url);

    let db = sea_orm::Database::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    let args: Vec<String> = env::args().collect();
    let command = args.get(1).map(|s| s.as_str()).unwrap_or("up");

    match command {
        "up" | "migrate" => {
            println!("Running migrations...");
            Migrator::up(&db, None).await.expect("Failed to run migrations");
            println!("Migrations completed successfully!");
        }
        "down" | "rollback" => {
            let steps: u32 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(1);
            println!("Rolling back {} migration(s)...", steps);
            Migrator::down(&db, Some(steps)).await.expect("Failed to rollback");
            println!("Rollback completed successfully!");
        }
        "status" => {
            println!("Migration status:");
            Migrator::status(&db).await.expect("Failed to get status");
        }
        "fresh" => {
            println!("WARNING: Dropping all tables and re-running migrations...");
            Migrator::fresh(&db).await.expect("Failed to refresh database");
            println!("Database refreshed successfully!");
        }
        _ => {
            eprintln!("Unknown command: {}", command);
            eprintln!("Usage: migrate [up|rollback|status|fresh]");
            std::process::exit(1);
        }
    }
}
