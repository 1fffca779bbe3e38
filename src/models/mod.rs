//! Database models

pub mod todos;
