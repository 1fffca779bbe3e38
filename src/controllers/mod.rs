//! HTTP controllers

pub mod todo;
