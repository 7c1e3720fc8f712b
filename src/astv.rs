//! Main module for astv library functionality

pub mod ast;
pub mod config;
pub mod formats;
pub mod loader;
pub mod presentation;
pub mod render;
pub mod testing;
pub mod tree;
