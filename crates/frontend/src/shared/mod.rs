pub mod api;
pub mod api_utils;
pub mod clipboard;
pub mod components;
pub mod config;
pub mod definition;
pub mod error;
pub mod grid;
