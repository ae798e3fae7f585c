pub mod config;
pub mod listing;
pub mod logger;
pub mod models;
pub mod web;
