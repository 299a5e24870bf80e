//! `Tasklists`: terminal-native multi-list to-do manager library.

pub mod app;
pub mod config;
pub mod controller;
pub mod lists;
pub mod presentation;
pub mod storage;
pub mod ui;
