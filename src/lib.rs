//! hackerstories: a terminal client for searching Hacker News stories.
//!
//! The search query is persisted across sessions, each submission
//! derives a new request target, and a generation-tagged fetch cycle
//! feeds a pure reducer that owns the visible list and its
//! loading/error flags.

pub mod api;
pub mod config;
pub mod prefs;
pub mod search;
pub mod ui;
