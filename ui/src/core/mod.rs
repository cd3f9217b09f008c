//! Platform-agnostic page state plus the thin browser glue it needs.

pub mod chrome;
pub mod config;
pub mod fetch;
pub mod gallery;
pub mod language;
pub mod modal;
pub mod platform;
pub mod storage;
pub mod theme;
