//! termchan core library
//!
//! This module exposes the API client, cache, and CLI modules for use in
//! integration tests.

pub mod api;
pub mod cache;
pub mod cli;
pub mod config;
pub mod data;
