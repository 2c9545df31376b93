//! Contains extensions which wire pragmatic format with core routing functionality.

pub mod config;

pub mod route;
