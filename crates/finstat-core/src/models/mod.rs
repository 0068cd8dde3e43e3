//! Data models for statements, metrics, and configuration.

pub mod config;
pub mod statement;
