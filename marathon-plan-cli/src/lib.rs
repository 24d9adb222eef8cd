// Library exports for the marathon-plan CLI
// This allows testing of internal modules

pub mod commands;
pub mod config;
