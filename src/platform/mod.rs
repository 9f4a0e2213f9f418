// CaseDesk - platform/mod.rs
//
// Platform abstraction layer: config directory resolution and config.toml.
// Dependencies: standard library, directories and toml crates.
// Must NOT depend on: core, app.

pub mod config;
