// CaseDesk - app/mod.rs
//
// Application layer: record store, case-list state, interactive commands.
// Dependencies: core layer.
// Must NOT depend on: platform specifics.

pub mod commands;
pub mod state;
pub mod store;
