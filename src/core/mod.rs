// CaseDesk - core/mod.rs
//
// Core business logic layer.
// Dependencies: model/serialisation crates only.
// Must NOT depend on: app, platform, or any filesystem access.

pub mod dataset;
pub mod export;
pub mod filter;
pub mod model;
pub mod summary;
