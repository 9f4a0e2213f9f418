// CaseDesk - lib.rs
//
// Library entry point, exposing the filter engine, the case-list state
// controller, and their supporting layers for integration testing and
// for any presentation layer that wants to drive them.
//
// The command-line front-end lives in `main.rs` and is not part of the
// library surface.

pub mod app;
pub mod core;
pub mod platform;
pub mod util;
