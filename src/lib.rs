// Library root
// -----------
// This crate exposes a small library surface for the restaurant registry
// CLI. The binary (`main.rs`) wires these modules into the interactive menu.
//
// Module responsibilities:
// - `model`: the `Restaurant` record and the title-case normalization used
//   both when registering and when looking a restaurant up.
// - `store`: loads and saves the full record list as a JSON file.
// - `registry`: owns the in-memory list and persists it after every change.
// - `error`: typed errors returned by `store` and `registry`.
// - `ui`: the terminal menu loop and its screens.
//
// The UI only talks to `Registry`, so the record logic can be tested
// without a terminal.
pub mod error;
pub mod model;
pub mod registry;
pub mod store;
pub mod ui;
