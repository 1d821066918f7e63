// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) is a thin wrapper over these modules.
//
// Module responsibilities:
// - `config`: Loads the per-user YAML config (bearer token + API base URL).
// - `api`: Message validation and the two HTTP calls the tool can make.
// - `ui`: The decorative pacing spinner shown before a request.
// - `cli`: Argument parsing and command dispatch.
//
// Keeping command handling in the library means the dispatcher and the API
// client can be exercised directly in tests, with an in-memory config and a
// mock server instead of the real endpoint.
pub mod api;
pub mod cli;
pub mod config;
pub mod ui;
