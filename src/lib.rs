//! DEK RAI - Task Management Client
//!
//! Native desktop client for the DEK RAI task-management product. It presents
//! a combined login/registration screen, authenticates against the remote
//! Account Service over HTTP, and carries the returned identity into a
//! dashboard screen via navigation parameters.
//!
//! # Module Structure
//!
//! - **`shared`** - Types independent of the UI layer
//!   - Application configuration and builder
//!   - Account Service error taxonomy
//!
//! - **`egui_app`** - Native desktop app (egui/eframe)
//!   - Auth form state and submission handling
//!   - Account Service HTTP client
//!   - Session handoff into the dashboard
//!   - Views, theming, diagnostic logging
//!
//! # Session Model
//!
//! There is deliberately no persistent session: no token, cookie, or on-disk
//! state. A successful login hands `{username, email}` to the dashboard as
//! navigation parameters; resetting the app (or signing out) drops them and
//! the dashboard falls back to literal placeholder strings.
//!
//! # Concurrency
//!
//! The UI is single-threaded immediate-mode. Each form submission runs on its
//! own worker thread with a dedicated tokio runtime and reports back over an
//! mpsc channel; the app state drains completed submissions once per frame.
//! Overlapping submissions are allowed and the last completed response wins.

/// Types independent of the UI layer
pub mod shared;

/// egui native desktop app
/// Only compiled for native targets (not WASM)
#[cfg(not(target_arch = "wasm32"))]
pub mod egui_app;
