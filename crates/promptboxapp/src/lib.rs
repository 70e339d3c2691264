//! # promptbox
//!
//! A small, colorful collection of reusable text snippets ("prompts"). Each prompt has a
//! unique name, a body, and a display color; pick one, add some text, paste the result
//! anywhere.
//!
//! This crate is the UI-agnostic core. It owns the prompt document on disk and the
//! rules around it, and knows how to order and color prompts for display. Terminal
//! concerns live in the `promptbox` binary crate.
//!
//! ## Layering
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                      │
//! │  - Single entry point for UI clients                     │
//! │  - Carries listing defaults from configuration           │
//! └──────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*)                              │
//! │  - One function per operation, returns `CmdResult`       │
//! │  - Turns soft failures into leveled messages             │
//! └──────────────────────────────────────────────────────────┘
//!                 │                              │
//!                 ▼                              ▼
//! ┌───────────────────────────────┐  ┌───────────────────────┐
//! │  Store (store/*)              │  │  Ordering (color.rs)  │
//! │  - Validated, rename-aware    │  │  - Similarity sort    │
//! │    CRUD over prompts.json     │  │  - Contrast text      │
//! └───────────────────────────────┘  └───────────────────────┘
//! ```
//!
//! ## Constraint: One Writer
//!
//! Every store operation rewrites the whole document and nothing locks it. Run one
//! writer at a time; overlapping writers lose each other's changes.

pub mod api;
pub mod color;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod store;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
