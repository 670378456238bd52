//! Headless core for a design-canvas editor.
//!
//! This crate owns the canonical state of a canvas document: the elements on
//! it, the single active selection, and a linear snapshot history for
//! undo/redo. Everything a host application does to the document — create,
//! move, restyle, delete, duplicate, time-travel — goes through
//! [`engine::Engine`], which keeps the three stateful pieces consistent with
//! each other. Rendering, pointer gesture capture, viewport math, and the
//! generative-AI producer all live in the host; they feed plain payload values
//! in and read state back out through engine queries.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Command layer — the single entry point for all mutations |
//! | [`store`] | Element store: the live ordered element collection |
//! | [`history`] | Snapshot history with a cursor; commit/undo/redo |
//! | [`selection`] | Selection tracker: at most one active element id |
//! | [`element`] | Element types, sparse updates, and typed props access |
//! | [`input`] | Keyboard dispatcher mapping shortcuts onto engine commands |
//! | [`consts`] | Shared defaults (sizes, colors, duplicate offset) |

pub mod consts;
pub mod element;
pub mod engine;
pub mod history;
pub mod input;
pub mod selection;
pub mod store;
