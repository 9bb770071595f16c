// src/services/mod.rs

pub mod clipboard;

pub use clipboard::{ClipboardError, ClipboardService};
