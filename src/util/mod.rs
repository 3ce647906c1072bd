//! Utility helpers shared across page and component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser-specific formatting from component logic
//! so it can be tested natively.

pub mod timestamp;
