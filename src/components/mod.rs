//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read and write the shared `RwSignal<NameLogState>` from Leptos
//! context and start backend tasks through the `HttpNamesApi` in context.

pub mod error_banner;
pub mod name_form;
pub mod name_list;
pub mod status_bar;
