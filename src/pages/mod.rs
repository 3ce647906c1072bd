//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The page owns the initial load and delegates rendering details to
//! `components`.

pub mod home;
