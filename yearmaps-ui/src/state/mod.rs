//! State Management
//!
//! Reactive gallery state using Leptos signals.

pub mod gallery;
