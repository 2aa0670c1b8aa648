// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`menu`] - Listing of the catalog's dishes
//! - [`detail`] - Per-dish detail view with comments and submission form
//!
//! # Shared Infrastructure
//!
//! - [`breadcrumb`] - Navigation trail between screens
//! - [`components`] - Reusable UI components (loading indicator)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod breadcrumb;
pub mod components;
pub mod design_tokens;
pub mod detail;
pub mod menu;
pub mod styles;
