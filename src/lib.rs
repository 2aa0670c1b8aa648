// SPDX-License-Identifier: MPL-2.0
//! `iced_carte` is a small menu catalog viewer built with the Iced GUI framework.
//!
//! It shows a listing of dishes and a per-dish detail screen with user
//! comments and a modal submission form, and demonstrates internationalization
//! with Fluent, user preference management, and modular UI design.

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ui;
