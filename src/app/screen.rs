// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

use crate::catalog::DishId;

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Detail(DishId),
}
