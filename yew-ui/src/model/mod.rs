// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-section UI state. Pure data and transitions; components hold the
//! values in `use_state`/`use_reducer`.

pub mod carousel;
pub mod contact_form;
pub mod selection;
pub mod tabs;
