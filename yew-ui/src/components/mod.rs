// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod card;
pub mod chart;
pub mod config_error;
pub mod footer;
pub mod header;
pub mod icons;
pub mod sections;
pub mod tab_bar;
