// SPDX-License-Identifier: MIT OR Apache-2.0

//! Static page content.

pub mod business;
pub mod competitors;
pub mod contact;
pub mod funding;
pub mod market;
pub mod milestones;
pub mod nav;
pub mod product;
pub mod solution;
pub mod team;
