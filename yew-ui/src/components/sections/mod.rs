// SPDX-License-Identifier: MIT OR Apache-2.0

//! The eleven page sections, top to bottom.

mod business;
mod competition;
mod contact;
mod funding;
mod hero;
mod market;
mod problem;
mod product;
mod roadmap;
mod solution;
mod team;

pub use business::Business;
pub use competition::Competition;
pub use contact::Contact;
pub use funding::Funding;
pub use hero::Hero;
pub use market::Market;
pub use problem::Problem;
pub use product::Product;
pub use roadmap::Roadmap;
pub use solution::Solution;
pub use team::Team;
