// SPDX-License-Identifier: MIT OR Apache-2.0

use thiserror::Error;

/// Configuration errors. Raised when the section list is built, never while
/// the page is scrolling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScrollSpyError {
    #[error("scroll-spy needs at least one section")]
    NoSections,
    #[error("section identifiers must not be blank")]
    BlankSection,
    #[error("section `{0}` is listed more than once")]
    DuplicateSection(String),
}
