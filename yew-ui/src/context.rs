// SPDX-License-Identifier: MIT OR Apache-2.0

//! Context providers for the application
//!
//! The runtime configuration is resolved once in `App` and handed down the
//! tree through Yew's `ContextProvider`.

use yew::prelude::*;

use crate::constants::RuntimeConfig;

/// Type alias used by components that read the page configuration.
pub type PageConfigCtx = RuntimeConfig;

/// The provided configuration, or the built-in defaults when a component is
/// rendered outside `App` (component tests do this).
#[hook]
pub fn use_page_config() -> PageConfigCtx {
    use_context::<PageConfigCtx>().unwrap_or_default()
}
