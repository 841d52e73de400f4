//! Scroll helpers for Cranpose scroll animations
//!
//! This crate resolves element references, reads scroll and viewport metrics
//! from either a scrollable element or the window, validates scroll targets
//! and provides the easing curve used to interpolate animated scroll offsets.
//!
//! Everything here is a pure read or a guard check. The host (a browser
//! document, or an in-memory fake in tests) is reached through the traits in
//! [`host`]; `cranpose-platform-web` implements them over `web-sys`.

mod easing;
mod element_ref;
mod error;
pub mod host;
mod metrics;
mod validate;

#[cfg(test)]
mod test_support;

pub use easing::ease_out_quart;
pub use element_ref::{get_element, ElementRef};
pub use error::ScrollError;
pub use host::{ElementMetrics, ScrollHost, ScrollSource, ScrollTargetKind, ScrollableElement};
pub use metrics::{resolve_scroll_values, scroll_values, ScrollMetrics, ScrollPosition};
pub use validate::validate_element;

pub mod prelude {
    pub use crate::easing::ease_out_quart;
    pub use crate::element_ref::{get_element, ElementRef};
    pub use crate::error::ScrollError;
    pub use crate::host::{ScrollHost, ScrollableElement};
    pub use crate::metrics::{resolve_scroll_values, scroll_values, ScrollMetrics, ScrollPosition};
    pub use crate::validate::validate_element;
}
