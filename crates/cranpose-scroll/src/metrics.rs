//! Scroll and viewport metric reads.

use crate::host::{ElementMetrics, ScrollHost, ScrollSource, ScrollableElement};

/// Scroll offset, scrollable content size and visible client size of a
/// target, in CSS pixels. Only valid at the instant it was read.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ScrollMetrics {
    pub scroll_left: f64,
    pub scroll_top: f64,
    pub scroll_width: f64,
    pub client_width: f64,
    pub client_height: f64,
    pub scroll_height: f64,
}

impl ScrollMetrics {
    /// Read all six metrics verbatim from `element`.
    pub fn of<E: ElementMetrics + ?Sized>(element: &E) -> Self {
        Self {
            scroll_left: element.scroll_left(),
            scroll_top: element.scroll_top(),
            scroll_width: element.scroll_width(),
            client_width: element.client_width(),
            client_height: element.client_height(),
            scroll_height: element.scroll_height(),
        }
    }

    /// Largest horizontal offset the target can scroll to.
    pub fn max_scroll_left(&self) -> f64 {
        (self.scroll_width - self.client_width).max(0.0)
    }

    /// Largest vertical offset the target can scroll to.
    pub fn max_scroll_top(&self) -> f64 {
        (self.scroll_height - self.client_height).max(0.0)
    }
}

/// Top/left scroll offset of a target.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ScrollPosition {
    pub scroll_top: f64,
    pub scroll_left: f64,
}

impl ScrollPosition {
    pub const ZERO: ScrollPosition = ScrollPosition {
        scroll_top: 0.0,
        scroll_left: 0.0,
    };
}

/// Read the scroll metrics of `target`.
///
/// The window, the body and the root element all stand for the whole page.
/// Engines disagree on whether the body or the root element carries the page
/// metrics, so each page metric is taken from the body unless it reads as
/// zero (or NaN), in which case the root element's value is used.
pub fn resolve_scroll_values<H: ScrollHost>(
    host: &H,
    target: &ScrollableElement<H::Window, H::Element>,
) -> ScrollMetrics {
    match target {
        ScrollableElement::Element(element) if !host.is_page_root(element) => {
            ScrollMetrics::of(element)
        }
        _ => page_metrics(host),
    }
}

fn page_metrics<H: ScrollHost>(host: &H) -> ScrollMetrics {
    let body = host.body().map(|body| ScrollMetrics::of(&body));
    let root = host.document_element().map(|root| ScrollMetrics::of(&root));
    if body.is_none() && root.is_none() {
        log::warn!("Scroll: document has neither body nor root element, page metrics read as zero");
    }
    let body = body.unwrap_or_default();
    let root = root.unwrap_or_default();

    ScrollMetrics {
        scroll_left: or_fallback(body.scroll_left, root.scroll_left),
        scroll_top: or_fallback(body.scroll_top, root.scroll_top),
        scroll_width: or_fallback(body.scroll_width, root.scroll_width),
        client_width: or_fallback(body.client_width, root.client_width),
        client_height: or_fallback(body.client_height, root.client_height),
        scroll_height: or_fallback(body.scroll_height, root.scroll_height),
    }
}

// 0, -0 and NaN are the falsy numbers.
#[inline]
fn or_fallback(primary: f64, fallback: f64) -> f64 {
    if primary == 0.0 || primary.is_nan() {
        fallback
    } else {
        primary
    }
}

/// Read the top/left scroll offset of `source`.
///
/// Window-style offsets win when present, then element-style offsets, and a
/// missing axis reads as 0.
pub fn scroll_values<S: ScrollSource + ?Sized>(source: &S) -> ScrollPosition {
    ScrollPosition {
        scroll_top: source.scroll_y().or_else(|| source.scroll_top()).unwrap_or(0.0),
        scroll_left: source
            .scroll_x()
            .or_else(|| source.scroll_left())
            .unwrap_or(0.0),
    }
}

#[cfg(test)]
#[path = "tests/metrics_tests.rs"]
mod tests;
