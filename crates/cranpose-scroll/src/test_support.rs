//! In-memory stand-ins for a browser document.

use crate::host::{ElementMetrics, ScrollHost, ScrollSource, ScrollTargetKind};
use crate::ScrollMetrics;

/// Element with fixed metrics. Equality is identity, keyed by `id`.
#[derive(Clone, Debug)]
pub(crate) struct FakeElement {
    pub id: u32,
    pub metrics: ScrollMetrics,
}

impl FakeElement {
    pub fn new(id: u32, metrics: ScrollMetrics) -> Self {
        Self { id, metrics }
    }

    pub fn empty(id: u32) -> Self {
        Self::new(id, ScrollMetrics::default())
    }
}

impl PartialEq for FakeElement {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl ElementMetrics for FakeElement {
    fn scroll_left(&self) -> f64 {
        self.metrics.scroll_left
    }

    fn scroll_top(&self) -> f64 {
        self.metrics.scroll_top
    }

    fn scroll_width(&self) -> f64 {
        self.metrics.scroll_width
    }

    fn scroll_height(&self) -> f64 {
        self.metrics.scroll_height
    }

    fn client_width(&self) -> f64 {
        self.metrics.client_width
    }

    fn client_height(&self) -> f64 {
        self.metrics.client_height
    }
}

impl ScrollSource for FakeElement {
    fn scroll_left(&self) -> Option<f64> {
        Some(self.metrics.scroll_left)
    }

    fn scroll_top(&self) -> Option<f64> {
        Some(self.metrics.scroll_top)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct FakeWindow {
    pub scroll_x: Option<f64>,
    pub scroll_y: Option<f64>,
}

impl ScrollSource for FakeWindow {
    fn scroll_x(&self) -> Option<f64> {
        self.scroll_x
    }

    fn scroll_y(&self) -> Option<f64> {
        self.scroll_y
    }
}

/// Loose bag of offsets, for sources that expose any mix of fields.
#[derive(Clone, Debug, Default)]
pub(crate) struct FakeOffsets {
    pub scroll_x: Option<f64>,
    pub scroll_y: Option<f64>,
    pub scroll_left: Option<f64>,
    pub scroll_top: Option<f64>,
}

impl ScrollSource for FakeOffsets {
    fn scroll_x(&self) -> Option<f64> {
        self.scroll_x
    }

    fn scroll_y(&self) -> Option<f64> {
        self.scroll_y
    }

    fn scroll_left(&self) -> Option<f64> {
        self.scroll_left
    }

    fn scroll_top(&self) -> Option<f64> {
        self.scroll_top
    }
}

#[derive(Clone, Debug, Default)]
pub(crate) struct FakeDocument {
    pub body: Option<FakeElement>,
    pub root: Option<FakeElement>,
}

impl ScrollHost for FakeDocument {
    type Window = FakeWindow;
    type Element = FakeElement;

    fn body(&self) -> Option<FakeElement> {
        self.body.clone()
    }

    fn document_element(&self) -> Option<FakeElement> {
        self.root.clone()
    }
}

/// Arbitrary runtime value offered as a scroll target.
#[derive(Clone, Debug)]
pub(crate) enum FakeValue {
    Element(FakeElement),
    Window,
    Number(f64),
    Text(&'static str),
}

impl ScrollTargetKind for FakeValue {
    fn is_element(&self) -> bool {
        matches!(self, FakeValue::Element(_))
    }

    fn is_window(&self) -> bool {
        matches!(self, FakeValue::Window)
    }

    fn describe(&self) -> String {
        match self {
            FakeValue::Element(element) => format!("element #{}", element.id),
            FakeValue::Window => "window".to_string(),
            FakeValue::Number(value) => format!("number {value}"),
            FakeValue::Text(text) => format!("string {text:?}"),
        }
    }
}
