use cranpose_scroll::host::{ElementMetrics, ScrollHost, ScrollSource, ScrollTargetKind};
use cranpose_scroll::{
    resolve_scroll_values, validate_element, ElementRef, ScrollError, ScrollMetrics,
    ScrollableElement,
};
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Window};

// The stable web-sys getters for these return `i32`, which truncates the
// fractional offsets browsers report on zoomed or HiDPI pages.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = Element)]
    type ScrollOffsets;

    #[wasm_bindgen(method, getter, js_name = scrollLeft)]
    fn scroll_left(this: &ScrollOffsets) -> f64;

    #[wasm_bindgen(method, getter, js_name = scrollTop)]
    fn scroll_top(this: &ScrollOffsets) -> f64;
}

pub type WebScrollTarget = ScrollableElement<WebWindow, WebElement>;

pub type WebElementRef = ElementRef<WebElement>;

/// A DOM element used as a scroll target.
#[derive(Clone, Debug, PartialEq)]
pub struct WebElement(pub Element);

impl WebElement {
    pub fn element(&self) -> &Element {
        &self.0
    }

    fn offsets(&self) -> &ScrollOffsets {
        self.0.unchecked_ref()
    }
}

impl From<Element> for WebElement {
    fn from(element: Element) -> Self {
        Self(element)
    }
}

impl From<HtmlElement> for WebElement {
    fn from(element: HtmlElement) -> Self {
        Self(Element::from(element))
    }
}

// Sizes are integral in the DOM, offsets are not.
impl ElementMetrics for WebElement {
    fn scroll_left(&self) -> f64 {
        self.offsets().scroll_left()
    }

    fn scroll_top(&self) -> f64 {
        self.offsets().scroll_top()
    }

    fn scroll_width(&self) -> f64 {
        self.0.scroll_width() as f64
    }

    fn scroll_height(&self) -> f64 {
        self.0.scroll_height() as f64
    }

    fn client_width(&self) -> f64 {
        self.0.client_width() as f64
    }

    fn client_height(&self) -> f64 {
        self.0.client_height() as f64
    }
}

impl ScrollSource for WebElement {
    fn scroll_left(&self) -> Option<f64> {
        Some(self.offsets().scroll_left())
    }

    fn scroll_top(&self) -> Option<f64> {
        Some(self.offsets().scroll_top())
    }
}

/// The browser window used as a scroll target.
#[derive(Clone, Debug, PartialEq)]
pub struct WebWindow(pub Window);

impl ScrollSource for WebWindow {
    fn scroll_x(&self) -> Option<f64> {
        read_window_offset("scrollX", self.0.scroll_x())
    }

    fn scroll_y(&self) -> Option<f64> {
        read_window_offset("scrollY", self.0.scroll_y())
    }
}

fn read_window_offset(name: &str, read: Result<f64, JsValue>) -> Option<f64> {
    match read {
        Ok(offset) => Some(offset),
        Err(err) => {
            log::warn!("Scroll: reading window.{name} threw {err:?}, falling back");
            None
        }
    }
}

pub struct WebPlatform {
    window: Window,
    document: Document,
}

impl WebPlatform {
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }

    /// Bind to the global window and its document.
    ///
    /// Returns `None` when not running inside a browser document.
    pub fn from_global() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self::new(window, document))
    }

    pub fn window_target(&self) -> WebScrollTarget {
        ScrollableElement::Window(WebWindow(self.window.clone()))
    }

    pub fn element_target(&self, element: impl Into<WebElement>) -> WebScrollTarget {
        ScrollableElement::Element(element.into())
    }

    /// Read the current scroll metrics of `target`.
    pub fn resolve(&self, target: &WebScrollTarget) -> ScrollMetrics {
        resolve_scroll_values(self, target)
    }
}

impl ScrollHost for WebPlatform {
    type Window = WebWindow;
    type Element = WebElement;

    fn body(&self) -> Option<WebElement> {
        self.document.body().map(WebElement::from)
    }

    fn document_element(&self) -> Option<WebElement> {
        self.document.document_element().map(WebElement::from)
    }
}

/// A raw JavaScript value offered as a scroll target.
pub struct JsTarget<'a>(pub &'a JsValue);

impl ScrollTargetKind for JsTarget<'_> {
    fn is_element(&self) -> bool {
        self.0.is_instance_of::<HtmlElement>()
    }

    fn is_window(&self) -> bool {
        self.0.is_instance_of::<Window>()
    }

    fn describe(&self) -> String {
        if self.0.is_null() {
            "null".to_string()
        } else if let Some(text) = self.0.as_string() {
            format!("string {text:?}")
        } else if let Some(number) = self.0.as_f64() {
            format!("number {number}")
        } else if let Some(flag) = self.0.as_bool() {
            format!("boolean {flag}")
        } else {
            format!("{:?}", self.0)
        }
    }
}

/// Validate a raw value from JavaScript and convert it into a typed target.
///
/// `undefined` counts as a missing target.
pub fn validate_js_target(value: Option<&JsValue>) -> Result<WebScrollTarget, ScrollError> {
    let Some(value) = value.filter(|value| !value.is_undefined()) else {
        log::debug!("Scroll: rejected undefined scroll target");
        return Err(ScrollError::UndefinedTarget);
    };
    validate_element(Some(&JsTarget(value)))?;
    if value.is_instance_of::<Window>() {
        Ok(ScrollableElement::Window(WebWindow(
            value.clone().unchecked_into(),
        )))
    } else {
        Ok(ScrollableElement::Element(WebElement(
            value.clone().unchecked_into(),
        )))
    }
}

/// Forward panics to the browser console.
pub fn install_panic_hook() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        log::debug!("Scroll: console panic hook installed");
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn window_offset_passes_values_through() {
        assert_eq!(read_window_offset("scrollX", Ok(12.25)), Some(12.25));
    }

    #[wasm_bindgen_test]
    fn window_offset_exception_reads_as_absent() {
        let thrown = JsValue::from_str("SecurityError");
        assert_eq!(read_window_offset("scrollY", Err(thrown)), None);
    }
}
