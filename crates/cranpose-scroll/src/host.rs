//! Traits through which the scroll helpers read the host document.

/// A scroll target: either the global viewport or a concrete element.
///
/// The caller picks the variant explicitly, so there is no runtime guessing
/// about which metric-reading path applies.
#[derive(Clone, Debug, PartialEq)]
pub enum ScrollableElement<W, E> {
    Window(W),
    Element(E),
}

/// Layout reads exposed by a rendered element, in CSS pixels.
pub trait ElementMetrics {
    fn scroll_left(&self) -> f64;
    fn scroll_top(&self) -> f64;
    fn scroll_width(&self) -> f64;
    fn scroll_height(&self) -> f64;
    fn client_width(&self) -> f64;
    fn client_height(&self) -> f64;
}

/// Scroll offsets as exposed by either a window or an element.
///
/// A window reports `scroll_x`/`scroll_y`, an element reports
/// `scroll_left`/`scroll_top`. `None` means the source has no such field.
pub trait ScrollSource {
    fn scroll_x(&self) -> Option<f64> {
        None
    }

    fn scroll_y(&self) -> Option<f64> {
        None
    }

    fn scroll_left(&self) -> Option<f64> {
        None
    }

    fn scroll_top(&self) -> Option<f64> {
        None
    }
}

impl<W: ScrollSource, E: ScrollSource> ScrollSource for ScrollableElement<W, E> {
    fn scroll_x(&self) -> Option<f64> {
        match self {
            ScrollableElement::Window(window) => window.scroll_x(),
            ScrollableElement::Element(element) => element.scroll_x(),
        }
    }

    fn scroll_y(&self) -> Option<f64> {
        match self {
            ScrollableElement::Window(window) => window.scroll_y(),
            ScrollableElement::Element(element) => element.scroll_y(),
        }
    }

    fn scroll_left(&self) -> Option<f64> {
        match self {
            ScrollableElement::Window(window) => window.scroll_left(),
            ScrollableElement::Element(element) => element.scroll_left(),
        }
    }

    fn scroll_top(&self) -> Option<f64> {
        match self {
            ScrollableElement::Window(window) => window.scroll_top(),
            ScrollableElement::Element(element) => element.scroll_top(),
        }
    }
}

/// The document that owns the scroll targets.
pub trait ScrollHost {
    type Window;
    type Element: ElementMetrics + PartialEq;

    /// The `<body>` element, if the document has one.
    fn body(&self) -> Option<Self::Element>;

    /// The root (`<html>`) element, if the document has one.
    fn document_element(&self) -> Option<Self::Element>;

    /// Whether `element` stands for the whole page (the body or the root).
    fn is_page_root(&self, element: &Self::Element) -> bool {
        self.body().as_ref() == Some(element) || self.document_element().as_ref() == Some(element)
    }
}

/// Runtime classification of an arbitrary candidate scroll target.
pub trait ScrollTargetKind {
    /// The value is a concrete rendered element.
    fn is_element(&self) -> bool;

    /// The value is the global window.
    fn is_window(&self) -> bool;

    /// Short human-readable description used in validation errors.
    fn describe(&self) -> String;
}

impl<W, E> ScrollTargetKind for ScrollableElement<W, E> {
    fn is_element(&self) -> bool {
        matches!(self, ScrollableElement::Element(_))
    }

    fn is_window(&self) -> bool {
        matches!(self, ScrollableElement::Window(_))
    }

    fn describe(&self) -> String {
        match self {
            ScrollableElement::Window(_) => "window".to_string(),
            ScrollableElement::Element(_) => "element".to_string(),
        }
    }
}
