//! Shared, possibly-unset handle to a rendered element.

use std::cell::RefCell;
use std::rc::Rc;

use crate::ScrollError;

/// A handle the rendering layer fills in once the element exists.
///
/// Clones share the same slot, so a reference handed to a scroll routine
/// observes later `attach`/`detach` calls.
pub struct ElementRef<E> {
    slot: Rc<RefCell<Option<E>>>,
}

impl<E> ElementRef<E> {
    pub fn new() -> Self {
        Self {
            slot: Rc::new(RefCell::new(None)),
        }
    }

    pub fn with_element(element: E) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(element))),
        }
    }

    /// Attach an element, replacing any previous one.
    pub fn attach(&self, element: E) {
        self.slot.borrow_mut().replace(element);
    }

    /// Detach the current element, returning it.
    pub fn detach(&self) -> Option<E> {
        self.slot.borrow_mut().take()
    }

    pub fn is_attached(&self) -> bool {
        self.slot.borrow().is_some()
    }
}

impl<E: Clone> ElementRef<E> {
    pub fn current(&self) -> Option<E> {
        self.slot.borrow().clone()
    }
}

impl<E> Clone for ElementRef<E> {
    fn clone(&self) -> Self {
        Self {
            slot: Rc::clone(&self.slot),
        }
    }
}

impl<E> Default for ElementRef<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> std::fmt::Debug for ElementRef<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElementRef")
            .field("attached", &self.is_attached())
            .finish()
    }
}

/// Unwrap the element held by `reference`.
///
/// Element handles are cheap shared pointers, so the returned value refers
/// to the very element that was attached.
pub fn get_element<E: Clone>(reference: &ElementRef<E>) -> Result<E, ScrollError> {
    reference.current().ok_or(ScrollError::ReferenceResolution)
}
