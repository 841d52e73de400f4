use crate::host::ScrollTargetKind;
use crate::ScrollError;

/// Check that `target` can be scrolled before an animation starts.
///
/// Accepts concrete elements and the window; anything else, or a missing
/// target, is rejected.
pub fn validate_element<T: ScrollTargetKind + ?Sized>(
    target: Option<&T>,
) -> Result<(), ScrollError> {
    let Some(target) = target else {
        log::debug!("Scroll: rejected undefined scroll target");
        return Err(ScrollError::UndefinedTarget);
    };
    if target.is_element() || target.is_window() {
        return Ok(());
    }
    let found = target.describe();
    log::debug!("Scroll: rejected scroll target {found}");
    Err(ScrollError::TypeValidation { found })
}
