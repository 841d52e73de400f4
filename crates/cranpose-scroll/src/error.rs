/// Errors raised by the scroll helpers.
///
/// All of these describe misuse by the calling code rather than transient
/// conditions, so they are returned immediately and never retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrollError {
    /// An [`ElementRef`](crate::ElementRef) was read before an element was attached.
    ReferenceResolution,
    /// No scroll target was supplied.
    UndefinedTarget,
    /// The supplied target is neither a rendered element nor the window.
    TypeValidation { found: String },
}

impl std::fmt::Display for ScrollError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScrollError::ReferenceResolution => {
                write!(f, "could not resolve element reference: no element attached")
            }
            ScrollError::UndefinedTarget => write!(f, "the scroll target was undefined"),
            ScrollError::TypeValidation { found } => write!(
                f,
                "the scroll target must be a rendered element or the window; got {found}"
            ),
        }
    }
}

impl std::error::Error for ScrollError {}
