use std::fmt;

/// Errors raised by the particle field and the text effects.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldError {
    /// The surface is detached or reports unusable dimensions.
    InvalidSurface { width: f32, height: f32 },
    /// The surface went away between frames.
    SurfaceDetached,
    /// A typing effect was built without any phrase.
    EmptyPhrases,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSurface { width, height } => {
                write!(f, "invalid drawable surface: {}x{}", width, height)
            }
            Self::SurfaceDetached => write!(f, "drawable surface detached"),
            Self::EmptyPhrases => write!(f, "typing effect needs at least one phrase"),
        }
    }
}

impl std::error::Error for FieldError {}
