use core::{error::Error, fmt};


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError
{
    /// A vector argument did not have exactly 3 elements, or a rotation
    /// axis had zero length.
    InvalidArgument(&'static str),

    /// The operation is mathematically undefined for the given operand,
    /// e.g. normalizing or inverting the zero quaternion.
    Arithmetic(&'static str),
}

impl Error for MathError {}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            Self::Arithmetic(msg) => write!(f, "Arithmetic error: {}", msg),
        }
    }
}
