//! Error types for the scripting bridge.
//!
//! Every failure the bridge can produce resolves to one [`ScriptError`]
//! kind. Native-function failures cross the host/script boundary as values
//! (wrapped in an external runtime error on the way in, recovered by
//! downcast on the way out) rather than by unwinding.

use floe_core::{Coord, GridSize};
use floe_grid::GridError;
use std::fmt;

/// Errors surfaced by script compilation, execution, and value conversion.
#[derive(Clone, Debug, PartialEq)]
pub enum ScriptError {
    /// The script text failed to compile.
    Compile {
        /// Compiler diagnostic, verbatim from the runtime.
        message: String,
    },
    /// The script raised during execution.
    ///
    /// Class and message are captured from the runtime before translation,
    /// so no diagnostic information is lost at the boundary.
    Runtime {
        /// Runtime classification of the raised error.
        class_name: String,
        /// String representation of the raised error.
        message: String,
    },
    /// A native function was invoked with the wrong number of arguments.
    ///
    /// Raised before any argument is read; no grid or accumulator state
    /// is touched.
    WrongArgumentCount {
        /// Name of the native function.
        function: &'static str,
        /// The function's fixed arity.
        expected: usize,
        /// Number of arguments actually passed.
        actual: usize,
    },
    /// A script value was present but had the wrong type, or a numeric
    /// value fell outside the representable range.
    TypeMismatch {
        /// What the conversion required.
        expected: &'static str,
        /// What the script actually supplied.
        actual: &'static str,
    },
    /// A typed read was requested for a global that is absent (nil).
    VariableNotFound {
        /// Name of the missing global.
        name: String,
    },
    /// A base-type or placement-modifier name was not recognized.
    UnknownEnumName {
        /// Which enumeration was being parsed.
        kind: &'static str,
        /// The unrecognized name.
        name: String,
    },
    /// An immediate grid write addressed a coordinate outside the grid.
    CoordinateOutOfBounds {
        /// The offending coordinate.
        coord: Coord,
        /// The grid's bounds.
        size: GridSize,
    },
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compile { message } => write!(f, "script compile error: {message}"),
            Self::Runtime {
                class_name,
                message,
            } => {
                write!(f, "script runtime error: class = {class_name}, message = {message}")
            }
            Self::WrongArgumentCount {
                function,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "wrong number of arguments in {function}: expected {expected}, got {actual}"
                )
            }
            Self::TypeMismatch { expected, actual } => {
                write!(f, "script value is not {expected} (got {actual})")
            }
            Self::VariableNotFound { name } => {
                write!(f, "script variable '{name}' does not exist")
            }
            Self::UnknownEnumName { kind, name } => {
                write!(f, "unknown {kind} name '{name}'")
            }
            Self::CoordinateOutOfBounds { coord, size } => {
                write!(f, "coordinate {coord} outside of grid {size}")
            }
        }
    }
}

impl std::error::Error for ScriptError {}

impl From<GridError> for ScriptError {
    fn from(err: GridError) -> Self {
        match err {
            GridError::CoordOutOfBounds { coord, size } => {
                Self::CoordinateOutOfBounds { coord, size }
            }
        }
    }
}

impl From<ScriptError> for mlua::Error {
    fn from(err: ScriptError) -> Self {
        mlua::Error::external(err)
    }
}
