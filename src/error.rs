use thiserror::Error;

/// Errors raised while constructing an expression.
///
/// Every builder reports these synchronously, before a node is returned, so a
/// tree is either fully well-formed or not built at all. `function` always
/// names the wire tag of the builder that rejected its input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// A variadic builder received fewer operands than it accepts
    #[error("{function} expects at least {min} argument(s), got {given}")]
    Arity {
        function: &'static str,
        min: usize,
        given: usize,
    },

    /// A native function was supplied where a plain value is required
    #[error("{function} received a function where a value is required")]
    FunctionNotAllowed { function: &'static str },

    /// A native function declared zero parameters
    #[error("{function} received a lambda that declares no parameters")]
    EmptyLambda { function: &'static str },

    /// A function body was paired with a binding list of a different length
    #[error("{function} binds {expected} variable(s) but the function takes {found}")]
    LambdaArity {
        function: &'static str,
        expected: usize,
        found: usize,
    },

    /// A binding position received something other than a name or list of names
    #[error("{function} expects a variable name or a list of names, got {found}")]
    InvalidBinding {
        function: &'static str,
        found: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, BuildError>;
