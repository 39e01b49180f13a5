//! The closed error taxonomy shared by the tokenizer, parser, and evaluator.
//!
//! Every fallible operation in the crate returns `Result<T, EvalError>`.
//! There is no recovery or retry; an `EvalError` aborts the current
//! [`crate::Context::exec`] call and is handed back to the host verbatim.

use thiserror::Error;

/// A single closed enumeration of everything that can go wrong while
/// tokenizing, parsing, or evaluating a `calcore` program.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// A numeric literal's value or exponent does not fit in an `f64`.
    #[error("decimal literal out of range")]
    DecimalOutOfRange,

    /// Tokenization or parsing failed to recognize the input as a valid
    /// program.
    #[error("could not parse input")]
    ParseFailed,

    /// A free identifier was not found in the environment at resolution
    /// time.
    #[error("identifier '{0}' is undefined")]
    IdentifierUndefined(String),

    /// `CALL` was applied to a value that is not a `Lambda`.
    #[error("value is not callable")]
    ObjectNotCallable,

    /// `INDEX` was applied to a value that is not a `List`.
    #[error("value is not a list")]
    ObjectNotList,

    /// An index expression evaluated to something other than a `Number`.
    #[error("index is not a number")]
    IndexNotDecimal,

    /// An integer index (or slice bound) fell outside the valid range.
    #[error("index out of range")]
    IndexOutOfRange,

    /// A `LIST` literal element evaluated to something other than a
    /// `Number`.
    #[error("list member is not a number")]
    ListMemberNotDecimal,

    /// A call's argument count did not match the callee's declared arity.
    #[error("wrong number of parameters")]
    WrongNumberOfParameters,

    /// An arithmetic operator received an operand that is neither `Number`
    /// nor `List` (i.e. a `Lambda` or `Void`).
    #[error("wrong operand type")]
    WrongOperandType,

    /// An elementwise operator was applied to two lists of unequal length.
    #[error("lists have different lengths")]
    DifferentListLengths,

    /// A built-in received an argument of a kind it does not accept.
    #[error("wrong parameter type")]
    WrongParameterType,
}
