//! The single-input, single-output operation capability.

/// A computation that takes one input and produces one output or fails.
///
/// Any `Fn(T) -> Result<R, E>` is an operation, so closures, function items
/// and method references can be wrapped directly. Operations that need more
/// than one value take a tuple; operations that need none take `()`.
pub trait Operation<T, R> {
    /// Failure produced by this operation.
    type Error;

    /// Run the operation once with `input`.
    fn execute(&self, input: T) -> Result<R, Self::Error>;
}

impl<T, R, E, F> Operation<T, R> for F
where
    F: Fn(T) -> Result<R, E>,
{
    type Error = E;

    fn execute(&self, input: T) -> Result<R, E> {
        self(input)
    }
}
