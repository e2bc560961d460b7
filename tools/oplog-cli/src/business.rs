//! Sample business operations used by the demo commands.

use oplog_observability::Operation;

/// Failures raised by the sample business operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BusinessError {
    #[error("Input cannot be null")]
    NullInput,

    #[error("/ by zero")]
    DivisionByZero,

    #[error("integer overflow adding {0} and {1}")]
    Overflow(i64, i64),
}

/// String helpers.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringProcessor;

impl StringProcessor {
    /// Reverse `input` by characters. Missing input is an error.
    pub fn reverse_string(&self, input: Option<&str>) -> Result<String, BusinessError> {
        let input = input.ok_or(BusinessError::NullInput)?;
        Ok(input.chars().rev().collect())
    }

    pub fn to_upper_case(&self, input: &str) -> String {
        input.to_uppercase()
    }

    /// Character count; missing input counts as zero.
    pub fn string_length(&self, input: Option<&str>) -> usize {
        input.map_or(0, |s| s.chars().count())
    }
}

/// Arithmetic helpers.
#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator;

impl Calculator {
    pub fn add(&self, a: i64, b: i64) -> Result<i64, BusinessError> {
        a.checked_add(b).ok_or(BusinessError::Overflow(a, b))
    }

    pub fn divide(&self, a: f64, b: f64) -> Result<f64, BusinessError> {
        if b == 0.0 {
            return Err(BusinessError::DivisionByZero);
        }
        Ok(a / b)
    }
}

/// The business operations, each as a single-input operation ready to wrap.
pub fn reverse_op(
    processor: StringProcessor,
) -> impl Operation<String, String, Error = BusinessError> + Clone {
    move |input: String| processor.reverse_string(Some(&input))
}

pub fn upper_op(
    processor: StringProcessor,
) -> impl Operation<String, String, Error = BusinessError> + Clone {
    move |input: String| Ok(processor.to_upper_case(&input))
}

pub fn length_op(
    processor: StringProcessor,
) -> impl Operation<Option<String>, usize, Error = BusinessError> + Clone {
    move |input: Option<String>| Ok(processor.string_length(input.as_deref()))
}

pub fn add_op(
    calc: Calculator,
) -> impl Operation<(i64, i64), i64, Error = BusinessError> + Clone {
    move |(a, b): (i64, i64)| calc.add(a, b)
}

pub fn divide_op(
    calc: Calculator,
) -> impl Operation<(f64, f64), f64, Error = BusinessError> + Clone {
    move |(a, b): (f64, f64)| calc.divide(a, b)
}
