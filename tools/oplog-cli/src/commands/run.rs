//! Single-operation commands.

use std::fmt::Display;

use anyhow::Result;
use oplog_observability::{with_logging_to, Operation, Render};
use serde::Serialize;

use super::{AddArgs, DivideArgs, LengthArgs, ReverseArgs, UpperArgs};
use crate::business::{
    add_op, divide_op, length_op, reverse_op, upper_op, Calculator, StringProcessor,
};
use crate::context::Context;

/// Outcome of one wrapped call, for `--json` output.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub label: String,
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Wrap `op` under `label`, call it once with `input`, and report the outcome.
///
/// The operation's error is returned as-is so the caller sees exactly what
/// the unwrapped operation would have produced.
pub fn call_logged<T, R, O>(
    ctx: &Context,
    label: &str,
    op: O,
    input: T,
) -> (RunReport, Result<R, O::Error>)
where
    O: Operation<T, R>,
    O::Error: Display,
    T: Render,
    R: Render + Display,
{
    let logged = with_logging_to(op, label, ctx.sink.clone());
    let mut report = RunReport {
        label: label.to_string(),
        input: input.render(),
        result: None,
        error: None,
    };

    let outcome = logged.execute(input);
    match &outcome {
        Ok(value) => report.result = Some(value.to_string()),
        Err(e) => report.error = Some(e.to_string()),
    }
    (report, outcome)
}

fn run_one<T, R, O>(ctx: &Context, label: &str, op: O, input: T) -> Result<()>
where
    O: Operation<T, R>,
    O::Error: std::error::Error + Send + Sync + 'static,
    T: Render,
    R: Render + Display,
{
    let (report, outcome) = call_logged(ctx, label, op, input);

    if ctx.output.is_json() {
        ctx.output.json(&report);
    }

    let value = outcome?;
    ctx.output.success(&format!("Final result: {}", value));
    Ok(())
}

/// Run the reverse command.
pub fn reverse(args: ReverseArgs, ctx: &Context) -> Result<()> {
    run_one(ctx, "reverseString", reverse_op(StringProcessor), args.text)
}

/// Run the upper command.
pub fn upper(args: UpperArgs, ctx: &Context) -> Result<()> {
    run_one(ctx, "toUpperCase", upper_op(StringProcessor), args.text)
}

/// Run the length command.
pub fn length(args: LengthArgs, ctx: &Context) -> Result<()> {
    run_one(ctx, "getStringLength", length_op(StringProcessor), args.text)
}

/// Run the add command.
pub fn add(args: AddArgs, ctx: &Context) -> Result<()> {
    run_one(ctx, "add", add_op(Calculator), (args.a, args.b))
}

/// Run the divide command.
pub fn divide(args: DivideArgs, ctx: &Context) -> Result<()> {
    run_one(ctx, "divide", divide_op(Calculator), (args.a, args.b))
}
