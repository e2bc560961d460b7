//! The full demo: every sample operation through the wrapper, including a failure.

use anyhow::Result;

use super::run::{call_logged, RunReport};
use crate::business::{add_op, divide_op, reverse_op, upper_op, Calculator, StringProcessor};
use crate::context::Context;

/// Run the demo command.
pub fn run(ctx: &Context) -> Result<()> {
    let demo = &ctx.config.demo;
    let processor = StringProcessor;
    let calc = Calculator;
    let mut reports: Vec<RunReport> = Vec::new();

    ctx.output.header("=== Logging Decorator Demo ===");
    ctx.output.line("");

    ctx.output.step(1, "Wrapping a string operation:");
    let input = demo.reverse_input.clone();
    let (report, outcome) = call_logged(ctx, "reverseString", reverse_op(processor), input);
    finish(ctx, &mut reports, report, outcome);

    ctx.output.step(2, "Wrapping a method reference:");
    let input = demo.upper_input.clone();
    let (report, outcome) = call_logged(ctx, "toUpperCase", upper_op(processor), input);
    finish(ctx, &mut reports, report, outcome);

    ctx.output.step(3, "Using with calculator operations:");
    let [a, b] = demo.add_operands;
    let (report, outcome) = call_logged(ctx, "add", add_op(calc), (a, b));
    finish(ctx, &mut reports, report, outcome);

    ctx.output.step(4, "Demonstrating error handling:");
    let [a, b] = demo.divide_operands;
    let (report, outcome) = call_logged(ctx, "divide", divide_op(calc), (a, b));
    finish(ctx, &mut reports, report, outcome);

    ctx.output.header("=== Demo Complete ===");

    if ctx.output.is_json() {
        ctx.output.json(&reports);
    }
    Ok(())
}

/// Print the outcome of one scenario the way the caller of a plain operation would.
fn finish<R: std::fmt::Display, E: std::fmt::Display>(
    ctx: &Context,
    reports: &mut Vec<RunReport>,
    report: RunReport,
    outcome: Result<R, E>,
) {
    match outcome {
        Ok(value) => ctx.output.line(&format!("Final result: {}\n", value)),
        Err(e) => ctx.output.line(&format!("Caught exception in main: {}\n", e)),
    }
    reports.push(report);
}
