//! End-to-end lifecycle tests for wrapped operations.
//!
//! Every test captures lines through a `MemorySink` and checks the ordering
//! and content of the emitted events.

use std::fmt;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use chrono::NaiveDateTime;
use oplog_core::{EventKind, InvocationPhase, LifecycleEvent, TIMESTAMP_FORMAT};
use oplog_observability::{with_logging_to, LogLine, MemorySink, Operation, OperationError};

/// Failure type that is not `OperationError`, to check the error type passes through.
#[derive(Debug, Clone, PartialEq)]
struct DivideByZero;

impl fmt::Display for DivideByZero {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/ by zero")
    }
}

impl std::error::Error for DivideByZero {}

fn reverse_string(input: &str) -> Result<String, OperationError> {
    Ok(input.chars().rev().collect())
}

fn add((a, b): (i32, i32)) -> Result<i32, OperationError> {
    Ok(a + b)
}

fn divide((a, b): (f64, f64)) -> Result<f64, DivideByZero> {
    if b == 0.0 {
        return Err(DivideByZero);
    }
    Ok(a / b)
}

fn strip_timestamp(line: &str) -> &str {
    // "[yyyy-MM-dd HH:mm:ss] " is 22 characters.
    &line[22..]
}

fn assert_valid_invocation(lines: &[LogLine]) -> InvocationPhase {
    InvocationPhase::replay(lines.iter().map(LogLine::kind))
        .unwrap_or_else(|| panic!("invalid event sequence: {:?}", lines))
}

#[test]
fn test_reverse_string_scenario() {
    let sink = MemorySink::new();
    let logged = with_logging_to(reverse_string, "reverseString", sink.clone());

    let result = logged.execute("Hello World").unwrap();
    assert_eq!(result, "dlroW olleH");

    let lines = sink.lines();
    assert_eq!(lines.len(), 4);
    assert_eq!(
        strip_timestamp(&lines[0]),
        "[ENTRY] reverseString called with parameter: Hello World"
    );
    assert_eq!(strip_timestamp(&lines[1]), "[EXIT] reverseString executed successfully");
    assert_eq!(
        strip_timestamp(&lines[2]),
        "[RESULT] reverseString returned: dlroW olleH"
    );
    assert!(strip_timestamp(&lines[3]).starts_with("[PERFORMANCE] reverseString "));
    assert!(lines[3].ends_with(" ms"));

    assert_eq!(assert_valid_invocation(&sink.entries()), InvocationPhase::Returned);
}

#[test]
fn test_owned_string_values_render_as_plain_text() {
    let sink = MemorySink::new();
    let logged = with_logging_to(
        |input: String| reverse_string(&input),
        "reverseString",
        sink.clone(),
    );

    logged.execute("Hello World".to_string()).unwrap();

    let lines = sink.lines();
    assert!(lines[0].ends_with("called with parameter: Hello World"));
    assert!(lines[2].ends_with("returned: dlroW olleH"));
    assert!(lines.iter().all(|line| !line.contains('"')));
}

#[test]
fn test_add_scenario() {
    let sink = MemorySink::new();
    let logged = with_logging_to(add, "add", sink.clone());

    assert_eq!(logged.execute((15, 25)).unwrap(), 40);

    let lines = sink.lines();
    assert_eq!(
        sink.kinds(),
        vec![
            EventKind::Entry,
            EventKind::Exit,
            EventKind::Result,
            EventKind::Performance,
        ]
    );
    assert_eq!(strip_timestamp(&lines[0]), "[ENTRY] add called with parameter: (15, 25)");
    assert_eq!(strip_timestamp(&lines[2]), "[RESULT] add returned: 40");
    assert!(sink.entries().iter().all(|line| line.label == "add"));
}

#[test]
fn test_divide_by_zero_scenario() {
    let sink = MemorySink::new();
    let logged = with_logging_to(divide, "divide", sink.clone());

    let err = logged.execute((10.0, 0.0)).unwrap_err();
    assert_eq!(err, DivideByZero);

    let entries = sink.entries();
    assert_eq!(
        sink.kinds(),
        vec![EventKind::Entry, EventKind::Error, EventKind::Performance]
    );
    assert_eq!(assert_valid_invocation(&entries), InvocationPhase::Rethrown);

    match &entries[1].event {
        LifecycleEvent::Error { message } => assert!(!message.is_empty()),
        other => panic!("expected error event, got {:?}", other),
    }
    let lines = sink.lines();
    assert_eq!(
        strip_timestamp(&lines[0]),
        "[ENTRY] divide called with parameter: (10.0, 0.0)"
    );
    assert_eq!(
        strip_timestamp(&lines[1]),
        "[ERROR] divide failed with exception: / by zero"
    );
}

#[test]
fn test_divide_success_passes_through() {
    let sink = MemorySink::new();
    let logged = with_logging_to(divide, "divide", sink.clone());

    assert_eq!(logged.execute((10.0, 4.0)), Ok(2.5));
    assert_eq!(strip_timestamp(&sink.lines()[2]), "[RESULT] divide returned: 2.5");
}

#[test]
fn test_timestamps_use_display_format() {
    let sink = MemorySink::new();
    let logged = with_logging_to(add, "add", sink.clone());
    logged.execute((1, 2)).unwrap();

    for line in sink.entries() {
        assert!(NaiveDateTime::parse_from_str(&line.timestamp, TIMESTAMP_FORMAT).is_ok());
    }
}

#[test]
fn test_performance_reflects_elapsed_time() {
    let sink = MemorySink::new();
    let slow = with_logging_to(
        |ms: u64| -> Result<u64, OperationError> {
            thread::sleep(Duration::from_millis(ms));
            Ok(ms)
        },
        "sleep",
        sink.clone(),
    );

    slow.execute(20).unwrap();

    let entries = sink.entries();
    match entries[3].event {
        LifecycleEvent::Performance { elapsed } => assert!(elapsed >= Duration::from_millis(20)),
        ref other => panic!("expected performance event, got {:?}", other),
    }
}

#[test]
fn test_nested_wrapping_emits_nested_groups() {
    let sink = MemorySink::new();
    let inner = with_logging_to(add, "inner", sink.clone());
    let outer = with_logging_to(inner, "outer", sink.clone());

    assert_eq!(outer.execute((2, 3)).unwrap(), 5);

    let sequence: Vec<(String, EventKind)> = sink
        .entries()
        .into_iter()
        .map(|line| (line.label.clone(), line.kind()))
        .collect();
    let expected: Vec<(String, EventKind)> = [
        ("outer", EventKind::Entry),
        ("inner", EventKind::Entry),
        ("inner", EventKind::Exit),
        ("inner", EventKind::Result),
        ("inner", EventKind::Performance),
        ("outer", EventKind::Exit),
        ("outer", EventKind::Result),
        ("outer", EventKind::Performance),
    ]
    .into_iter()
    .map(|(label, kind)| (label.to_string(), kind))
    .collect();
    assert_eq!(sequence, expected);

    assert_eq!(assert_valid_invocation(&sink.for_label("inner")), InvocationPhase::Returned);
    assert_eq!(assert_valid_invocation(&sink.for_label("outer")), InvocationPhase::Returned);
}

#[test]
fn test_nested_wrapping_forwards_failure() {
    let sink = MemorySink::new();
    let inner = with_logging_to(divide, "inner", sink.clone());
    let outer = with_logging_to(inner, "outer", sink.clone());

    assert_eq!(outer.execute((1.0, 0.0)), Err(DivideByZero));
    assert_eq!(
        sink.kinds(),
        vec![
            EventKind::Entry,
            EventKind::Entry,
            EventKind::Error,
            EventKind::Performance,
            EventKind::Error,
            EventKind::Performance,
        ]
    );
    assert_eq!(assert_valid_invocation(&sink.for_label("outer")), InvocationPhase::Rethrown);
}

#[test]
fn test_concurrent_invocations_are_independent() {
    let sink = MemorySink::new();
    let logged = Arc::new(with_logging_to(add, "add", sink.clone()));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let logged = Arc::clone(&logged);
            thread::spawn(move || logged.execute((i, i)))
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap().unwrap(), 2 * i as i32);
    }

    assert_eq!(sink.len(), 8 * 4);
    let kinds = sink.kinds();
    assert_eq!(kinds.iter().filter(|k| **k == EventKind::Entry).count(), 8);
    assert_eq!(kinds.iter().filter(|k| **k == EventKind::Performance).count(), 8);
    assert!(!kinds.contains(&EventKind::Error));
}
