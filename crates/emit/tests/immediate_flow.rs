//! End-to-end tests for the immediate emission flow: gate, pack, hand off.

use channel::{Channel, Severity, SeverityFlags, global_table};
use emit::{CollectingSink, Emitter, SendOutcome, tracelog, tracelog_error};
use record::{ArgValue, ERRNO_LEN, FormatDescriptor, HEADER_LEN, ModuleHandle, RecordView};
use std::sync::Arc;

fn set_flags(subsystem: &str, flags: SeverityFlags) {
    global_table().update(|config| config.set_override(subsystem, None, flags));
}

#[test]
fn delivered_record_decodes_to_the_emitted_arguments() {
    set_flags("com.example.flow.decode", SeverityFlags::all_on());
    let sink = Arc::new(CollectingSink::new());
    let emitter = Emitter::new(sink.clone());
    let channel = Channel::new("com.example.flow.decode", "network");

    let args = [ArgValue::from(404i32), ArgValue::from("connection reset")];
    let outcome = emitter.log(&channel, Severity::Error, "request failed: {} ({})", &args);
    assert_eq!(outcome, SendOutcome::Sent);

    let captured = sink.captured();
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].subsystem, "com.example.flow.decode");
    assert_eq!(captured[0].category, "network");
    assert_eq!(captured[0].severity, Severity::Error);

    let descriptor = FormatDescriptor::from_args(&args);
    assert_eq!(captured[0].bytes.len(), descriptor.record_size());
    let view = RecordView::decode(&captured[0].bytes, &descriptor).unwrap();
    assert_eq!(view.args(), &args);
    assert_eq!(view.module(), ModuleHandle::current());
}

#[test]
fn zero_argument_emission_is_header_plus_errno() {
    set_flags("com.example.flow.empty", SeverityFlags::all_on());
    let sink = Arc::new(CollectingSink::new());
    let emitter = Emitter::new(sink.clone());
    let channel = Channel::new("com.example.flow.empty", "lifecycle");

    emitter.log(&channel, Severity::Default, "started", &[]);
    let captured = sink.captured();
    assert_eq!(captured[0].bytes.len(), HEADER_LEN + ERRNO_LEN);
}

#[test]
fn each_emission_is_an_independent_record() {
    set_flags("com.example.flow.repeat", SeverityFlags::all_on());
    let sink = Arc::new(CollectingSink::new());
    let emitter = Emitter::new(sink.clone());
    let channel = Channel::new("com.example.flow.repeat", "network");

    for n in 0..5i32 {
        emitter.log(&channel, Severity::Info, "attempt {}", &[ArgValue::from(n)]);
    }
    let captured = sink.captured();
    assert_eq!(captured.len(), 5);

    let descriptor = FormatDescriptor::from_kinds(vec![record::ArgKind::Int32]);
    for (n, record) in captured.iter().enumerate() {
        let view = RecordView::decode(&record.bytes, &descriptor).unwrap();
        assert_eq!(view.args(), &[ArgValue::from(n as i32)]);
    }
}

#[test]
fn oversized_records_still_flow() {
    set_flags("com.example.flow.large", SeverityFlags::all_on());
    let sink = Arc::new(CollectingSink::new());
    let emitter = Emitter::new(sink.clone());
    let channel = Channel::new("com.example.flow.large", "bulk");

    // 100 eight-byte arguments push the record well past the scratch size.
    let args: Vec<ArgValue> = (0..100i64).map(ArgValue::from).collect();
    let outcome = emitter.log(&channel, Severity::Debug, "bulk", &args);
    assert_eq!(outcome, SendOutcome::Sent);

    let captured = sink.captured();
    let descriptor = FormatDescriptor::from_args(&args);
    assert_eq!(captured[0].bytes.len(), descriptor.record_size());
    let view = RecordView::decode(&captured[0].bytes, &descriptor).unwrap();
    assert_eq!(view.args(), args.as_slice());
}

#[test]
fn macros_convert_arguments_and_stamp_the_call_site() {
    set_flags("com.example.flow.macros", SeverityFlags::all_on());
    // Macros go through the process-wide emitter; installing the collector
    // here makes this test own the global slot for the whole binary.
    let sink = Arc::new(CollectingSink::new());
    assert!(emit::init(sink.clone()));

    let channel = Channel::new("com.example.flow.macros", "network");
    tracelog!(channel, Severity::Info, "peer {} retries {}", "10.0.0.1", 3i32);
    tracelog_error!(channel, "gave up after {}", 3i32);

    let captured = sink.captured();
    assert_eq!(captured.len(), 2);
    assert_eq!(captured[0].severity, Severity::Info);
    assert_eq!(captured[1].severity, Severity::Error);

    let descriptor = FormatDescriptor::from_kinds(vec![record::ArgKind::Int32]);
    let view = RecordView::decode(&captured[1].bytes, &descriptor).unwrap();
    assert_eq!(view.args(), &[ArgValue::from(3i32)]);
    assert_ne!(view.call_site().as_u64(), 0);
}
