//! Integration tests for the Stackifier facade
//!
//! Covers the fluent builder, the result query surface, description
//! rendering and deserializer pluggability, mirroring how a log-triage
//! caller would drive the library.

use stackify::stackify::{
    Deserializer, ReconstructedError, StackifyError, Stackifier, StackTraceDeserializer,
};

const SAMPLE: &str = include_str!("fixtures/stacktrace_sample.txt");

#[test]
fn builder_wires_libraries_and_deserializer() {
    let stackifier = Stackifier::builder()
        .library("org.apache.commons")
        .libraries(["java", "sun", "junit"])
        .deserializer(StackTraceDeserializer::new())
        .build();

    let libraries = stackifier.libraries();
    assert!(libraries.contains(&"org.apache.commons".to_string()));
    assert!(libraries.contains(&"java".to_string()));
    assert!(libraries.contains(&"sun".to_string()));
    assert!(libraries.contains(&"junit".to_string()));
}

#[test]
fn library_detection_flag_is_carried() {
    let stackifier = Stackifier::builder().library_detection(true).build();
    assert!(stackifier.library_detection());
}

#[test]
fn description_is_the_outermost_error() {
    let stackifier = Stackifier::new(vec!["java".to_string()]);
    let result = stackifier.stackify(SAMPLE).unwrap();
    assert_eq!(
        result.description(),
        "java.lang.IllegalStateException: failed to load configuration"
    );
    assert_eq!(result.stacktrace(), SAMPLE);
}

#[test]
fn empty_and_whitespace_inputs_are_rejected() {
    let stackifier = Stackifier::new(Vec::new());
    assert!(matches!(
        stackifier.stackify(""),
        Err(StackifyError::InvalidInput(_))
    ));
    assert!(matches!(
        stackifier.stackify("  \n\t  "),
        Err(StackifyError::InvalidInput(_))
    ));
}

#[test]
fn pretty_string_renders_description_and_group_headers() {
    let stackifier = Stackifier::builder()
        .libraries(["java", "sun", "junit", "org.apache.commons", "org.pitest"])
        .build();
    let rendered = stackifier.stackify(SAMPLE).unwrap().pretty_string();

    assert!(rendered.starts_with("java.lang.IllegalStateException: failed to load configuration\n"));
    assert!(rendered.contains("\n(4) org.apache.commons\n"));
    assert!(rendered.contains("\n(6) junit\n"));
    assert!(rendered.contains("\t\tjunit.framework.TestCase.runBare(TestCase.java:141)\n"));
    assert!(rendered.contains("\t\tsun.reflect.NativeMethodAccessorImpl.invoke0(Native Method)\n"));
}

/// A strategy that ignores the text and returns a canned chain, standing
/// in for callers with their own trace format.
struct CannedDeserializer;

impl Deserializer for CannedDeserializer {
    fn deserialize(&self, _stacktrace: &str) -> Result<ReconstructedError, StackifyError> {
        Ok(ReconstructedError::new(
            "com.acme.CannedException",
            "always the same",
        ))
    }
}

#[test]
fn custom_deserializer_replaces_the_default_strategy() {
    let stackifier = Stackifier::builder()
        .deserializer(CannedDeserializer)
        .build();
    let result = stackifier.stackify("anything at all").unwrap();
    assert_eq!(
        result.description(),
        "com.acme.CannedException: always the same"
    );
    assert!(result.groups().is_empty());
}

#[test]
fn repeated_runs_are_structurally_equal() {
    let stackifier = Stackifier::builder()
        .libraries(["java", "junit"])
        .build();
    let first = stackifier.stackify(SAMPLE).unwrap();
    let second = stackifier.stackify(SAMPLE).unwrap();
    assert_eq!(first, second);
}

#[test]
fn result_serializes_to_json_and_back() {
    let stackifier = Stackifier::new(vec!["java".to_string()]);
    let result = stackifier.stackify(SAMPLE).unwrap();
    let json = serde_json::to_string(&result).unwrap();
    let restored: stackify::stackify::Stackified = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, result);
}
