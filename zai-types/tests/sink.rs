use zai_types::{BoxError, DeltaSink};

#[test]
fn closure_is_a_sink() {
    let mut seen = Vec::new();
    let mut sink = |delta: &str| {
        seen.push(delta.to_string());
        Ok::<(), BoxError>(())
    };

    sink.accept("Hello").unwrap();
    sink.accept(" world").unwrap();
    drop(sink);
    assert_eq!(seen, vec!["Hello", " world"]);
}

#[test]
fn closure_failure_propagates() {
    let mut sink = |_delta: &str| -> Result<(), BoxError> { Err("stop".into()) };
    let err = sink.accept("Hi").unwrap_err();
    assert_eq!(err.to_string(), "stop");
}

#[test]
fn closure_with_custom_error_type() {
    let mut sink = |_delta: &str| -> Result<(), std::io::Error> {
        Err(std::io::Error::other("pipe closed"))
    };
    let err = sink.accept("Hi").unwrap_err();
    assert_eq!(err.to_string(), "pipe closed");
}

#[test]
fn vec_collects_increments() {
    let mut sink: Vec<String> = Vec::new();
    sink.accept("one").unwrap();
    sink.accept("two").unwrap();
    assert_eq!(sink, vec!["one", "two"]);
}
