use tour_vector::demo::{run, DemoError, DemoOptions};
use tour_vector::BufferError;

fn output(opts: &DemoOptions, input: &str) -> Result<String, DemoError> {
    let mut out = Vec::new();
    run(opts, input.as_bytes(), &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn stores_input_in_slot_two() {
    let out = output(&DemoOptions::default(), "5.5\n").unwrap();
    assert_eq!(out, "5.5 3\n");
}

#[test]
fn container_path_matches_buffer_path() {
    let opts = DemoOptions {
        container: true,
        ..Default::default()
    };
    assert_eq!(output(&opts, "5.5\n").unwrap(), "5.5 3\n");
}

#[test]
fn dump_prints_every_slot() {
    for container in [false, true] {
        let opts = DemoOptions {
            container,
            dump: true,
            ..Default::default()
        };
        assert_eq!(output(&opts, "-2.25").unwrap(), "-2.25 3\n0 0 -2.25\n");
    }
}

#[test]
fn checked_rejects_index_past_end() {
    for container in [false, true] {
        let opts = DemoOptions {
            len: 2,
            checked: true,
            container,
            ..Default::default()
        };
        let err = output(&opts, "1").unwrap_err();
        assert!(matches!(
            err,
            DemoError::Buffer(BufferError::OutOfRange { index: 2, len: 2 })
        ));
    }
}

#[test]
fn checked_rejects_any_index_on_empty_buffer() {
    let opts = DemoOptions {
        len: 0,
        index: 0,
        checked: true,
        ..Default::default()
    };
    let err = output(&opts, "1").unwrap_err();
    assert!(matches!(
        err,
        DemoError::Buffer(BufferError::OutOfRange { index: 0, len: 0 })
    ));
}

#[test]
#[should_panic]
fn unchecked_index_past_end_panics() {
    let opts = DemoOptions {
        len: 2,
        ..Default::default()
    };
    let _ = output(&opts, "1");
}

#[test]
fn malformed_input_is_reported() {
    let err = output(&DemoOptions::default(), "five").unwrap_err();
    assert!(matches!(err, DemoError::Parse(_)));

    let err = output(&DemoOptions::default(), "").unwrap_err();
    assert!(matches!(err, DemoError::MissingInput));
}
