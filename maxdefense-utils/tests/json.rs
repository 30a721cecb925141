use maxdefense_utils::*;
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Limits {
    zeta: u32,
    alpha: f64,
    nested: Vec<Inner>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Inner {
    b: bool,
    a: String,
}

#[test]
fn test_jsonify_sorts_keys() {
    let limits = Limits {
        zeta: 3,
        alpha: 1.5,
        nested: vec![Inner {
            b: true,
            a: "x".to_string(),
        }],
    };
    assert_eq!(
        jsonify(&limits),
        r#"{"alpha":1.5,"nested":[{"a":"x","b":true}],"zeta":3}"#
    );
}

#[test]
fn test_jsonify_internal_leaves_scalars() {
    assert_eq!(jsonify_internal(&json!(7)), json!(7));
    assert_eq!(jsonify_internal(&json!("s")), json!("s"));
}

#[test]
fn test_dejsonify() {
    let inner: Inner = dejsonify(r#"{"a":"y","b":false}"#).unwrap();
    assert_eq!(
        inner,
        Inner {
            b: false,
            a: "y".to_string()
        }
    );
    assert!(dejsonify::<Inner>(r#"{"a":"y"}"#).is_err());
}

#[test]
fn test_read_json_arg_inline() {
    let inner: Inner = read_json_arg(r#"{"a":"inline","b":true}"#).unwrap();
    assert_eq!(inner.a, "inline");
    assert!(read_json_arg::<Inner>("not json").is_err());
}

#[test]
fn test_save_and_read_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inner.json");
    let inner = Inner {
        b: true,
        a: "file".to_string(),
    };
    save_json(&path, &inner).unwrap();

    let loaded: Inner = read_json_arg(path.to_str().unwrap()).unwrap();
    assert_eq!(loaded, inner);
}

#[test]
fn test_read_json_arg_missing_file() {
    let err = read_json_arg::<Inner>("/definitely/not/here.json").unwrap_err();
    assert!(err.to_string().contains("/definitely/not/here.json"));
}

#[test]
fn test_json_helpers_emit_debug_events() {
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inner.json");
    tracing::subscriber::with_default(subscriber, || {
        let inner = Inner {
            b: false,
            a: "logged".to_string(),
        };
        save_json(&path, &inner).unwrap();
        let loaded: Inner = read_json_arg(path.to_str().unwrap()).unwrap();
        assert_eq!(loaded, inner);
    });

    let logs = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
    assert!(logs.contains("saved json"), "{}", logs);
    assert!(logs.contains("read json argument"), "{}", logs);
}
