//! The process-wide registry behind `format` / `add_formatter`.
//!
//! Kept in its own test binary: registrations here are visible to every
//! test in the process.

use intl_format_core::{
    Formatter, InvalidValueError, Value, add_formatter, format, global_registry, values,
};
use std::sync::Arc;

struct Named {
    specifier: &'static str,
    label: &'static str,
}

impl Formatter for Named {
    fn claims(&self, specifier: &str) -> bool {
        specifier == self.specifier
    }

    fn render(&self, _: &str, value: &Value) -> Result<String, InvalidValueError> {
        Ok(format!("{}:{}", self.label, value))
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_global_registry_lifecycle_and_concurrent_reads() {
    // Created empty: nothing is claimed yet.
    assert_eq!(format("%g", &values![1]).unwrap(), "%g");

    add_formatter(Arc::new(Named {
        specifier: "g",
        label: "old",
    }));
    add_formatter(Arc::new(Named {
        specifier: "g",
        label: "new",
    }));
    assert_eq!(global_registry().len(), 2);

    let mut handles = Vec::new();
    for i in 0..16i64 {
        handles.push(tokio::spawn(async move {
            format("%g and %h", &values![i, "x"]).unwrap()
        }));
    }

    // Registration while readers are running is serialized by the lock.
    add_formatter(Arc::new(Named {
        specifier: "h",
        label: "h",
    }));

    for (i, handle) in handles.into_iter().enumerate() {
        let out = handle.await.unwrap();
        assert!(
            out == format!("new:{} and %h", i) || out == format!("new:{} and h:x", i),
            "unexpected output {out}"
        );
    }

    assert_eq!(format("%g and %h", &values![7, "x"]).unwrap(), "new:7 and h:x");
}
