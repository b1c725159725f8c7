//! Trace events emitted by the match engine.

#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use std::io;
use std::sync::{Arc, Mutex};

use pretty_assertions::assert_eq;
use smatch::placeholders::{_x, otherwise};
use smatch::{smatch, NoMatch};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture<R>(run: impl FnOnce() -> R) -> (R, String) {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_writer(move || writer.clone()),
        )
        .with(EnvFilter::new("smatch=trace"));
    let result = tracing::subscriber::with_default(subscriber, run);
    (result, captured.text())
}

#[test]
fn selected_arm_is_traced_with_its_index() {
    let (hit, log) = capture(|| smatch!(5_i32, _x.lt(0) => |_| "neg", _x.gt(0) => |_| "pos"));
    assert_eq!(hit, Ok("pos"));
    assert!(log.contains("arm matched"), "log was: {log}");
    assert!(log.contains("arm=1"), "log was: {log}");
    assert!(log.contains("smatch::engine"), "log was: {log}");
}

#[test]
fn rejected_arms_are_silent() {
    let (hit, log) = capture(|| smatch!(0_i32, _x.lt(0) => |_| "neg", _x.gt(0) => |_| "pos"));
    assert_eq!(hit, Err(NoMatch));
    assert_eq!(log, "");
}

#[test]
fn wildcard_arm_is_traced() {
    let (hit, log) = capture(|| smatch!("anything", otherwise => || ()));
    assert_eq!(hit, Ok(()));
    assert!(log.contains("arm=0"), "log was: {log}");
}
