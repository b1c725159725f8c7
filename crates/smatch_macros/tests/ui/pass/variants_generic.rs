//! Generic enum, module override and keyword-named enum.

use smatch::placeholders::{_x, otherwise};
use smatch::{smatch, Variants};

#[derive(Variants)]
#[smatch(module = reply)]
enum Response<T, E> {
    Done(T),
    Failed(E),
    Pending,
}

#[derive(Variants)]
enum Type {
    Int,
    Text,
}

fn describe(response: &Response<u32, String>) -> String {
    smatch!(*response,
        reply::Done(_x.gt(100)) => |n| format!("big {n}"),
        reply::Done(_x) => |n| format!("small {n}"),
        reply::Failed(otherwise) => || String::from("failed"),
        reply::Pending => || String::from("pending"),
    )
    .unwrap_or_default()
}

fn main() {
    assert_eq!(describe(&Response::Done(500)), "big 500");
    assert_eq!(describe(&Response::Done(5)), "small 5");
    assert_eq!(describe(&Response::Failed(String::from("x"))), "failed");
    assert_eq!(describe(&Response::Pending), "pending");

    let kind = smatch!(Type::Text, r#type::Int => || 1, r#type::Text => || 2);
    assert_eq!(kind, Ok(2));
}
