use super::*;
use crate::bind;
use pretty_assertions::assert_eq;

fn describe(name: &str, age: u32) -> String {
    format!("{name} is {age}")
}

#[test]
fn test_apply_nullary() {
    assert_eq!(apply(|| 42, ()), 42);
}

#[test]
fn test_apply_spreads_in_order() {
    assert_eq!(apply(describe, bind!["ada", 36]), "ada is 36");
    assert_eq!(apply(|a: i32, b: i32, c: i32| a - b - c, bind![10, 3, 2]), 5);
}

#[test]
fn test_apply_forwards_references() {
    let mut counter = 0;
    apply(|slot: &mut i32| *slot += 1, bind![&mut counter]);
    assert_eq!(counter, 1);

    let text = String::from("borrowed");
    let seen = apply(|s: &String| std::ptr::eq(s, &text), bind![&text]);
    assert!(seen);
}

#[test]
fn test_apply_moves_owned_values() {
    let owned = vec![1, 2, 3];
    let total = apply(|v: Vec<i32>| v.into_iter().sum::<i32>(), bind![owned]);
    assert_eq!(total, 6);
}

#[test]
fn test_apply_unit_action() {
    let mut log = Vec::new();
    apply(|x: char| log.push(x), bind!['z']);
    assert_eq!(log, vec!['z']);
}

#[test]
fn test_apply_output_is_the_action_return_type() {
    let first: Option<&str> = apply(|s: &'static str| s.split(',').next(), bind!["a,b"]);
    assert_eq!(first, Some("a"));

    let sum = apply(
        |a: u8, b: u8, c: u8, d: u8, e: u8, f: u8, g: u8, h: u8, i: u8, j: u8, k: u8, l: u8| {
            [a, b, c, d, e, f, g, h, i, j, k, l].iter().map(|&n| u32::from(n)).sum::<u32>()
        },
        bind![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12],
    );
    assert_eq!(sum, 78);
}
