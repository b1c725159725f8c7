use super::*;
use crate::exhaustive::Missing;
use crate::matcher::{match_check, match_get, Otherwise};
use crate::placeholders::{_x, _y};
use pretty_assertions::assert_eq;
use std::marker::PhantomData;

struct Account {
    id: u32,
    owner: String,
    balance: i64,
}

impl Structure for Account {
    type Fields<'s> = (&'s u32, (&'s String, (&'s i64, ())))
    where
        Self: 's;

    fn fields(&self) -> Self::Fields<'_> {
        (&self.id, (&self.owner, (&self.balance, ())))
    }
}

fn account() -> Account {
    Account {
        id: 7,
        owner: String::from("grace"),
        balance: -20,
    }
}

fn flag_of<T: Totality>(_pattern: &T) -> PhantomData<T::Flag> {
    PhantomData
}

#[test]
fn test_tuple_fields_in_declaration_order() {
    let pair = (1_u8, 'b');
    let (first, (second, ())) = pair.fields();
    assert!(std::ptr::eq(first, &pair.0));
    assert!(std::ptr::eq(second, &pair.1));
}

#[test]
fn test_full_pattern_matches_every_field() {
    let subject = (1_i32, 2_i32);
    assert!(match_check(&subject, &ds!(1_i32, 2_i32)));
    assert!(!match_check(&subject, &ds!(1_i32, 3_i32)));
    assert!(!match_check(&subject, &ds!(0_i32, 2_i32)));
}

#[test]
fn test_prefix_pattern_ignores_trailing_fields() {
    let subject = account();
    assert!(match_check(&subject, &ds!(7_u32)));
    assert!(match_check(&subject, &ds!(7_u32, "grace")));
    assert!(match_check(&subject, &ds!()));
    assert!(!match_check(&subject, &ds!(8_u32)));
}

#[test]
fn test_extraction_concatenates_in_field_order() {
    let subject = account();
    let bound = match_get(&subject, &ds!(_x, Otherwise, _y));
    let (id, balance) = crate::Bindings::into_tuple(bound);
    assert_eq!(*id, 7);
    assert_eq!(*balance, -20);
    assert!(std::ptr::eq(balance, &subject.balance));
}

#[test]
fn test_extraction_skips_fields_without_bindings() {
    let subject = account();
    let bound = match_get(&subject, &ds!(7_u32, _x));
    let (owner,) = crate::Bindings::into_tuple(bound);
    assert_eq!(owner, "grace");
}

#[test]
fn test_check_short_circuits_left_to_right() {
    let seen = std::cell::Cell::new(false);
    let guard = crate::pred(|_: &String| {
        seen.set(true);
        true
    });
    assert!(!match_check(&account(), &ds!(0_u32, guard)));
    assert!(!seen.get());
}

#[test]
fn test_nested_structures() {
    let subject = ((1_i32, 'a'), "tail");
    assert!(match_check(&subject, &ds!(ds!(1_i32, 'a'), "tail")));
    assert!(!match_check(&subject, &ds!(ds!(1_i32, 'b'))));

    let bound = match_get(&subject, &ds!(ds!(_x, _y), _x));
    let (number, letter, text) = crate::Bindings::into_tuple(bound);
    assert_eq!((*number, *letter, *text), (1, 'a', "tail"));
}

#[test]
fn test_function_and_macro_spellings_agree() {
    assert_eq!(ds((1, 2)), ds!(1, 2));
    assert_eq!(ds!(1).into_inner(), (1, Rest));
    assert_eq!(Destructure::new((1, Rest)), ds!(1));
}

#[test]
fn test_totality_requires_every_sub_pattern_total() {
    let _: PhantomData<Covered> = flag_of(&ds!(_x, Otherwise));
    let _: PhantomData<Covered> = flag_of(&ds!());
    let _: PhantomData<Missing> = flag_of(&ds!(_x, 3_u8));
}
