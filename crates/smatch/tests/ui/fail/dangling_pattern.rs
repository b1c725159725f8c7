//! Error: every pattern needs an action.

use smatch::smatch;

fn main() {
    let _ = smatch!(1_i32, 1 => || "one", 2);
}
