/// A ternary expression macro.  The border clamps and predecessor
/// ranges in this crate are full of tiny either/or choices, and
/// spelling each one out as a block if-else buries the arithmetic
/// that actually matters.
#[macro_export]
macro_rules! cq {
    ($condition: expr, $_true: expr, $_false: expr) => {
        if $condition {
            $_true
        } else {
            $_false
        }
    };
}
