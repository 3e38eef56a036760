/// Which way a seam runs.  Vertical seams run top to bottom and their
/// removal shrinks the width; horizontal seams run left to right and
/// their removal shrinks the height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Vertical,
    Horizontal,
}
