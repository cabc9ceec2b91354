//! Comparisons and boolean logic.
//!
//! Comparisons are chained: `lt(a, b, c)` is true when `a < b < c`.

variadic_builders! {
    lt => "lt";
    lte => "lte";
    gt => "gt";
    gte => "gte";
    and => "and";
    or => "or";
}

unary_builders! {
    not => "not";
}
