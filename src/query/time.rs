use crate::{
    ast::{Arg, Expr},
    error::Result,
    normalize::Op,
};

/// A timestamp `number` of `unit`s since the Unix epoch.
pub fn epoch(number: impl Into<Arg>, unit: impl Into<Arg>) -> Result<Expr> {
    Ok(Op::with("epoch", number)?.arg("unit", unit)?.build())
}

pub fn time_add(base: impl Into<Arg>, offset: impl Into<Arg>, unit: impl Into<Arg>) -> Result<Expr> {
    Ok(Op::with("time_add", base)?
        .arg("offset", offset)?
        .arg("unit", unit)?
        .build())
}

pub fn time_subtract(
    base: impl Into<Arg>,
    offset: impl Into<Arg>,
    unit: impl Into<Arg>,
) -> Result<Expr> {
    Ok(Op::with("time_subtract", base)?
        .arg("offset", offset)?
        .arg("unit", unit)?
        .build())
}

/// Whole `unit`s from `start` to `finish`.
pub fn time_diff(
    start: impl Into<Arg>,
    finish: impl Into<Arg>,
    unit: impl Into<Arg>,
) -> Result<Expr> {
    Ok(Op::with("time_diff", start)?
        .arg("other", finish)?
        .arg("unit", unit)?
        .build())
}

/// The transaction's timestamp.
pub fn now() -> Expr {
    Op::nullary("now").build()
}

unary_builders! {
    /// Parses an ISO-8601 timestamp; `"now"` is accepted too.
    time => "time";
    date => "date";
    to_seconds => "to_seconds";
    to_millis => "to_millis";
    to_micros => "to_micros";
    day_of_week => "day_of_week";
    day_of_year => "day_of_year";
    day_of_month => "day_of_month";
    hour => "hour";
    minute => "minute";
    second => "second";
    month => "month";
    year => "year";
}
