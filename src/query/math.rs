use crate::{
    ast::{Arg, Expr},
    error::Result,
    normalize::Op,
};

/// Rounds to `precision` decimal places (2 when left out).
pub fn round(value: impl Into<Arg>, precision: Option<Arg>) -> Result<Expr> {
    Ok(Op::with("round", value)?
        .optional("precision", precision)?
        .build())
}

/// Truncates to `precision` decimal places (2 when left out).
pub fn trunc(value: impl Into<Arg>, precision: Option<Arg>) -> Result<Expr> {
    Ok(Op::with("trunc", value)?
        .optional("precision", precision)?
        .build())
}

/// Length of the hypotenuse; with one side only, a right isoceles triangle.
pub fn hypot(a: impl Into<Arg>, b: Option<Arg>) -> Result<Expr> {
    Ok(Op::with("hypot", a)?.optional("b", b)?.build())
}

/// `base` raised to `exp` (squared when left out).
pub fn pow(base: impl Into<Arg>, exp: Option<Arg>) -> Result<Expr> {
    Ok(Op::with("pow", base)?.optional("exp", exp)?.build())
}

variadic_builders! {
    add => "add";
    bit_and => "bitand";
    bit_or => "bitor";
    bit_xor => "bitxor";
    divide => "divide";
    max => "max";
    min => "min";
    modulo => "modulo";
    multiply => "multiply";
    subtract => "subtract";
}

unary_builders! {
    abs => "abs";
    bit_not => "bitnot";
    ceil => "ceil";
    floor => "floor";
    sign => "sign";
    sqrt => "sqrt";
    acos => "acos";
    asin => "asin";
    atan => "atan";
    cos => "cos";
    cosh => "cosh";
    degrees => "degrees";
    exp => "exp";
    ln => "ln";
    log => "log";
    radians => "radians";
    sin => "sin";
    sinh => "sinh";
    tan => "tan";
    tanh => "tanh";
}

unary_builders! {
    count => "count";
    sum => "sum";
    mean => "mean";
    /// True when any element of a collection is true.
    any => "any";
    /// True when every element of a collection is true.
    all => "all";
}
