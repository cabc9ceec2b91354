use std::fmt;

use crate::ast::{Arg, Expr};

type Body = Box<dyn FnOnce(Vec<Expr>) -> Arg>;

/// A native function used as a lambda body.
///
/// The declared arity decides how many variables the lambda binds. The
/// function runs exactly once, while the enclosing builder call normalizes
/// its arguments, and receives one `Var` expression per bound variable.
pub struct Func {
    arity: usize,
    body: Body,
}

impl Func {
    /// Wraps a function whose parameter count is only known at runtime.
    ///
    /// The function receives exactly `arity` variable expressions.
    ///
    /// # Examples
    ///
    /// ```
    /// use fql_builder::{Func, q};
    ///
    /// let sum_all = Func::with_arity(3, |vars| q::add(vars));
    /// let expr = q::lambda_fn(sum_all).unwrap();
    /// assert_eq!(expr.tag(), Some("lambda"));
    /// ```
    pub fn with_arity<F, R>(arity: usize, f: F) -> Self
    where
        F: FnOnce(Vec<Expr>) -> R + 'static,
        R: Into<Arg>,
    {
        Func {
            arity,
            body: Box::new(move |vars| f(vars).into()),
        }
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    pub(crate) fn call(self, vars: Vec<Expr>) -> Arg {
        (self.body)(vars)
    }
}

impl fmt::Debug for Func {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Func").field("arity", &self.arity).finish_non_exhaustive()
    }
}

/// Conversion from a typed closure into a [`Func`].
///
/// Implemented for closures taking one to five `Expr` parameters; the marker
/// type `Params` only keeps the implementations apart.
pub trait IntoFunc<Params> {
    fn into_func(self) -> Func;
}

impl IntoFunc<Func> for Func {
    fn into_func(self) -> Func {
        self
    }
}

macro_rules! expr_param {
    ($_name:ident) => {
        Expr
    };
}

macro_rules! impl_into_func {
    ($arity:literal; $($name:ident),+) => {
        impl<F, R> IntoFunc<($(expr_param!($name),)+)> for F
        where
            F: FnOnce($(expr_param!($name)),+) -> R + 'static,
            R: Into<Arg>,
        {
            fn into_func(self) -> Func {
                Func::with_arity($arity, move |vars: Vec<Expr>| {
                    let mut vars = vars.into_iter();
                    $(let $name = vars.next().unwrap_or_else(Expr::null);)+
                    self($($name),+)
                })
            }
        }
    };
}

impl_into_func!(1; a);
impl_into_func!(2; a, b);
impl_into_func!(3; a, b, c);
impl_into_func!(4; a, b, c, d);
impl_into_func!(5; a, b, c, d, e);

/// Turns a closure into a lambda argument.
///
/// Closure parameters must be annotated as `Expr` so the arity can be
/// picked from the signature.
///
/// # Examples
///
/// ```
/// use fql_builder::{Expr, args, func, q};
///
/// let doubled = q::map(vec![1, 2, 3], func(|x: Expr| q::multiply(args![x, 2]))).unwrap();
/// assert_eq!(doubled.tag(), Some("map"));
/// ```
pub fn func<P>(f: impl IntoFunc<P>) -> Arg {
    Arg::Function(f.into_func())
}
