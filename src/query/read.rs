use crate::{
    ast::{Arg, Expr},
    error::Result,
    normalize::{Op, unary},
};

/// Retrieves the document at `reference`, optionally as of `ts`.
pub fn get(reference: impl Into<Arg>, ts: Option<Arg>) -> Result<Expr> {
    Ok(Op::with("get", reference)?.optional("ts", ts)?.build())
}

pub fn exists(reference: impl Into<Arg>, ts: Option<Arg>) -> Result<Expr> {
    Ok(Op::with("exists", reference)?.optional("ts", ts)?.build())
}

pub fn key_from_secret(secret: impl Into<Arg>) -> Result<Expr> {
    unary("key_from_secret", secret)
}

/// Folds `collection` into a single value, starting from `initial`.
///
/// `lambda` receives the accumulator and the current element.
pub fn reduce(
    lambda: impl Into<Arg>,
    initial: impl Into<Arg>,
    collection: impl Into<Arg>,
) -> Result<Expr> {
    Ok(Op::with_lambda("reduce", lambda)?
        .arg("initial", initial)?
        .arg("collection", collection)?
        .build())
}

/// Optional fields of [`paginate`]. Unset fields are left out of the node.
#[derive(Debug, Default)]
pub struct PaginateOptions {
    pub size: Option<Arg>,
    pub after: Option<Arg>,
    pub before: Option<Arg>,
    pub ts: Option<Arg>,
    pub events: Option<Arg>,
    pub sources: Option<Arg>,
}

impl PaginateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, size: impl Into<Arg>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn after(mut self, cursor: impl Into<Arg>) -> Self {
        self.after = Some(cursor.into());
        self
    }

    pub fn before(mut self, cursor: impl Into<Arg>) -> Self {
        self.before = Some(cursor.into());
        self
    }

    pub fn ts(mut self, ts: impl Into<Arg>) -> Self {
        self.ts = Some(ts.into());
        self
    }

    pub fn events(mut self, events: impl Into<Arg>) -> Self {
        self.events = Some(events.into());
        self
    }

    pub fn sources(mut self, sources: impl Into<Arg>) -> Self {
        self.sources = Some(sources.into());
        self
    }
}

/// Pages through `set`; options are flattened into the node.
///
/// ```
/// use fql_builder::q::{self, PaginateOptions};
///
/// let page = q::paginate(q::collection("users", None), PaginateOptions::new().size(10)).unwrap();
/// assert_eq!(page.to_string(), r#"{"paginate":{"collection":"users"},"size":10}"#);
/// ```
pub fn paginate(set: impl Into<Arg>, options: PaginateOptions) -> Result<Expr> {
    let PaginateOptions {
        size,
        after,
        before,
        ts,
        events,
        sources,
    } = options;

    Ok(Op::with("paginate", set)?
        .optional("size", size)?
        .optional("after", after)?
        .optional("before", before)?
        .optional("ts", ts)?
        .optional("events", events)?
        .optional("sources", sources)?
        .build())
}
