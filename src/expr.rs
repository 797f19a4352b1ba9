//! Field expressions: runtime lengths (`varLen`) and presence gates (`optional`).
//!
//! Expressions are evaluated against one struct instance. Values are `u64`; a condition
//! holds when its value is nonzero.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expr {
    /// Primitive-typed sibling field of the enclosing struct.
    Field(String),
    /// Named schema constant.
    Const(String),
    Literal(u64),
    Eq(Box<Expr>, Box<Expr>),
    Ne(Box<Expr>, Box<Expr>),
    And(Box<Expr>, Box<Expr>),
    Or(Box<Expr>, Box<Expr>),
    Not(Box<Expr>),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExprError {
    #[error("unknown field in expression: {0}")]
    UnknownField(String),
    #[error("unknown constant in expression: {0}")]
    UnknownConstant(String),
}

impl Expr {
    pub fn field(name: impl Into<String>) -> Self {
        Expr::Field(name.into())
    }

    pub fn constant(name: impl Into<String>) -> Self {
        Expr::Const(name.into())
    }

    pub fn eq(a: Expr, b: Expr) -> Self {
        Expr::Eq(Box::new(a), Box::new(b))
    }

    pub fn ne(a: Expr, b: Expr) -> Self {
        Expr::Ne(Box::new(a), Box::new(b))
    }

    pub fn and(a: Expr, b: Expr) -> Self {
        Expr::And(Box::new(a), Box::new(b))
    }

    pub fn or(a: Expr, b: Expr) -> Self {
        Expr::Or(Box::new(a), Box::new(b))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(a: Expr) -> Self {
        Expr::Not(Box::new(a))
    }

    /// Evaluate with `lookup` resolving sibling fields.
    pub fn eval<F>(&self, lookup: &F, constants: &BTreeMap<String, u64>) -> Result<u64, ExprError>
    where
        F: Fn(&str) -> Option<u64>,
    {
        Ok(match self {
            Expr::Field(name) => lookup(name).ok_or_else(|| ExprError::UnknownField(name.clone()))?,
            Expr::Const(name) => *constants
                .get(name)
                .ok_or_else(|| ExprError::UnknownConstant(name.clone()))?,
            Expr::Literal(v) => *v,
            Expr::Eq(a, b) => u64::from(a.eval(lookup, constants)? == b.eval(lookup, constants)?),
            Expr::Ne(a, b) => u64::from(a.eval(lookup, constants)? != b.eval(lookup, constants)?),
            Expr::And(a, b) => {
                u64::from(a.eval(lookup, constants)? != 0 && b.eval(lookup, constants)? != 0)
            }
            Expr::Or(a, b) => {
                u64::from(a.eval(lookup, constants)? != 0 || b.eval(lookup, constants)? != 0)
            }
            Expr::Not(a) => u64::from(a.eval(lookup, constants)? == 0),
        })
    }

    pub fn holds<F>(&self, lookup: &F, constants: &BTreeMap<String, u64>) -> Result<bool, ExprError>
    where
        F: Fn(&str) -> Option<u64>,
    {
        Ok(self.eval(lookup, constants)? != 0)
    }

    /// Sibling fields this expression reads, in first-use order.
    pub fn fields(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_fields(&mut out);
        out
    }

    fn collect_fields<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Expr::Field(name) => {
                if !out.contains(&name.as_str()) {
                    out.push(name);
                }
            }
            Expr::Const(_) | Expr::Literal(_) => {}
            Expr::Eq(a, b) | Expr::Ne(a, b) | Expr::And(a, b) | Expr::Or(a, b) => {
                a.collect_fields(out);
                b.collect_fields(out);
            }
            Expr::Not(a) => a.collect_fields(out),
        }
    }

    /// Constants this expression reads.
    pub fn constants(&self) -> Vec<&str> {
        match self {
            Expr::Const(name) => vec![name.as_str()],
            Expr::Field(_) | Expr::Literal(_) => Vec::new(),
            Expr::Eq(a, b) | Expr::Ne(a, b) | Expr::And(a, b) | Expr::Or(a, b) => {
                let mut v = a.constants();
                v.extend(b.constants());
                v
            }
            Expr::Not(a) => a.constants(),
        }
    }

    /// Render as a Rust expression of type `u64`; `member` maps a field name to its access path.
    pub fn render_value<M>(&self, member: &M) -> String
    where
        M: Fn(&str) -> String,
    {
        match self {
            Expr::Field(name) => format!("({} as u64)", member(name)),
            Expr::Const(name) => name.clone(),
            Expr::Literal(v) => format!("{}u64", v),
            Expr::Not(_) | Expr::Eq(..) | Expr::Ne(..) | Expr::And(..) | Expr::Or(..) => {
                format!("(({}) as u64)", self.render_cond(member))
            }
        }
    }

    /// Render as a Rust expression of type `bool`.
    pub fn render_cond<M>(&self, member: &M) -> String
    where
        M: Fn(&str) -> String,
    {
        match self {
            Expr::Field(_) | Expr::Const(_) | Expr::Literal(_) => {
                format!("{} != 0", self.render_value(member))
            }
            Expr::Eq(a, b) => format!("{} == {}", a.render_value(member), b.render_value(member)),
            Expr::Ne(a, b) => format!("{} != {}", a.render_value(member), b.render_value(member)),
            Expr::And(a, b) => format!("({}) && ({})", a.render_cond(member), b.render_cond(member)),
            Expr::Or(a, b) => format!("({}) || ({})", a.render_cond(member), b.render_cond(member)),
            Expr::Not(a) => format!("!({})", a.render_cond(member)),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Field(name) => write!(f, "obj.{}", name),
            Expr::Const(name) => write!(f, "{}", name),
            Expr::Literal(v) => write!(f, "{}", v),
            Expr::Eq(a, b) => write!(f, "({} == {})", a, b),
            Expr::Ne(a, b) => write!(f, "({} != {})", a, b),
            Expr::And(a, b) => write!(f, "({} && {})", a, b),
            Expr::Or(a, b) => write!(f, "({} || {})", a, b),
            Expr::Not(a) => write!(f, "!{}", a),
        }
    }
}
