pub mod printer;

use serde::Serialize;

use crate::scanner::token::{Literal, Token};

/// Expression nodes for the parser this crate will grow into. A closed
/// enum keeps dispatch a plain `match`; adding a node kind is a new
/// variant here plus arms in the places the compiler then points at.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum Expr {
    Binary(BinaryExpr),
    Grouping(GroupingExpr),
    Literal(LiteralExpr),
    Unary(UnaryExpr),
}

#[derive(Debug, Clone, Serialize)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: Token,
    pub right: Box<Expr>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GroupingExpr {
    pub expression: Box<Expr>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LiteralExpr {
    pub value: Literal,
}

#[derive(Debug, Clone, Serialize)]
pub struct UnaryExpr {
    pub operator: Token,
    pub right: Box<Expr>,
}
