use crate::ast::*;

/// Render an expression in parenthesized prefix form, the way you would
/// sketch it on paper: `(* (- 123) (group 45.67))`.
pub fn to_sexp(expr: &Expr) -> String {
    let mut buf = String::new();
    sexp_expr(&mut buf, expr);
    buf
}

pub fn to_json(expr: &Expr) -> String {
    serde_json::to_string_pretty(expr).expect("AST should be serializable")
}

fn sexp_expr(buf: &mut String, expr: &Expr) {
    match expr {
        Expr::Binary(b) => parenthesize(buf, &b.operator.lexeme, &[&b.left, &b.right]),
        Expr::Grouping(g) => parenthesize(buf, "group", &[&g.expression]),
        Expr::Literal(l) => buf.push_str(&l.value.to_string()),
        Expr::Unary(u) => parenthesize(buf, &u.operator.lexeme, &[&u.right]),
    }
}

fn parenthesize(buf: &mut String, name: &str, exprs: &[&Expr]) {
    buf.push('(');
    buf.push_str(name);
    for expr in exprs {
        buf.push(' ');
        sexp_expr(buf, expr);
    }
    buf.push(')');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::token::{Literal, Token, TokenKind};

    fn literal(value: Literal) -> Expr {
        Expr::Literal(LiteralExpr { value })
    }

    fn operator(kind: TokenKind, lexeme: &str) -> Token {
        Token::new(kind, lexeme, Literal::Nil, 1)
    }

    #[test]
    fn sexp_nested_expression() {
        // -123 * (45.67), built by hand.
        let expr = Expr::Binary(BinaryExpr {
            left: Box::new(Expr::Unary(UnaryExpr {
                operator: operator(TokenKind::Minus, "-"),
                right: Box::new(literal(Literal::Number(123.0))),
            })),
            operator: operator(TokenKind::Star, "*"),
            right: Box::new(Expr::Grouping(GroupingExpr {
                expression: Box::new(literal(Literal::Number(45.67))),
            })),
        });
        assert_eq!(to_sexp(&expr), "(* (- 123) (group 45.67))");
    }

    #[test]
    fn sexp_literal_values() {
        assert_eq!(to_sexp(&literal(Literal::Nil)), "nil");
        assert_eq!(to_sexp(&literal(Literal::Bool(true))), "true");
        assert_eq!(to_sexp(&literal(Literal::Number(7.0))), "7");
        assert_eq!(
            to_sexp(&literal(Literal::String("hi".to_string()))),
            "hi"
        );
    }

    #[test]
    fn sexp_binary_uses_operator_lexeme() {
        let expr = Expr::Binary(BinaryExpr {
            left: Box::new(literal(Literal::Number(1.0))),
            operator: operator(TokenKind::BangEqual, "!="),
            right: Box::new(literal(Literal::Number(2.0))),
        });
        assert_eq!(to_sexp(&expr), "(!= 1 2)");
    }

    #[test]
    fn json_output_is_valid_and_tagged() {
        let expr = Expr::Unary(UnaryExpr {
            operator: operator(TokenKind::Bang, "!"),
            right: Box::new(literal(Literal::Bool(false))),
        });
        let json = to_json(&expr);
        let parsed: serde_json::Value =
            serde_json::from_str(&json).expect("JSON output should be valid");
        assert_eq!(parsed["type"], "Unary");
        assert_eq!(parsed["operator"]["lexeme"], "!");
    }
}
