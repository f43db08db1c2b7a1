use crate::syntax::expr::{Expr, Visitor};

/// Renders an expression as a fully parenthesized prefix form,
/// e.g. `1 + 2 * 3` becomes `(+ 1 (* 2 3))`.
pub struct AstPrinter;

impl AstPrinter {
    pub fn print(&self, expr: &Expr) -> String {
        self.visit_expr(expr)
    }
}

impl Visitor<String> for AstPrinter {
    fn visit_expr(&self, expr: &Expr) -> String {
        match expr {
            Expr::Number { value } => value.to_string(),
            Expr::Prefix { operator, right } => {
                format!("({operator} {})", self.visit_expr(right))
            }
            Expr::Infix {
                left,
                operator,
                right,
            } => format!(
                "({operator} {} {})",
                self.visit_expr(left),
                self.visit_expr(right)
            ),
        }
    }
}
