//! AST evaluator
//!
//! Arithmetic follows IEEE-754 doubles throughout: `9/0` is `Infinity`,
//! `0/0` is `NaN`, and neither is an error. Only malformed input fails.

use crate::core::parser::{AstNode, Parser};
use crate::core::{CalcResult, Operation};

/// Evaluator for calculator expressions
#[derive(Debug, Default, Clone, Copy)]
pub struct Evaluator;

impl Evaluator {
    /// Creates a new evaluator
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Rewrites keypad glyphs to their ASCII operators (`×`→`*`, `÷`→`/`)
    #[must_use]
    pub fn sanitize(expression: &str) -> String {
        expression
            .chars()
            .map(|c| match Operation::from_char(c) {
                Some(op) => op.ascii(),
                None => c,
            })
            .collect()
    }

    /// Evaluates an AST node
    #[must_use]
    pub fn evaluate(&self, node: &AstNode) -> f64 {
        match node {
            AstNode::Number(n) => *n,
            AstNode::Negate(inner) => -self.evaluate(inner),
            AstNode::BinaryOp { left, op, right } => {
                op.apply(self.evaluate(left), self.evaluate(right))
            }
        }
    }

    /// Parses and evaluates an ASCII expression
    pub fn evaluate_str(&self, input: &str) -> CalcResult<f64> {
        let ast = Parser::parse_str(input)?;
        Ok(self.evaluate(&ast))
    }

    /// Evaluates an expression as typed on the keypad (with `×`/`÷`)
    pub fn evaluate_expression(&self, expression: &str) -> CalcResult<f64> {
        self.evaluate_str(&Self::sanitize(expression))
    }
}
