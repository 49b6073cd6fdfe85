use crate::error::Result;
use crate::parser::parse_rule;
use crate::rule::BaseFamily;

/// Grammar for the expression family.
///
/// Recursive positions are boxed so the generated enum has a finite
/// size; `Object` is the heterogeneous literal payload.
const EXPR_RULES: &[&str] = &[
    "Assign   : Token name, Box<Expr> value",
    "Binary   : Box<Expr> left, Token operator, Box<Expr> right",
    "Grouping : Box<Expr> expression",
    "Literal  : Object value",
    "Unary    : Token operator, Box<Expr> right",
    "Variable : Token name",
];

/// Grammar for the statement family.
const STMT_RULES: &[&str] = &[
    "Block      : Vec<Stmt> statements",
    "Expression : Expr expression",
    "Print      : Expr expression",
    "Var        : Token name, Option<Expr> initializer",
];

fn family(name: &str, uses: &[&str], rule_specs: &[&str]) -> Result<BaseFamily> {
    Ok(BaseFamily {
        name: name.to_string(),
        uses: uses.iter().map(|u| u.to_string()).collect(),
        rules: rule_specs
            .iter()
            .map(|spec| parse_rule(name, spec))
            .collect::<Result<Vec<_>>>()?,
    })
}

/// The base families to generate, in output order.
pub fn families() -> Result<Vec<BaseFamily>> {
    Ok(vec![
        family(
            "Expr",
            &["use crate::token::Token;", "use crate::value::Value;"],
            EXPR_RULES,
        )?,
        family(
            "Stmt",
            &["use crate::expr::Expr;", "use crate::token::Token;"],
            STMT_RULES,
        )?,
    ])
}
