//! Emission of generated source text from parsed grammar rules.
//!
//! Everything here is a pure function from records to a `String`;
//! iteration is only ever over ordered `Vec`s, so identical input
//! produces byte-identical output.

use crate::rule::{BaseFamily, Rule};

/// snake_case form of a PascalCase name.
fn snake(name: &str) -> String {
    let mut out = String::new();
    for (i, c) in name.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Name of the visitor method dispatched to for one variant.
fn visit_method(rule: &Rule) -> String {
    format!("visit_{}_{}", snake(&rule.variant), snake(&rule.base))
}

/// Emit the visitor trait: one method per rule, in declaration order.
fn visitor_trait(family: &BaseFamily) -> String {
    let receiver = family.name.to_lowercase();
    let mut out = format!("pub trait {}Visitor<R> {{\n", family.name);
    for rule in &family.rules {
        out.push_str(&format!(
            "    fn {}(&mut self, {}: &{}) -> R;\n",
            visit_method(rule),
            receiver,
            rule.type_name()
        ));
    }
    out.push_str("}\n");
    out
}

/// Emit the base type: a tagged enum wrapping one concrete node type
/// per variant, with a single `accept` method dispatching on the tag.
fn base_type(family: &BaseFamily) -> String {
    let base = &family.name;
    let receiver = base.to_lowercase();
    let mut out = String::from("#[derive(Debug, Clone, PartialEq)]\n");
    out.push_str(&format!("pub enum {base} {{\n"));
    for rule in &family.rules {
        out.push_str(&format!("    {}({}),\n", rule.variant, rule.type_name()));
    }
    out.push_str("}\n\n");
    out.push_str(&format!("impl {base} {{\n"));
    out.push_str(&format!(
        "    pub fn accept<R>(&self, visitor: &mut dyn {base}Visitor<R>) -> R {{\n"
    ));
    out.push_str("        match self {\n");
    for rule in &family.rules {
        out.push_str(&format!(
            "            {}::{}({receiver}) => {receiver}.accept(visitor),\n",
            base, rule.variant
        ));
    }
    out.push_str("        }\n");
    out.push_str("    }\n");
    out.push_str("}\n");
    out
}

/// Emit the concrete node type for one rule: field struct, `new`
/// constructor preserving field order, and the `accept` override that
/// invokes this variant's visitor method.
fn variant_struct(rule: &Rule) -> String {
    let ty = rule.type_name();
    let params = rule
        .fields
        .iter()
        .map(|f| format!("{}: {}", f.name, f.ty))
        .collect::<Vec<_>>()
        .join(", ");
    let names = rule
        .fields
        .iter()
        .map(|f| f.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let mut out = String::from("#[derive(Debug, Clone, PartialEq)]\n");
    out.push_str(&format!("pub struct {ty} {{\n"));
    for f in &rule.fields {
        out.push_str(&format!("    pub {}: {},\n", f.name, f.ty));
    }
    out.push_str("}\n\n");
    out.push_str(&format!("impl {ty} {{\n"));
    out.push_str(&format!("    pub fn new({params}) -> Self {{\n"));
    out.push_str(&format!("        Self {{ {names} }}\n"));
    out.push_str("    }\n\n");
    out.push_str(&format!(
        "    pub fn accept<R>(&self, visitor: &mut dyn {}Visitor<R>) -> R {{\n",
        rule.base
    ));
    out.push_str(&format!("        visitor.{}(self)\n", visit_method(rule)));
    out.push_str("    }\n");
    out.push_str("}\n");
    out
}

/// Emit the full generated module for one base family: header and
/// imports, visitor trait, base type, then one block per variant,
/// each section separated by a blank line.
pub fn family(family: &BaseFamily) -> String {
    let mut out = format!(
        "//! Syntax tree node types for the `{}` family.\n//!\n//! Generated by astgen. Do not edit by hand.\n",
        family.name
    );
    if !family.uses.is_empty() {
        out.push('\n');
        for use_line in &family.uses {
            out.push_str(use_line);
            out.push('\n');
        }
    }
    out.push('\n');
    out.push_str(&visitor_trait(family));
    out.push('\n');
    out.push_str(&base_type(family));
    for rule in &family.rules {
        out.push('\n');
        out.push_str(&variant_struct(rule));
    }
    out
}
