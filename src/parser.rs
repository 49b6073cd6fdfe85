use crate::error::{Error, Result};
use crate::rule::{Field, Rule};

/// Substitutions applied to field type tokens. Any token not listed
/// here passes through unchanged.
///
/// `Object` marks the heterogeneous literal payload, which becomes a
/// nullable dynamic value on the interpreter side.
const TYPE_SUBSTITUTIONS: &[(&str, &str)] = &[("Object", "Option<Value>")];

fn substitute(ty: &str) -> &str {
    TYPE_SUBSTITUTIONS
        .iter()
        .find(|(from, _)| *from == ty)
        .map(|(_, to)| *to)
        .unwrap_or(ty)
}

/// Parse one field entry of the form `<type> <name>`.
///
/// The entry must consist of exactly two non-empty tokens separated
/// by a single space. Compound types are written without embedded
/// spaces (`Vec<Stmt>`, `Option<Expr>`), so this holds for every
/// well-formed entry.
fn parse_field(entry: &str) -> Result<Field> {
    let tokens: Vec<&str> = entry.split(' ').collect();
    match tokens[..] {
        [ty, name] if !ty.is_empty() && !name.is_empty() => Ok(Field {
            ty: substitute(ty).to_string(),
            name: name.to_string(),
        }),
        _ => Error::malformed(entry),
    }
}

/// Parse a field-spec string, e.g. `"Expr left, Token operator"`,
/// into fields in declaration order.
pub fn parse_fields(spec: &str) -> Result<Vec<Field>> {
    spec.split(", ").map(parse_field).collect()
}

/// Parse one grammar rule of the form `"Variant : field, field"` for
/// the given base family.
pub fn parse_rule(base: &str, spec: &str) -> Result<Rule> {
    let Some((variant, fields)) = spec.split_once(':') else {
        return Error::malformed(spec);
    };
    let variant = variant.trim();
    if variant.is_empty() || variant.contains(' ') {
        return Error::malformed(spec);
    }
    Ok(Rule {
        base: base.to_string(),
        variant: variant.to_string(),
        fields: parse_fields(fields.trim())?,
    })
}
