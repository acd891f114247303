//! Style rule and property generation.
//!
//! A style rule lowers to an immediately-invoked closure that builds a
//! `Style` object for the selector, runs the rule's statements, attaches
//! nested rules via `style.add(...)`, and returns the object. The
//! closure gives each rule its own lexical scope for the local `style`
//! binding, so arbitrarily deep nesting composes through recursion with
//! no scope bookkeeping here.

use crate::CodegenError;
use stylet_parser::ast::{PropDecl, Stmt, StyleRule};

/// Generate the IIFE for one style rule.
///
/// ```text
/// (() => {
/// const style = new Style(".card");
/// new Property("color", "red");
/// style.add(<nested rule>);
/// return style;
/// })()
/// ```
pub(crate) fn gen_style_rule(rule: &StyleRule) -> Result<String, CodegenError> {
    let mut output = Vec::new();

    output.push(format!(
        "(() => {{\nconst style = new Style(\"{}\")",
        rule.selector
    ));

    for stmt in &rule.block.statements {
        if matches!(stmt, Stmt::NoOp) {
            continue;
        }
        if let Some(code) = crate::gen_stmt(stmt)? {
            output.push(code);
        }
    }

    for nested in &rule.block.styles {
        output.push(format!("style.add({})", gen_style_rule(nested)?));
    }

    output.push("return style;\n})()".to_string());

    Ok(output.join(";\n"))
}

/// Generate a `Property` construction for one property declaration.
pub(crate) fn gen_prop(prop: &PropDecl) -> Result<String, CodegenError> {
    Ok(format!(
        "new Property(\"{}\", {})",
        prop.name,
        crate::gen_expr(&prop.value)?
    ))
}
