//! Flattening a declaration tree into stylesheet text.

use serde_json::Value;

use crate::style::Css;
use crate::util::{camel_to_kebab, display_value};

/// Flattens `css` into rules for `selector`.
///
/// - Property names are converted to kebab-case.
/// - Keys starting with `@` wrap their nested CSS in that at-rule.
/// - Keys containing `&` are selectors, with `&` replaced by the parent.
/// - Any other key with nested CSS is a descendant selector.
///
/// Declaration order is kept. Consecutive declarations for the same selector
/// and at-rules share one rule, so later declarations override earlier ones
/// the usual way.
///
/// # Example
///
/// ```rust
/// use propcss::{to_stylesheet, Css};
/// use serde_json::json;
///
/// let css = Css::from_value(json!([
///     { "backgroundColor": "#58c" },
///     { "&:hover": { "backgroundColor": "#47b" } },
///     { "@media screen and (min-width: 40em)": { "paddingLeft": "8px" } }
/// ])).unwrap();
///
/// assert_eq!(
///     to_stylesheet(".button", &css),
///     "\
/// .button {
///   background-color: #58c;
/// }
/// .button:hover {
///   background-color: #47b;
/// }
/// @media screen and (min-width: 40em) {
///   .button {
///     padding-left: 8px;
///   }
/// }
/// "
/// );
/// ```
pub fn to_stylesheet(selector: &str, css: &Css) -> String {
    let mut rules = Vec::new();
    let context = Context {
        selector: selector.to_string(),
        at_rules: Vec::new(),
    };
    collect(css, &context, &mut rules);

    let mut out = String::new();
    for rule in &rules {
        write_rule(&mut out, rule);
    }
    out
}

#[derive(Debug, Clone, PartialEq)]
struct Context {
    selector: String,
    at_rules: Vec<String>,
}

impl Context {
    fn nested(&self, key: &str) -> Context {
        if key.starts_with('@') {
            let mut at_rules = self.at_rules.clone();
            at_rules.push(key.to_string());
            Context {
                selector: self.selector.clone(),
                at_rules,
            }
        } else if key.contains('&') {
            Context {
                selector: key.replace('&', &self.selector),
                at_rules: self.at_rules.clone(),
            }
        } else {
            Context {
                selector: format!("{} {}", self.selector, key),
                at_rules: self.at_rules.clone(),
            }
        }
    }
}

#[derive(Debug)]
struct Rule {
    context: Context,
    declarations: Vec<(String, String)>,
}

fn collect(css: &Css, context: &Context, rules: &mut Vec<Rule>) {
    match css {
        Css::List(items) => {
            for item in items {
                collect(item, context, rules);
            }
        }
        Css::Declaration(map) => {
            for (key, value) in map {
                match value {
                    Value::Object(_) | Value::Array(_) => {
                        if let Some(nested) = Css::from_value(value.clone()) {
                            collect(&nested, &context.nested(key), rules);
                        }
                    }
                    scalar => {
                        if let Some(text) = display_value(scalar) {
                            declare(rules, context, camel_to_kebab(key), text);
                        }
                    }
                }
            }
        }
    }
}

fn declare(rules: &mut Vec<Rule>, context: &Context, property: String, value: String) {
    match rules.last_mut() {
        Some(rule) if rule.context == *context => rule.declarations.push((property, value)),
        _ => rules.push(Rule {
            context: context.clone(),
            declarations: vec![(property, value)],
        }),
    }
}

fn write_rule(out: &mut String, rule: &Rule) {
    let depth = rule.context.at_rules.len();

    for (level, at_rule) in rule.context.at_rules.iter().enumerate() {
        out.push_str(&indent(level));
        out.push_str(at_rule);
        out.push_str(" {\n");
    }

    out.push_str(&indent(depth));
    out.push_str(&rule.context.selector);
    out.push_str(" {\n");
    for (property, value) in &rule.declarations {
        out.push_str(&format!("{}{property}: {value};\n", indent(depth + 1)));
    }
    out.push_str(&indent(depth));
    out.push_str("}\n");

    for level in (0..depth).rev() {
        out.push_str(&indent(level));
        out.push_str("}\n");
    }
}

fn indent(level: usize) -> String {
    "  ".repeat(level)
}
