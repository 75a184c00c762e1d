//! Interface rendering by template substitution.
//!
//! The output is never checked for well-formedness; rendering cannot fail.

use crate::config::RenderConfig;
use crate::extract::MethodSet;
use std::fmt;

const NAME_PLACEHOLDER: &str = "{name}";
const METHODS_PLACEHOLDER: &str = "{methods}";

/// Rendered interface declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedInterface {
    pub type_name: String,
    pub text: String,
}

impl fmt::Display for GeneratedInterface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[derive(Debug, Clone)]
pub struct InterfaceRenderer {
    template: String,
    indent: String,
}

impl InterfaceRenderer {
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            template: config.template.clone(),
            indent: config.indent.clone(),
        }
    }

    pub fn render(&self, type_name: &str, methods: &MethodSet) -> GeneratedInterface {
        let block: String = methods
            .iter()
            .map(|method| format!("{}{method}\n", self.indent))
            .collect();

        GeneratedInterface {
            type_name: type_name.to_string(),
            text: substitute(&self.template, type_name, &block),
        }
    }
}

impl Default for InterfaceRenderer {
    fn default() -> Self {
        Self::new(&RenderConfig::default())
    }
}

/// Single left-to-right pass so placeholder-like text inside method
/// signatures is never substituted again.
fn substitute(template: &str, name: &str, methods: &str) -> String {
    let mut out = String::with_capacity(template.len() + name.len() + methods.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        if let Some(after) = tail.strip_prefix(NAME_PLACEHOLDER) {
            out.push_str(name);
            rest = after;
        } else if let Some(after) = tail.strip_prefix(METHODS_PLACEHOLDER) {
            out.push_str(methods);
            rest = after;
        } else {
            out.push('{');
            rest = &tail[1..];
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::MethodSignature;

    fn method(name: &str, parameters: &str, result: &str) -> MethodSignature {
        MethodSignature {
            name: name.to_string(),
            parameters: parameters.to_string(),
            result: result.to_string(),
        }
    }

    #[test]
    fn test_empty_method_set_renders_empty_body() {
        let rendered = InterfaceRenderer::default().render("B", &MethodSet::new());
        assert_eq!(rendered.text, "type B interface {\n}");
    }

    #[test]
    fn test_methods_one_per_line_in_order() {
        let mut methods = MethodSet::new();
        methods.push(method("Sum", "(a, c int)", "(int, error)"));
        methods.push(method("Reset", "()", ""));

        let rendered = InterfaceRenderer::default().render("B", &methods);
        assert_eq!(
            rendered.text,
            "type B interface {\n\tSum (a, c int) (int, error)\n\tReset ()\n}"
        );
    }

    #[test]
    fn test_custom_template_and_indent() {
        let config = RenderConfig {
            indent: "    ".to_string(),
            template: "// generated\ntype {name}er interface {\n{methods}}\n".to_string(),
        };
        let mut methods = MethodSet::new();
        methods.push(method("Read", "(p []byte)", "(n int, err error)"));

        let rendered = InterfaceRenderer::new(&config).render("Read", &methods);
        assert_eq!(
            rendered.text,
            "// generated\ntype Reader interface {\n    Read (p []byte) (n int, err error)\n}\n"
        );
    }

    #[test]
    fn test_placeholders_inside_signatures_are_left_alone() {
        let mut methods = MethodSet::new();
        methods.push(method("Odd", "(x struct{ s string }) /* {name} */", ""));

        let rendered = InterfaceRenderer::default().render("B", &methods);
        assert!(rendered.text.contains("/* {name} */"));
    }
}
