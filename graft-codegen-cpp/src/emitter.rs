//! Serializes the target AST to C++ source text.

use graft_codegen::builder::CodeBuilder;

use crate::ast::{Expr, Node, Stmt, TargetType, TranslationUnit};

/// Emit a whole translation unit.
///
/// Output is `#pragma once`, the include block, then every struct in unit
/// order, each followed by a blank line. A unit without structs still gets
/// the full preamble.
pub fn emit(unit: &TranslationUnit) -> String {
    Emitter::new().render(Node::Unit(unit))
}

/// Render a single type as it appears in a declaration.
pub fn render_type(ty: &TargetType) -> String {
    Emitter::new().render(Node::Type(ty))
}

/// Single forward pass over the AST into an append-only buffer.
///
/// Line-level nodes (includes, structs, fields, methods) write whole lines;
/// the nodes inside a line (types, parameters, statements, expressions)
/// append to the line being assembled.
pub struct Emitter {
    out: CodeBuilder,
}

impl Emitter {
    pub fn new() -> Self {
        Self {
            out: CodeBuilder::cpp(),
        }
    }

    /// Emit `node` and everything under it.
    pub fn render(mut self, node: Node<'_>) -> String {
        self.visit(node);
        self.out.build()
    }

    fn visit(&mut self, node: Node<'_>) {
        match node {
            Node::Unit(unit) => {
                self.out.push_line("#pragma once").push_blank();
                for include in &unit.includes {
                    self.visit(Node::Include(include));
                }
                self.out.push_blank();
                for s in &unit.structs {
                    self.visit(Node::Struct(s));
                }
            }
            Node::Include(include) => {
                let line = if include.is_system {
                    format!("#include <{}>", include.path)
                } else {
                    format!("#include \"{}\"", include.path)
                };
                self.out.push_line(&line);
            }
            Node::Struct(s) => {
                self.out
                    .push_line(&format!("struct {} {{", s.name))
                    .push_indent();
                for field in &s.fields {
                    self.visit(Node::Field(field));
                }
                self.out.push_blank();
                if let Some(ctor) = &s.constructor {
                    self.visit(Node::Method(ctor));
                    self.out.push_blank();
                }
                for method in &s.methods {
                    self.visit(Node::Method(method));
                }
                self.out.push_dedent().push_line("};").push_blank();
            }
            Node::Field(field) => {
                self.out.begin_line();
                self.visit(Node::Type(&field.ty));
                self.out.push_raw(" ").push_raw(&field.name).push_raw(";").end_line();
            }
            Node::Method(method) => {
                self.out.begin_line();
                if let Some(ty) = &method.return_type {
                    self.visit(Node::Type(ty));
                    self.out.push_raw(" ");
                }
                self.out.push_raw(&method.name).push_raw("(");
                for (i, param) in method.params.iter().enumerate() {
                    if i > 0 {
                        self.out.push_raw(", ");
                    }
                    self.visit(Node::Param(param));
                }
                self.out.push_raw(")");
                if method.is_const {
                    self.out.push_raw(" const");
                }
                if method.is_defaulted() {
                    self.out.push_raw(" = default;");
                } else {
                    self.out.push_raw(" {");
                    for stmt in &method.body {
                        self.out.push_raw(" ");
                        self.visit(Node::Stmt(stmt));
                    }
                    self.out.push_raw(" }");
                }
                self.out.end_line();
            }
            Node::Param(param) => {
                self.visit(Node::Type(&param.ty));
                self.out.push_raw(" ").push_raw(&param.name);
            }
            Node::Type(ty) => {
                if ty.is_const {
                    self.out.push_raw("const ");
                }
                self.out.push_raw(ty.base_name());
                let args = ty.template_args();
                if !args.is_empty() {
                    self.out.push_raw("<");
                    for (i, arg) in args.into_iter().enumerate() {
                        if i > 0 {
                            self.out.push_raw(", ");
                        }
                        self.visit(Node::Type(arg));
                    }
                    self.out.push_raw(">");
                }
                if ty.is_reference {
                    self.out.push_raw("&");
                }
                if ty.is_pointer {
                    self.out.push_raw("*");
                }
            }
            Node::Stmt(Stmt::Return(expr)) => {
                self.out.push_raw("return ");
                self.visit(Node::Expr(expr));
                self.out.push_raw(";");
            }
            Node::Stmt(Stmt::Assign { lhs, rhs }) => {
                self.visit(Node::Expr(lhs));
                self.out.push_raw(" = ");
                self.visit(Node::Expr(rhs));
                self.out.push_raw(";");
            }
            Node::Expr(Expr::Ident(name)) => {
                self.out.push_raw(name);
            }
        }
    }
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Field, Include, Method, Param, Struct};

    #[test]
    fn test_render_type() {
        let ty = TargetType::associative(
            TargetType::primitive("std::string"),
            TargetType::primitive("int32_t"),
        );
        assert_eq!(render_type(&ty), "std::unordered_map<std::string, int32_t>");
        assert_eq!(
            render_type(&ty.const_ref()),
            "const std::unordered_map<std::string, int32_t>&"
        );
    }

    #[test]
    fn test_render_pointer_after_reference() {
        let mut ty = TargetType::named("Node");
        ty.is_pointer = true;
        assert_eq!(render_type(&ty), "Node*");
        ty.is_reference = true;
        assert_eq!(render_type(&ty), "Node&*");
    }

    #[test]
    fn test_empty_unit_is_preamble_only() {
        let unit = TranslationUnit {
            includes: vec![Include::system("string"), Include::local("model.h")],
            structs: Vec::new(),
        };
        assert_eq!(
            emit(&unit),
            "#pragma once\n\n#include <string>\n#include \"model.h\"\n\n"
        );
    }

    #[test]
    fn test_duplicate_includes_kept() {
        let unit = TranslationUnit {
            includes: vec![Include::system("string"), Include::system("string")],
            structs: Vec::new(),
        };
        assert_eq!(
            emit(&unit),
            "#pragma once\n\n#include <string>\n#include <string>\n\n"
        );
    }

    #[test]
    fn test_struct_layout() {
        let mut point = Struct::new("Point");
        point
            .fields
            .push(Field::new("X", TargetType::primitive("double")));
        point.constructor = Some(Method::default_constructor("Point"));
        point.methods.push(Method {
            name: "set_X".to_string(),
            return_type: Some(TargetType::void()),
            params: vec![Param::new("val", TargetType::primitive("double").const_ref())],
            is_const: false,
            body: vec![Stmt::Assign {
                lhs: Expr::ident("X"),
                rhs: Expr::ident("val"),
            }],
        });
        let unit = TranslationUnit {
            includes: Vec::new(),
            structs: vec![point],
        };

        assert_eq!(
            emit(&unit),
            "#pragma once\n\n\nstruct Point {\n    double X;\n\n    Point() = default;\n\n    void set_X(const double& val) { X = val; }\n};\n\n"
        );
    }

    #[test]
    fn test_explicit_constructor_and_empty_body() {
        let mut s = Struct::new("Counter");
        s.constructor = Some(Method {
            name: "Counter".to_string(),
            return_type: None,
            params: vec![Param::new("start", TargetType::primitive("int32_t"))],
            is_const: false,
            body: Vec::new(),
        });
        s.methods.push(Method {
            name: "reset".to_string(),
            return_type: Some(TargetType::void()),
            params: Vec::new(),
            is_const: false,
            body: Vec::new(),
        });

        let out = Emitter::new().render(Node::Struct(&s));
        assert_eq!(
            out,
            "struct Counter {\n\n    Counter(int32_t start) { }\n\n    void reset() { }\n};\n\n"
        );
    }

    #[test]
    fn test_emission_is_deterministic() {
        let unit = crate::transform_source(
            &graft_source::parse_str("package main\ntype A struct { X []*int }\n").unwrap(),
        );
        assert_eq!(emit(&unit), emit(&unit));
    }
}
