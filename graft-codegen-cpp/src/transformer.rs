//! Declaration transformer: Go struct declarations to C++ structs.

use std::collections::HashSet;

use graft_core::to_pascal_case;
use graft_source::{RawField, SourceFile};

use crate::{
    ast::{Expr, Field, Include, Method, Param, Stmt, Struct, TargetType, TranslationUnit},
    type_mapper::{CppTypeMapper, Hoister},
};

/// Headers every generated unit includes, whether used or not.
pub const STANDARD_INCLUDES: [&str; 5] =
    ["string", "vector", "unordered_map", "optional", "cstdint"];

/// Builds one translation unit from struct declarations.
///
/// Anonymous structs met while mapping field types are hoisted to top-level
/// structs named after the enclosing struct and field (`Person` + `address`
/// gives `PersonAddress`, then `PersonAddress2`, ... on clashes). A hoisted
/// struct is appended as soon as it is built, so it always precedes the
/// struct that refers to it.
#[derive(Debug)]
pub struct Transformer {
    unit: TranslationUnit,
    taken: HashSet<String>,
    /// Struct and field currently being lowered, for naming hoisted structs.
    scope: (String, String),
}

impl Transformer {
    pub fn new() -> Self {
        Self {
            unit: TranslationUnit {
                includes: STANDARD_INCLUDES
                    .iter()
                    .map(|path| Include::system(*path))
                    .collect(),
                structs: Vec::new(),
            },
            taken: HashSet::new(),
            scope: (String::new(), String::new()),
        }
    }

    /// A transformer that will not hoist under any name declared in `source`.
    pub fn for_source(source: &SourceFile) -> Self {
        let mut transformer = Self::new();
        transformer
            .taken
            .extend(source.structs.iter().map(|s| s.name.clone()));
        transformer
    }

    /// Translate one struct declaration.
    ///
    /// Fields keep their declared order; embedded fields have no C++
    /// counterpart and are dropped. Each field gets a `get_` / `set_` pair,
    /// and a defaulted constructor is always present.
    pub fn transform(&mut self, name: &str, fields: &[RawField]) -> Struct {
        let mut result = Struct::new(name);
        result.constructor = Some(Method::default_constructor(name));

        for field in fields.iter().filter(|f| !f.embedded) {
            let saved = std::mem::replace(&mut self.scope, (name.to_string(), field.name.clone()));
            let ty = CppTypeMapper.map(&field.ty, self);
            self.scope = saved;

            result.methods.push(getter(&field.name, &ty));
            result.methods.push(setter(&field.name, &ty));
            result.fields.push(Field::new(&field.name, ty));
        }

        result
    }

    /// Append a struct to the unit.
    pub fn push(&mut self, s: Struct) {
        self.taken.insert(s.name.clone());
        self.unit.structs.push(s);
    }

    pub fn finish(self) -> TranslationUnit {
        self.unit
    }

    fn hoisted_name(&self) -> String {
        let (owner, field) = &self.scope;
        let base = format!("{}{}", owner, to_pascal_case(field));
        if !self.taken.contains(&base) {
            return base;
        }
        let mut n = 2;
        loop {
            let candidate = format!("{}{}", base, n);
            if !self.taken.contains(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }
}

impl Default for Transformer {
    fn default() -> Self {
        Self::new()
    }
}

impl Hoister for Transformer {
    fn hoist(&mut self, fields: &[RawField]) -> String {
        let name = self.hoisted_name();
        self.taken.insert(name.clone());
        let hoisted = self.transform(&name, fields);
        self.push(hoisted);
        name
    }
}

/// Translate every struct in a source file, in file order.
pub fn transform_source(source: &SourceFile) -> TranslationUnit {
    let mut transformer = Transformer::for_source(source);
    for decl in &source.structs {
        let s = transformer.transform(&decl.name, &decl.fields);
        transformer.push(s);
    }
    transformer.finish()
}

fn getter(field: &str, ty: &TargetType) -> Method {
    Method {
        name: format!("get_{}", field),
        return_type: Some(ty.clone().const_ref()),
        params: Vec::new(),
        is_const: true,
        body: vec![Stmt::Return(Expr::ident(field))],
    }
}

fn setter(field: &str, ty: &TargetType) -> Method {
    Method {
        name: format!("set_{}", field),
        return_type: Some(TargetType::void()),
        params: vec![Param::new("val", ty.clone().const_ref())],
        is_const: false,
        body: vec![Stmt::Assign {
            lhs: Expr::ident(field),
            rhs: Expr::ident("val"),
        }],
    }
}
