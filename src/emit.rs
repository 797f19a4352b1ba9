//! Rust source backend: renders a compiled schema as one self-contained module.
//!
//! Layout of the generated module:
//! 1. header and lint allowances
//! 2. schema constants
//! 3. primitive type aliases
//! 4. every struct declaration with its `Default` impl
//! 5. wire helpers for presence flags and count prefixes
//! 6. primitive codecs (uniform little-endian copy, or the manual bodies verbatim)
//! 7. per struct: `marshal_<name>`, `unmarshal_<name>`, and `free_<name>` when freeable
//!
//! All types are declared before any routine, so struct order never matters. Generated
//! routines index slices directly: callers size buffers (see
//! [`Codec::marshalled_len`](crate::codec::Codec::marshalled_len) and
//! [`message_extent`](crate::walk::message_extent)).

use crate::free::FreeAction;
use crate::marshal::MarshalCount;
use crate::primitive::{CodecRule, PrimitiveSpec};
use crate::routine::{CompiledSchema, CompiledStruct};
use crate::schema::Elem;
use crate::unmarshal::{Storage, UnmarshalStep};
use std::borrow::Cow;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Public,
    Crate,
}

impl Visibility {
    fn keyword(self) -> &'static str {
        match self {
            Visibility::Public => "pub",
            Visibility::Crate => "pub(crate)",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmitOptions {
    pub visibility: Visibility,
}

const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do", "dyn",
    "else", "enum", "extern", "false", "final", "fn", "for", "if", "impl", "in", "let", "loop",
    "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref", "return", "static",
    "struct", "trait", "true", "try", "type", "typeof", "unsafe", "unsized", "use", "virtual",
    "where", "while", "yield",
];

/// Identifier usable in Rust source: keywords become raw identifiers (`type` -> `r#type`).
///
/// `self`, `Self`, `super` and `crate` cannot be raw and get a trailing underscore.
pub fn rust_ident(name: &str) -> Cow<'_, str> {
    match name {
        "self" | "Self" | "super" | "crate" => Cow::Owned(format!("{}_", name)),
        n if KEYWORDS.contains(&n) => Cow::Owned(format!("r#{}", n)),
        _ => Cow::Borrowed(name),
    }
}

/// Render `compiled` as Rust source.
pub fn emit_rust(compiled: &CompiledSchema, options: &EmitOptions) -> String {
    let mut e = Emitter {
        compiled,
        vis: options.visibility.keyword(),
        out: String::new(),
        indent: 0,
    };
    e.header();
    e.constants();
    e.aliases();
    for s in compiled.structs() {
        e.declaration(s);
    }
    e.wire_helpers();
    for p in compiled.primitives().iter() {
        e.primitive_codec(p);
    }
    for s in compiled.structs() {
        e.marshal(s);
        e.unmarshal(s);
        e.free(s);
    }
    e.out
}

/// Render `compiled` and write it to `path`.
pub fn write_module(path: impl AsRef<Path>, compiled: &CompiledSchema, options: &EmitOptions) -> std::io::Result<()> {
    let source = emit_rust(compiled, options);
    std::fs::write(path.as_ref(), &source)?;
    info!(path = %path.as_ref().display(), bytes = source.len(), "module written");
    Ok(())
}

struct Emitter<'a> {
    compiled: &'a CompiledSchema,
    vis: &'static str,
    out: String,
    indent: usize,
}

impl<'a> Emitter<'a> {
    fn line(&mut self, text: &str) {
        if !text.is_empty() {
            for _ in 0..self.indent {
                self.out.push_str("    ");
            }
            self.out.push_str(text);
        }
        self.out.push('\n');
    }

    fn open(&mut self, text: &str) {
        self.line(text);
        self.indent += 1;
    }

    fn close(&mut self, text: &str) {
        self.indent -= 1;
        self.line(text);
    }

    fn header(&mut self) {
        self.line("// @generated by mcdgen. Do not edit.");
        self.line("#![allow(non_camel_case_types, non_snake_case, dead_code, unused_mut, unused_variables)]");
        self.line("");
    }

    fn constants(&mut self) {
        let constants = self.compiled.constants();
        if constants.is_empty() {
            return;
        }
        for (name, value) in constants {
            let text = format!("{} const {}: u64 = {};", self.vis, name, value);
            self.line(&text);
        }
        self.line("");
    }

    fn aliases(&mut self) {
        for p in self.compiled.primitives().iter() {
            let text = format!("{} type {} = {};", self.vis, rust_ident(&p.name), p.rust_type());
            self.line(&text);
        }
        self.line("");
    }

    fn elem_type(&self, elem: Elem) -> String {
        rust_ident(self.compiled.resolved().elem_name(elem)).into_owned()
    }

    fn declaration(&mut self, s: &CompiledStruct) {
        let name = rust_ident(&s.name).into_owned();
        let mut fields = Vec::with_capacity(s.unmarshal.len());
        for step in &s.unmarshal {
            let ty = self.elem_type(step.elem);
            let decl = match step.storage {
                Storage::Value => ty,
                Storage::Inline(n) => format!("[{}; {}]", ty, n),
                Storage::Heap => format!("Vec<{}>", ty),
            };
            fields.push((rust_ident(&step.member).into_owned(), decl, default_init(step)));
        }

        self.line("#[derive(Debug, Clone, PartialEq)]");
        self.open(&format!("{} struct {} {{", self.vis, name));
        for (member, decl, _) in &fields {
            let text = format!("{} {}: {},", self.vis, member, decl);
            self.line(&text);
        }
        self.close("}");
        self.line("");
        self.open(&format!("impl Default for {} {{", name));
        self.open("fn default() -> Self {");
        self.open(&format!("{} {{", name));
        for (member, _, init) in &fields {
            self.line(&format!("{}: {},", member, init));
        }
        self.close("}");
        self.close("}");
        self.close("}");
        self.line("");
    }

    fn wire_helpers(&mut self) {
        for text in [
            "fn wire_put_u8(v: u8, buf: &mut [u8]) -> usize {",
            "    buf[0] = v;",
            "    1",
            "}",
            "",
            "fn wire_get_u8(buf: &[u8], v: &mut u8) -> usize {",
            "    *v = buf[0];",
            "    1",
            "}",
            "",
            "fn wire_put_u32(v: u32, buf: &mut [u8]) -> usize {",
            "    buf[..4].copy_from_slice(&v.to_le_bytes());",
            "    4",
            "}",
            "",
            "fn wire_get_u32(buf: &[u8], v: &mut u32) -> usize {",
            "    *v = u32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]);",
            "    4",
            "}",
            "",
        ] {
            self.line(text);
        }
    }

    fn primitive_codec(&mut self, p: &PrimitiveSpec) {
        let ty = rust_ident(&p.name).into_owned();
        let (marshal_body, unmarshal_body) = match &p.rule {
            CodecRule::Uniform => (
                format!("buf[..{w}].copy_from_slice(&obj.to_le_bytes());\n{w}", w = p.width),
                format!(
                    "let mut b = [0u8; {w}];\nb.copy_from_slice(&buf[..{w}]);\n*obj = {ty}::from_le_bytes(b);\n{w}",
                    w = p.width,
                    ty = p.rust_type()
                ),
            ),
            CodecRule::Manual(codec) => (codec.marshal_body().into_owned(), codec.unmarshal_body().into_owned()),
        };
        self.open(&format!("{} fn marshal_{}(obj: {}, buf: &mut [u8]) -> usize {{", self.vis, p.name, ty));
        for l in marshal_body.lines() {
            self.line(l);
        }
        self.close("}");
        self.line("");
        self.open(&format!("{} fn unmarshal_{}(buf: &[u8], obj: &mut {}) -> usize {{", self.vis, p.name, ty));
        for l in unmarshal_body.lines() {
            self.line(l);
        }
        self.close("}");
        self.line("");
    }

    fn marshal_call(&self, elem: Elem, access: &str) -> String {
        match elem {
            Elem::Primitive(p) => format!(
                "pos += marshal_{}({}, &mut buf[pos..]);",
                self.compiled.primitives().spec(p).name,
                access
            ),
            Elem::Struct(s) => format!(
                "pos += marshal_{}(&{}, &mut buf[pos..]);",
                self.compiled.at(s).name,
                access
            ),
        }
    }

    fn unmarshal_call(&self, elem: Elem, access: &str) -> String {
        format!(
            "pos += unmarshal_{}(&buf[pos..], &mut {});",
            self.compiled.resolved().elem_name(elem),
            access
        )
    }

    fn marshal(&mut self, s: &CompiledStruct) {
        let ty = rust_ident(&s.name).into_owned();
        let member = |name: &str| format!("obj.{}", rust_ident(name));
        self.open(&format!("{} fn marshal_{}(obj: &{}, buf: &mut [u8]) -> usize {{", self.vis, s.name, ty));
        self.line("let mut pos = 0;");
        for step in &s.marshal {
            let access = member(&step.member);
            if let Some(gate) = &step.presence {
                self.line(&format!("let present = {};", gate.render_cond(&member)));
                self.line("pos += wire_put_u8(present as u8, &mut buf[pos..]);");
                self.open("if present {");
            }
            match &step.count {
                MarshalCount::One => {
                    let call = self.marshal_call(step.elem, &access);
                    self.line(&call);
                }
                MarshalCount::Const(n) => {
                    self.line(&format!("pos += wire_put_u32({}, &mut buf[pos..]);", n));
                    self.open(&format!("for i in 0..{} {{", n));
                    let call = self.marshal_call(step.elem, &format!("{}[i]", access));
                    self.line(&call);
                    self.close("}");
                }
                MarshalCount::Live(count) => {
                    self.open("{");
                    self.line(&format!("let n = {} as u32;", count.render_value(&member)));
                    self.line("pos += wire_put_u32(n, &mut buf[pos..]);");
                    self.open("for i in 0..n as usize {");
                    let call = self.marshal_call(step.elem, &format!("{}[i]", access));
                    self.line(&call);
                    self.close("}");
                    self.close("}");
                }
            }
            if step.presence.is_some() {
                self.close("}");
            }
        }
        self.line("pos");
        self.close("}");
        self.line("");
    }

    fn unmarshal(&mut self, s: &CompiledStruct) {
        let ty = rust_ident(&s.name).into_owned();
        self.open(&format!("{} fn unmarshal_{}(buf: &[u8], obj: &mut {}) -> usize {{", self.vis, s.name, ty));
        self.line("let mut pos = 0;");
        for step in &s.unmarshal {
            let access = format!("obj.{}", rust_ident(&step.member));
            if step.presence_flag {
                self.line("let mut present = 0u8;");
                self.line("pos += wire_get_u8(&buf[pos..], &mut present);");
                self.open("if present != 0 {");
            }
            match step.storage {
                Storage::Value => {
                    let call = self.unmarshal_call(step.elem, &access);
                    self.line(&call);
                }
                Storage::Inline(capacity) => {
                    self.open("{");
                    self.line("let mut n = 0u32;");
                    self.line("pos += wire_get_u32(&buf[pos..], &mut n);");
                    self.open("for i in 0..n as usize {");
                    let call = self.unmarshal_call(step.elem, &format!("{}[i]", access));
                    self.line(&call);
                    self.close("}");
                    self.open(&format!("for i in n as usize..{} {{", capacity));
                    self.line(&format!("{}[i] = Default::default();", access));
                    self.close("}");
                    self.close("}");
                }
                Storage::Heap => {
                    self.open("{");
                    self.line("let mut n = 0u32;");
                    self.line("pos += wire_get_u32(&buf[pos..], &mut n);");
                    self.open(&format!("{} = if n == 0 {{", access));
                    self.line("Vec::new()");
                    self.close("} else {");
                    self.indent += 1;
                    self.line("(0..n).map(|_| Default::default()).collect()");
                    self.close("};");
                    self.open("for i in 0..n as usize {");
                    let call = self.unmarshal_call(step.elem, &format!("{}[i]", access));
                    self.line(&call);
                    self.close("}");
                    self.close("}");
                }
            }
            if step.presence_flag {
                self.close("} else {");
                self.indent += 1;
                self.line(&format!("{} = {};", access, default_init(step)));
                self.close("}");
            }
        }
        self.line("pos");
        self.close("}");
        self.line("");
    }

    fn free(&mut self, s: &CompiledStruct) {
        let steps = match &s.free {
            Some(steps) => steps,
            None => return,
        };
        let ty = rust_ident(&s.name).into_owned();
        let member = |name: &str| format!("obj.{}", rust_ident(name));
        self.open(&format!("{} fn free_{}(obj: &mut {}) {{", self.vis, s.name, ty));
        for step in steps {
            let access = member(&step.member);
            if let Some(gate) = &step.guard {
                self.open(&format!("if {} {{", gate.render_cond(&member)));
            }
            match &step.action {
                FreeAction::EachInline { elem, count } => {
                    self.open(&format!("for i in 0..{} {{", count));
                    self.line(&format!("free_{}(&mut {}[i]);", self.compiled.at(*elem).name, access));
                    self.close("}");
                }
                FreeAction::Heap { count, elem } => {
                    if let Some(elem) = elem {
                        self.open("{");
                        self.line(&format!("let n = {} as usize;", count.render_value(&member)));
                        self.open(&format!("for i in 0..n.min({}.len()) {{", access));
                        self.line(&format!("free_{}(&mut {}[i]);", self.compiled.at(*elem).name, access));
                        self.close("}");
                        self.close("}");
                    }
                    self.line(&format!("{} = Vec::new();", access));
                }
                FreeAction::Embedded(elem) => {
                    self.line(&format!("free_{}(&mut {});", self.compiled.at(*elem).name, access));
                }
            }
            if step.guard.is_some() {
                self.close("}");
            }
        }
        self.close("}");
        self.line("");
    }
}

/// Initializer expression for a member's zeroed state.
fn default_init(step: &UnmarshalStep) -> String {
    match (step.storage, step.elem) {
        (Storage::Value, Elem::Primitive(_)) => "0".to_string(),
        (Storage::Value, Elem::Struct(_)) => "Default::default()".to_string(),
        (Storage::Inline(n), Elem::Primitive(_)) => format!("[0; {}]", n),
        (Storage::Inline(_), Elem::Struct(_)) => "std::array::from_fn(|_| Default::default())".to_string(),
        (Storage::Heap, _) => "Vec::new()".to_string(),
    }
}
