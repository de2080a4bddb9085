//! PDF object model and serialization
//!
//! Covers the subset of COS object types our output needs. Everything
//! serializes into a byte buffer so the writer can track offsets exactly.

use std::collections::BTreeMap;

/// Reference to an indirect object, by object number.
///
/// Generation numbers are always zero in a freshly written file, so we
/// do not carry them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjId(pub u32);

/// A PDF object
#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    Integer(i64),
    Real(f64),
    Name(String),
    Literal(String),
    Array(Vec<Object>),
    Dict(Dict),
    Stream(Stream),
    Ref(ObjId),
}

impl Object {
    pub fn name(value: impl Into<String>) -> Self {
        Object::Name(value.into())
    }

    pub fn literal(value: impl Into<String>) -> Self {
        Object::Literal(value.into())
    }

    /// Serializes this object into `out`
    pub fn serialize(&self, out: &mut Vec<u8>) {
        match self {
            Object::Integer(n) => out.extend_from_slice(n.to_string().as_bytes()),
            Object::Real(x) => out.extend_from_slice(fmt_real(*x).as_bytes()),
            Object::Name(name) => write_name(name, out),
            Object::Literal(text) => write_literal(text, out),
            Object::Array(items) => {
                out.push(b'[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push(b' ');
                    }
                    item.serialize(out);
                }
                out.push(b']');
            }
            Object::Dict(dict) => dict.serialize(out),
            Object::Stream(stream) => stream.serialize(out),
            Object::Ref(id) => {
                out.extend_from_slice(id.0.to_string().as_bytes());
                out.extend_from_slice(b" 0 R");
            }
        }
    }
}

impl From<i64> for Object {
    fn from(value: i64) -> Self {
        Object::Integer(value)
    }
}

impl From<f64> for Object {
    fn from(value: f64) -> Self {
        Object::Real(value)
    }
}

impl From<ObjId> for Object {
    fn from(value: ObjId) -> Self {
        Object::Ref(value)
    }
}

impl From<Vec<Object>> for Object {
    fn from(value: Vec<Object>) -> Self {
        Object::Array(value)
    }
}

impl From<Dict> for Object {
    fn from(value: Dict) -> Self {
        Object::Dict(value)
    }
}

/// A PDF dictionary with deterministic key order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dict {
    entries: BTreeMap<String, Object>,
}

impl Dict {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a dictionary with its `/Type` entry already set
    pub fn of_type(type_name: &str) -> Self {
        let mut dict = Self::new();
        dict.set("Type", Object::name(type_name));
        dict
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Object>) -> &mut Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Object> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn serialize(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(b"<<");
        for (key, value) in &self.entries {
            out.push(b' ');
            write_name(key, out);
            out.push(b' ');
            value.serialize(out);
        }
        out.extend_from_slice(b" >>");
    }
}

/// A stream object: dictionary plus raw data
#[derive(Debug, Clone, PartialEq)]
pub struct Stream {
    pub dict: Dict,
    pub data: Vec<u8>,
}

impl Stream {
    pub fn new(dict: Dict, data: Vec<u8>) -> Self {
        Self { dict, data }
    }

    fn serialize(&self, out: &mut Vec<u8>) {
        let mut dict = self.dict.clone();
        dict.set("Length", self.data.len() as i64);
        dict.serialize(out);
        out.extend_from_slice(b"\nstream\n");
        out.extend_from_slice(&self.data);
        out.extend_from_slice(b"\nendstream");
    }
}

/// Formats a number without trailing zeros, integers without a point
pub(crate) fn fmt_real(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{:.0}", value)
    } else {
        let mut s = format!("{:.6}", value);
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
        s
    }
}

/// Writes `(text)` with literal-string escaping.
///
/// Bytes outside printable ASCII come out as octal escapes, which keeps
/// the whole file byte-transparent for WinAnsi text.
pub(crate) fn write_literal(text: &str, out: &mut Vec<u8>) {
    out.push(b'(');
    for byte in text.bytes() {
        match byte {
            b'(' => out.extend_from_slice(b"\\("),
            b')' => out.extend_from_slice(b"\\)"),
            b'\\' => out.extend_from_slice(b"\\\\"),
            b'\n' => out.extend_from_slice(b"\\n"),
            b'\r' => out.extend_from_slice(b"\\r"),
            b'\t' => out.extend_from_slice(b"\\t"),
            0x08 => out.extend_from_slice(b"\\b"),
            0x0C => out.extend_from_slice(b"\\f"),
            0x20..=0x7E => out.push(byte),
            _ => out.extend_from_slice(format!("\\{:03o}", byte).as_bytes()),
        }
    }
    out.push(b')');
}

/// Writes `/Name` with `#xx` escapes for delimiters and non-regular bytes
fn write_name(name: &str, out: &mut Vec<u8>) {
    out.push(b'/');
    for byte in name.bytes() {
        match byte {
            0x00..=0x20 | b'#' | b'(' | b')' | b'<' | b'>' | b'[' | b']' | b'{' | b'}'
            | b'/' | b'%' => {
                out.extend_from_slice(format!("#{:02X}", byte).as_bytes());
            }
            _ => out.push(byte),
        }
    }
}
