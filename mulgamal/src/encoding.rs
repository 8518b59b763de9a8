//! Hexadecimal encodings of keys and ciphertexts.
//!
//! There are two formats and they are not interchangeable:
//!
//! * the **document** encoding ([`DocumentEncoding`]) is meant for persistence and is keyed by
//!   lower-case field names (`g`, `p`, `y`, `x`, `c1`, `c2`), in a fixed order;
//! * the **transport** encoding ([`Ciphertext::to_transport`]) only exists for ciphertexts and is
//!   keyed by `C1`, `C2` and `P`. With the `serde` feature, it is also what a [`Ciphertext`]
//!   serializes to.
//!
//! Values are lower-case hexadecimal without prefix, padding or sign.

use crate::arithmetic::wipe;
use crate::ciphertext::Ciphertext;
use crate::error::{Error, Result};
use crate::keys::{PrivateKey, PublicKey};
use rug::Integer;
use std::collections::HashMap;
use tracing::debug;

/// An ordered list of `(field, hex value)` pairs, as stored by document databases.
#[derive(PartialEq, Eq, Debug, Clone, Default)]
pub struct Document {
    fields: Vec<(String, String)>,
}

impl Document {
    /// Creates an empty document.
    pub fn new() -> Self {
        Document { fields: Vec::new() }
    }

    /// Appends a field, keeping insertion order.
    pub fn push(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.fields.push((field.into(), value.into()));
    }

    /// Returns the value of the first field named `field`.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value.as_str())
    }

    /// Iterates over the fields in order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True if the document has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn hex_field(&self, field: &'static str) -> Result<Integer> {
        let raw = self.get(field).ok_or(Error::MissingField { field })?;
        parse_hex(field, raw)
    }
}

/// Conversion to and from the persistence-oriented [`Document`] shape.
pub trait DocumentEncoding: Sized {
    /// Encodes every integer field as lower-case hexadecimal.
    fn to_document(&self) -> Document;

    /// Decodes a document produced by [`DocumentEncoding::to_document`].
    fn from_document(document: &Document) -> Result<Self>;
}

impl DocumentEncoding for PublicKey {
    /// ```
    /// # use mulgamal::encoding::DocumentEncoding;
    /// # use mulgamal::keys::PublicKey;
    /// # use rug::Integer;
    /// let public_key = PublicKey::new(Integer::from(10), Integer::from(23), Integer::from(5)).unwrap();
    /// let document = public_key.to_document();
    /// assert_eq!(Some("a"), document.get("g"));
    /// assert_eq!(Some("17"), document.get("p"));
    /// assert_eq!(Some("5"), document.get("y"));
    /// ```
    fn to_document(&self) -> Document {
        let mut document = Document::new();
        document.push("g", format_hex(&self.g));
        document.push("p", format_hex(&self.p));
        document.push("y", format_hex(&self.y));
        document
    }

    fn from_document(document: &Document) -> Result<Self> {
        PublicKey::new(
            document.hex_field("g")?,
            document.hex_field("p")?,
            document.hex_field("y")?,
        )
    }
}

impl DocumentEncoding for PrivateKey {
    fn to_document(&self) -> Document {
        let mut document = Document::new();
        document.push("x", format_hex(&self.x));
        for (field, value) in self.public_key.to_document().fields() {
            document.push(field, value);
        }
        document
    }

    fn from_document(document: &Document) -> Result<Self> {
        let mut x = document.hex_field("x")?;

        match PublicKey::from_document(document) {
            Ok(public_key) => PrivateKey::new(public_key, x),
            Err(err) => {
                wipe(&mut x);
                Err(err)
            }
        }
    }
}

impl DocumentEncoding for Ciphertext {
    fn to_document(&self) -> Document {
        let mut document = Document::new();
        document.push("c1", format_hex(&self.c1));
        document.push("c2", format_hex(&self.c2));
        document.push("p", format_hex(&self.p));
        document
    }

    fn from_document(document: &Document) -> Result<Self> {
        Ciphertext::new(
            document.hex_field("c1")?,
            document.hex_field("c2")?,
            document.hex_field("p")?,
        )
    }
}

impl Ciphertext {
    /// Transport mapping keyed by `C1`, `C2` and `P`.
    /// ```
    /// # use mulgamal::ciphertext::Ciphertext;
    /// # use rug::Integer;
    /// let ciphertext = Ciphertext::new(Integer::from(33), Integer::from(99), Integer::from(192)).unwrap();
    /// let transport = ciphertext.to_transport();
    /// assert_eq!("21", transport["C1"]);
    /// assert_eq!("63", transport["C2"]);
    /// assert_eq!("c0", transport["P"]);
    /// ```
    pub fn to_transport(&self) -> HashMap<String, String> {
        let mut transport = HashMap::with_capacity(3);
        transport.insert("C1".to_string(), format_hex(&self.c1));
        transport.insert("C2".to_string(), format_hex(&self.c2));
        transport.insert("P".to_string(), format_hex(&self.p));
        transport
    }

    /// Parses a transport mapping. Fails with [`Error::HexDecode`] naming the first field that
    /// is not hexadecimal, or [`Error::MissingField`] if a key is absent. Keys are case-sensitive.
    pub fn from_transport(transport: &HashMap<String, String>) -> Result<Ciphertext> {
        let field = |field: &'static str| -> Result<Integer> {
            let raw = transport.get(field).ok_or(Error::MissingField { field })?;
            parse_hex(field, raw)
        };

        Ciphertext::new(field("C1")?, field("C2")?, field("P")?)
    }

    /// Serializes the transport mapping as a JSON object.
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parses a JSON object in the transport shape.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Ciphertext> {
        let transport: HashMap<String, String> = serde_json::from_str(json)?;
        Ciphertext::from_transport(&transport)
    }
}

fn format_hex(integer: &Integer) -> String {
    format!("{:x}", integer)
}

fn parse_hex(field: &'static str, raw: &str) -> Result<Integer> {
    let invalid = || {
        debug!(field, "field is not hexadecimal");
        Error::HexDecode {
            field,
            raw: raw.to_string(),
        }
    };

    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    Integer::from_str_radix(raw, 16).map_err(|_| invalid())
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::Document;
    use crate::ciphertext::Ciphertext;
    use serde::de::{self, MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::collections::HashMap;
    use std::fmt;

    impl Serialize for Ciphertext {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut map = serializer.serialize_map(Some(3))?;
            map.serialize_entry("C1", &super::format_hex(&self.c1))?;
            map.serialize_entry("C2", &super::format_hex(&self.c2))?;
            map.serialize_entry("P", &super::format_hex(&self.p))?;
            map.end()
        }
    }

    impl<'de> Deserialize<'de> for Ciphertext {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Ciphertext, D::Error> {
            let transport = HashMap::<String, String>::deserialize(deserializer)?;
            Ciphertext::from_transport(&transport).map_err(de::Error::custom)
        }
    }

    impl Serialize for Document {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut map = serializer.serialize_map(Some(self.len()))?;
            for (field, value) in self.fields() {
                map.serialize_entry(field, value)?;
            }
            map.end()
        }
    }

    struct DocumentVisitor;

    impl<'de> Visitor<'de> for DocumentVisitor {
        type Value = Document;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a map of field names to hexadecimal strings")
        }

        fn visit_map<M: MapAccess<'de>>(self, mut access: M) -> Result<Document, M::Error> {
            let mut document = Document::new();
            while let Some((field, value)) = access.next_entry::<String, String>()? {
                document.push(field, value);
            }
            Ok(document)
        }
    }

    impl<'de> Deserialize<'de> for Document {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Document, D::Error> {
            deserializer.deserialize_map(DocumentVisitor)
        }
    }
}
