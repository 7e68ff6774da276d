//! Owned XML element tree.
//!
//! Definition documents are small enough to hold in memory, and the typed
//! readers in [`xsd`](super::xsd), [`profiles`](super::profiles) and
//! [`terminology`](super::terminology) need random access to children, so
//! the quick-xml event stream is folded into a tree once per document.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use super::error::SchemaError;

/// One XML element with its attributes, child elements and text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    /// Local name, namespace prefix removed (`xs:element` → `element`).
    pub name: String,
    /// Attributes in document order, keys verbatim.
    pub attributes: Vec<(String, String)>,
    pub children: Vec<XmlElement>,
    /// Concatenated text and CDATA content.
    pub text: String,
}

impl XmlElement {
    /// Parse a whole document and return its root element.
    pub fn parse(source_name: &str, input: &[u8]) -> Result<Self, SchemaError> {
        let mut reader = Reader::from_reader(input);
        reader.config_mut().trim_text(true);

        let mut buf = Vec::new();
        let mut stack: Vec<XmlElement> = Vec::new();
        let mut root: Option<XmlElement> = None;

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => {
                    stack.push(Self::from_start(source_name, e)?);
                }
                Ok(Event::Empty(ref e)) => {
                    // Self-closing element - open and close in one step
                    let element = Self::from_start(source_name, e)?;
                    Self::attach(&mut stack, &mut root, element);
                }
                Ok(Event::End(_)) => {
                    if let Some(element) = stack.pop() {
                        Self::attach(&mut stack, &mut root, element);
                    }
                }
                Ok(Event::Text(ref t)) => {
                    let text = t.unescape().map_err(|e| {
                        SchemaError::xml(source_name, format!("Text error: {e}"))
                    })?;
                    if let Some(top) = stack.last_mut() {
                        top.text.push_str(&text);
                    }
                }
                Ok(Event::CData(ref c)) => {
                    if let Some(top) = stack.last_mut() {
                        top.text.push_str(&String::from_utf8_lossy(c));
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(SchemaError::xml(
                        source_name,
                        format!("XML parse error at position {}: {e}", reader.error_position()),
                    ));
                }
                _ => {}
            }
            buf.clear();
        }

        if !stack.is_empty() {
            return Err(SchemaError::xml(source_name, "unexpected end of document"));
        }
        root.ok_or_else(|| SchemaError::xml(source_name, "document has no root element"))
    }

    fn from_start(source_name: &str, e: &BytesStart<'_>) -> Result<Self, SchemaError> {
        let local = e.local_name();
        let name = std::str::from_utf8(local.as_ref())
            .map_err(|err| SchemaError::xml(source_name, format!("Invalid tag name: {err}")))?
            .to_string();

        let mut attributes = Vec::new();
        for attr_result in e.attributes() {
            let attr = attr_result
                .map_err(|err| SchemaError::xml(source_name, format!("Attribute error: {err}")))?;
            let key = std::str::from_utf8(attr.key.as_ref())
                .map_err(|err| SchemaError::xml(source_name, format!("Attribute key error: {err}")))?
                .to_string();
            let value = attr
                .unescape_value()
                .map_err(|err| {
                    SchemaError::xml(source_name, format!("Attribute value error: {err}"))
                })?
                .to_string();
            attributes.push((key, value));
        }

        Ok(Self {
            name,
            attributes,
            ..Self::default()
        })
    }

    fn attach(stack: &mut [XmlElement], root: &mut Option<XmlElement>, element: XmlElement) {
        match stack.last_mut() {
            Some(parent) => parent.children.push(element),
            None => {
                if root.is_none() {
                    *root = Some(element);
                }
            }
        }
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    /// Value of an attribute by verbatim key.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// First child with the given local name.
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|c| c.name == name)
    }

    /// All children with the given local name, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// The `value` attribute of the first child named `name`.
    ///
    /// FHIR XML carries primitive values as `<name value="..."/>`.
    pub fn value_of(&self, name: &str) -> Option<&str> {
        self.child(name).and_then(|c| c.attr("value"))
    }

    /// Every `value` attribute of the children named `name`.
    pub fn values_of<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.children_named(name).filter_map(|c| c.attr("value"))
    }
}
