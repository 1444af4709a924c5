//! Parsing for Pandoc-style attribute blocks: `{#id .class key=value}`
//!
//! Syntax: `{#identifier .class1 .class2 key1=val1 key2="val 2"}`
//!
//! Rules:
//! - Surrounded by `{ }`; `{}` is a valid, empty block
//! - Identifier: `#id` (only the first one counts)
//! - Classes: `.class` (can have multiple); a `class=...` pair merges into the same list
//! - Key-value pairs: `key=value`, `key="value"` or `key='value'`
//! - Tokens that fit none of the above are skipped

/// Value of a single attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    Single(String),
    List(Vec<String>),
}

impl AttributeValue {
    /// The value as it appears in HTML output; lists are space separated.
    pub fn joined(&self) -> String {
        match self {
            AttributeValue::Single(value) => value.clone(),
            AttributeValue::List(values) => values.join(" "),
        }
    }
}

/// Attribute name to value mapping, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, AttributeValue)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Sets `name`, replacing an earlier value in place.
    pub fn insert(&mut self, name: impl Into<String>, value: AttributeValue) {
        let name = name.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Appends class names to the `class` list.
    pub fn push_classes<'s>(&mut self, classes: impl IntoIterator<Item = &'s str>) {
        let incoming = classes.into_iter().filter(|c| !c.is_empty()).map(str::to_string);
        match self.entries.iter_mut().find(|(key, _)| key == "class") {
            Some((_, AttributeValue::List(list))) => list.extend(incoming),
            Some((_, slot)) => {
                let mut list: Vec<String> = slot.joined().split_whitespace().map(str::to_string).collect();
                list.extend(incoming);
                *slot = AttributeValue::List(list);
            }
            None => {
                let list: Vec<String> = incoming.collect();
                if !list.is_empty() {
                    self.entries.push(("class".to_string(), AttributeValue::List(list)));
                }
            }
        }
    }

    pub fn id(&self) -> Option<&str> {
        match self.get("id")? {
            AttributeValue::Single(id) => Some(id),
            AttributeValue::List(ids) => ids.first().map(String::as_str),
        }
    }

    pub fn classes(&self) -> Vec<&str> {
        match self.get("class") {
            Some(AttributeValue::List(list)) => list.iter().map(String::as_str).collect(),
            Some(AttributeValue::Single(value)) => value.split_whitespace().collect(),
            None => Vec::new(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }
}

/// Parse an attribute block at the start of `text`.
///
/// Returns the attributes and the number of bytes the block occupies
/// (braces included), or `None` when `text` does not start with `{` or the
/// brace is never closed.
pub fn parse_attribute_block(text: &str) -> Option<(Attributes, usize)> {
    if !text.starts_with('{') {
        return None;
    }
    let close = find_closing_brace(text)?;
    let attrs = parse_attribute_content(&text[1..close]);
    Some((attrs, close + 1))
}

/// Byte index of the `}` closing the block, skipping braces inside quotes.
fn find_closing_brace(text: &str) -> Option<usize> {
    let mut quote: Option<u8> = None;
    for (i, b) in text.bytes().enumerate().skip(1) {
        match (quote, b) {
            (Some(q), _) if b == q => quote = None,
            (Some(_), _) => {}
            (None, b'"' | b'\'') => quote = Some(b),
            (None, b'}') => return Some(i),
            (None, b'\n') => return None,
            _ => {}
        }
    }
    None
}

/// Parse the content inside the attribute braces.
fn parse_attribute_content(content: &str) -> Attributes {
    let mut attrs = Attributes::new();
    let mut seen_id = false;

    let bytes = content.as_bytes();
    let mut pos = 0;

    let word_end = |mut pos: usize| {
        while pos < bytes.len() && !bytes[pos].is_ascii_whitespace() {
            pos += 1;
        }
        pos
    };

    while pos < bytes.len() {
        // Skip whitespace
        while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
            pos += 1;
        }
        if pos >= bytes.len() {
            break;
        }

        match bytes[pos] {
            b'#' => {
                let end = word_end(pos + 1);
                if !seen_id && end > pos + 1 {
                    attrs.insert("id", AttributeValue::Single(content[pos + 1..end].to_string()));
                    seen_id = true;
                }
                pos = end;
            }
            b'.' => {
                let end = word_end(pos + 1);
                attrs.push_classes([&content[pos + 1..end]]);
                pos = end;
            }
            _ => {
                let key_start = pos;
                while pos < bytes.len() && bytes[pos] != b'=' && !bytes[pos].is_ascii_whitespace() {
                    pos += 1;
                }

                if pos >= bytes.len() || bytes[pos] != b'=' || pos == key_start {
                    // Not a valid key=value, skip this token
                    log::trace!("Skipping attribute token {:?}", &content[key_start..word_end(pos)]);
                    pos = word_end(pos);
                    continue;
                }

                let key = &content[key_start..pos];
                pos += 1; // Skip =

                let value = if pos < bytes.len() && (bytes[pos] == b'"' || bytes[pos] == b'\'') {
                    let quote = bytes[pos];
                    pos += 1;
                    let start = pos;
                    while pos < bytes.len() && bytes[pos] != quote {
                        pos += 1;
                    }
                    let value = &content[start..pos];
                    if pos < bytes.len() {
                        pos += 1; // Skip closing quote
                    }
                    value
                } else {
                    let start = pos;
                    pos = word_end(pos);
                    &content[start..pos]
                };

                if key == "class" {
                    attrs.push_classes(value.split_whitespace());
                } else {
                    attrs.insert(key, AttributeValue::Single(value.to_string()));
                }
            }
        }
    }

    attrs
}
