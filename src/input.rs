use serde_json::{Map, Value};

use crate::share::Share;
use crate::Error;

/// A parsed share document: the threshold plus every share listed in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub k: usize,
    pub shares: Vec<Share>,
}

/// Parses a share document of the form
///
/// ```json
/// { "keys": { "n": 4, "k": 3 },
///   "1": { "base": "10", "value": "4" },
///   "2": { "base": 2, "value": "111" } }
/// ```
///
/// Every entry other than `"keys"` is a share keyed by its stringified
/// x-coordinate. `base` may be a JSON number or a stringified integer; `n` is
/// informational and not read.
pub fn parse_document(text: &str) -> Result<Document, Error> {
    let root: Value =
        serde_json::from_str(text).map_err(|e| Error::MalformedDocument(e.to_string()))?;
    let root = root
        .as_object()
        .ok_or_else(|| Error::MalformedDocument("top level is not an object".to_string()))?;

    let keys = root
        .get("keys")
        .and_then(Value::as_object)
        .ok_or_else(|| Error::MalformedDocument("missing \"keys\" object".to_string()))?;
    let k = int_field(keys, "k")? as usize;

    let mut shares = Vec::with_capacity(root.len() - 1);
    for (key, node) in root {
        if key == "keys" {
            continue;
        }
        let x = key
            .parse::<u32>()
            .map_err(|_| Error::MalformedDocument(format!("share key {key:?} is not an index")))?;
        let node = node
            .as_object()
            .ok_or_else(|| Error::MalformedDocument(format!("share {x} is not an object")))?;
        let base = u32::try_from(int_field(node, "base")?)
            .map_err(|_| Error::MalformedDocument(format!("share {x} has an absurd base")))?;
        let value = node
            .get("value")
            .and_then(Value::as_str)
            .ok_or_else(|| Error::MalformedDocument(format!("share {x} has no string value")))?;
        shares.push(Share::new(x, base, value));
    }

    Ok(Document { k, shares })
}

/// Reads an integer field that documents write either as a number or as a
/// stringified number.
fn int_field(obj: &Map<String, Value>, name: &str) -> Result<u64, Error> {
    let value = obj
        .get(name)
        .ok_or_else(|| Error::MalformedDocument(format!("missing field {name:?}")))?;
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
    .ok_or_else(|| Error::MalformedDocument(format!("field {name:?} is not a non-negative integer")))
}
