// File: crates/history-core/src/snapshot.rs
// Summary: Fetch the snapshot file at one revision and parse it into ordered item records.

use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::history::HistorySource;
use crate::model::{ItemRecord, Revision, Snapshot};

/// Wire shape of one snapshot entry; unknown fields are ignored.
#[derive(Deserialize)]
struct RawRecord {
    #[serde(default)]
    name: Value,
    #[serde(default)]
    price: Value,
}

impl From<RawRecord> for ItemRecord {
    fn from(raw: RawRecord) -> Self {
        let name = match raw.name {
            Value::String(s) => s,
            _ => String::new(),
        };
        ItemRecord { name, price: price_of(&raw.price) }
    }
}

/// Accepts non-negative integers, integral non-negative floats and digit strings.
fn price_of(v: &Value) -> Option<u64> {
    match v {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0 && f.fract() == 0.0)
                .map(|f| f as u64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Parse snapshot content: a JSON array of `{name, price}` objects.
pub fn parse_snapshot(revision: &str, content: &str) -> Result<Vec<ItemRecord>> {
    let raw: Vec<RawRecord> = serde_json::from_str(content).map_err(|e| Error::Parse {
        revision: revision.to_string(),
        reason: e.to_string(),
    })?;
    Ok(raw.into_iter().map(ItemRecord::from).collect())
}

/// Fetch and parse the snapshot file as recorded at `revision`.
pub fn read_snapshot<H: HistorySource + ?Sized>(
    source: &H,
    revision: &Revision,
    file: &Path,
) -> Result<Snapshot> {
    let content = source.read_file(&revision.id, file)?;
    let records = parse_snapshot(&revision.id, &content)?;
    Ok(Snapshot { revision: revision.clone(), records })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_records_in_order() {
        let json = r#"[{"name":"盒装挂耳咖啡","price":1200,"grade":3},{"name":"9x19mm FMJ","price":10}]"#;
        let recs = parse_snapshot("r1", json).unwrap();
        assert_eq!(recs, vec![ItemRecord::new("盒装挂耳咖啡", 1200), ItemRecord::new("9x19mm FMJ", 10)]);
    }

    #[test]
    fn odd_fields_degrade_per_record() {
        let json = r#"[{"name":7,"price":5},{"name":"a"},{"name":"b","price":"42"},{"name":"c","price":-3},{"name":"d","price":3.0}]"#;
        let recs = parse_snapshot("r1", json).unwrap();
        assert_eq!(recs[0].name, "");
        assert_eq!(recs[1].price, None);
        assert_eq!(recs[2].price, Some(42));
        assert_eq!(recs[3].price, None);
        assert_eq!(recs[4].price, Some(3));
    }

    #[test]
    fn non_array_is_parse_error() {
        for bad in [r#"{"name":"a"}"#, "", "[1, 2]", "[{\"name\":\"a\""] {
            assert!(matches!(parse_snapshot("r1", bad), Err(Error::Parse { .. })), "{bad}");
        }
    }
}
