use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result, bail};
use arrow::array::{Array, ArrayRef, AsArray};
use arrow::datatypes::{DataType, Float32Type, Float64Type, Int32Type, Int64Type};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::{Map, Value as JsonValue};

use super::model::{AttributeValue, Catalog, CLASS_FIELD, EntityRecord, NAME_FIELD};

/// Optional explicit identifier column / field.
const ID_FIELD: &str = "id";

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load an actor/movie catalog from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.json`    – `[{id: record, ...}, {id: record, ...}]`, `{id: record}` or `[record, ...]`
/// * `.csv`     – columns `json_class`, `name`, optional `id`; lists are semicolon-separated
/// * `.parquet` – same columns as CSV, list columns become sequences
pub fn load_file(path: &Path) -> Result<Catalog> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let records = match ext.as_str() {
        "json" => load_json(path)?,
        "csv" => load_csv(path)?,
        "parquet" | "pq" => load_parquet(path)?,
        other => bail!("Unsupported file extension: .{other}"),
    };

    Ok(Catalog::from_records(records))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// The exported catalog is an array with one `id → record` map per category:
///
/// ```json
/// [
///   { "a1": { "json_class": "Actor", "name": "Tom Hanks", "age": 60, "movies": ["m1", "m2"] } },
///   { "m1": { "json_class": "Movie", "name": "Big", "box_office": 151668774 } }
/// ]
/// ```
///
/// A flat array of records, or a single `id → record` object, is accepted too.
fn load_json(path: &Path) -> Result<Vec<EntityRecord>> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;
    records_from_json(&root)
}

fn records_from_json(root: &JsonValue) -> Result<Vec<EntityRecord>> {
    let mut records = Vec::new();
    match root {
        JsonValue::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                let obj = item
                    .as_object()
                    .with_context(|| format!("Element {i} is not a JSON object"))?;
                if obj.contains_key(CLASS_FIELD) {
                    records.push(json_record(&i.to_string(), obj)?);
                } else {
                    collect_id_map(obj, &mut records)?;
                }
            }
        }
        JsonValue::Object(obj) => collect_id_map(obj, &mut records)?,
        _ => bail!("Expected a top-level JSON array or object"),
    }
    Ok(records)
}

fn collect_id_map(map: &Map<String, JsonValue>, out: &mut Vec<EntityRecord>) -> Result<()> {
    for (id, rec) in map {
        let obj = rec
            .as_object()
            .with_context(|| format!("Record '{id}' is not a JSON object"))?;
        out.push(json_record(id, obj)?);
    }
    Ok(())
}

fn json_record(fallback_id: &str, obj: &Map<String, JsonValue>) -> Result<EntityRecord> {
    let id = match obj.get(ID_FIELD) {
        Some(JsonValue::String(s)) => s.clone(),
        Some(JsonValue::Number(n)) => n.to_string(),
        _ => fallback_id.to_string(),
    };
    let class_tag = obj
        .get(CLASS_FIELD)
        .and_then(|v| v.as_str())
        .with_context(|| format!("Record '{id}': missing '{CLASS_FIELD}'"))?
        .to_string();
    let name = obj
        .get(NAME_FIELD)
        .and_then(|v| v.as_str())
        .with_context(|| format!("Record '{id}': missing '{NAME_FIELD}'"))?
        .to_string();

    let attributes = obj
        .iter()
        .filter(|(k, _)| !is_identity_field(k))
        .map(|(k, v)| (k.clone(), json_to_attribute(v)))
        .collect();

    Ok(EntityRecord {
        id,
        class_tag,
        name,
        attributes,
    })
}

fn json_to_attribute(val: &JsonValue) -> AttributeValue {
    match val {
        JsonValue::Number(n) => match n.as_f64() {
            Some(f) => AttributeValue::from_number(f),
            None => AttributeValue::Text(n.to_string()),
        },
        JsonValue::Array(items) => {
            AttributeValue::Sequence(items.iter().map(json_to_attribute).collect())
        }
        JsonValue::String(s) => AttributeValue::Text(s.clone()),
        JsonValue::Bool(b) => AttributeValue::Bool(*b),
        JsonValue::Null => AttributeValue::Missing,
        other => AttributeValue::Text(other.to_string()),
    }
}

fn is_identity_field(key: &str) -> bool {
    key == ID_FIELD || key == CLASS_FIELD || key == NAME_FIELD
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, one record per row.
/// List cells are semicolon-separated (`"m1;m2;m3"`); a lone `;` is an empty list.
/// A cell is only a list if it contains `;`, so a one-element list needs a
/// trailing separator (`"m1;"`). A bare `m1` loads as text.
fn load_csv(path: &Path) -> Result<Vec<EntityRecord>> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let class_idx = headers
        .iter()
        .position(|h| h == CLASS_FIELD)
        .with_context(|| format!("CSV missing '{CLASS_FIELD}' column"))?;
    let name_idx = headers
        .iter()
        .position(|h| h == NAME_FIELD)
        .with_context(|| format!("CSV missing '{NAME_FIELD}' column"))?;
    let id_idx = headers.iter().position(|h| h == ID_FIELD);

    let mut records = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let row = result.with_context(|| format!("CSV row {row_no}"))?;

        let id = id_idx
            .and_then(|i| row.get(i))
            .map(str::to_string)
            .unwrap_or_else(|| row_no.to_string());

        let mut attributes = BTreeMap::new();
        for (col_idx, cell) in row.iter().enumerate() {
            let col_name = &headers[col_idx];
            if is_identity_field(col_name) {
                continue;
            }
            attributes.insert(col_name.clone(), parse_cell(cell));
        }

        records.push(EntityRecord {
            id,
            class_tag: row.get(class_idx).unwrap_or("").to_string(),
            name: row.get(name_idx).unwrap_or("").to_string(),
            attributes,
        });
    }

    Ok(records)
}

fn parse_cell(s: &str) -> AttributeValue {
    if s.contains(';') {
        return AttributeValue::Sequence(
            s.split(';')
                .map(str::trim)
                .filter(|tok| !tok.is_empty())
                .map(guess_scalar)
                .collect(),
        );
    }
    guess_scalar(s.trim())
}

fn guess_scalar(s: &str) -> AttributeValue {
    if s.is_empty() {
        return AttributeValue::Missing;
    }
    if let Ok(f) = s.parse::<f64>() {
        return AttributeValue::from_number(f);
    }
    if s == "true" || s == "false" {
        return AttributeValue::Bool(s == "true");
    }
    AttributeValue::Text(s.to_string())
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file with one row per record.
///
/// Expected schema:
/// - `json_class`, `name`: Utf8
/// - `id`: optional, Utf8 or integer
/// - any other column is an attribute; List/LargeList columns become sequences
fn load_parquet(path: &Path) -> Result<Vec<EntityRecord>> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)
        .context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut records = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let schema = batch.schema();

        let class_idx = schema
            .index_of(CLASS_FIELD)
            .map_err(|_| anyhow::anyhow!("Parquet file missing '{CLASS_FIELD}' column"))?;
        let name_idx = schema
            .index_of(NAME_FIELD)
            .map_err(|_| anyhow::anyhow!("Parquet file missing '{NAME_FIELD}' column"))?;
        let id_idx = schema.index_of(ID_FIELD).ok();

        let attr_cols: Vec<(usize, String)> = schema
            .fields()
            .iter()
            .enumerate()
            .filter(|(_, f)| !is_identity_field(f.name()))
            .map(|(i, f)| (i, f.name().clone()))
            .collect();

        for row in 0..batch.num_rows() {
            let id = match id_idx {
                Some(i) => arrow_value(batch.column(i), row).to_string(),
                None => records.len().to_string(),
            };
            let class_tag = arrow_text(batch.column(class_idx), row)
                .with_context(|| format!("Row {row}: '{CLASS_FIELD}' is not text"))?;
            let name = arrow_text(batch.column(name_idx), row)
                .with_context(|| format!("Row {row}: '{NAME_FIELD}' is not text"))?;

            let attributes = attr_cols
                .iter()
                .map(|(i, col)| (col.clone(), arrow_value(batch.column(*i), row)))
                .collect();

            records.push(EntityRecord {
                id,
                class_tag,
                name,
                attributes,
            });
        }
    }

    Ok(records)
}

// -- Arrow helpers --

fn arrow_text(col: &ArrayRef, row: usize) -> Option<String> {
    match arrow_value(col, row) {
        AttributeValue::Text(s) => Some(s),
        _ => None,
    }
}

/// Convert a single Arrow cell, recursing into list columns.
fn arrow_value(col: &ArrayRef, row: usize) -> AttributeValue {
    if col.is_null(row) {
        return AttributeValue::Missing;
    }
    match col.data_type() {
        DataType::Utf8 => AttributeValue::Text(col.as_string::<i32>().value(row).to_string()),
        DataType::LargeUtf8 => AttributeValue::Text(col.as_string::<i64>().value(row).to_string()),
        DataType::Int32 => {
            AttributeValue::from_number(col.as_primitive::<Int32Type>().value(row) as f64)
        }
        DataType::Int64 => {
            AttributeValue::from_number(col.as_primitive::<Int64Type>().value(row) as f64)
        }
        DataType::Float32 => {
            AttributeValue::from_number(col.as_primitive::<Float32Type>().value(row) as f64)
        }
        DataType::Float64 => {
            AttributeValue::from_number(col.as_primitive::<Float64Type>().value(row))
        }
        DataType::Boolean => AttributeValue::Bool(col.as_boolean().value(row)),
        DataType::List(_) => list_items(&col.as_list::<i32>().value(row)),
        DataType::LargeList(_) => list_items(&col.as_list::<i64>().value(row)),
        other => AttributeValue::Text(format!("{other:?}")),
    }
}

fn list_items(inner: &ArrayRef) -> AttributeValue {
    AttributeValue::Sequence((0..inner.len()).map(|i| arrow_value(inner, i)).collect())
}
