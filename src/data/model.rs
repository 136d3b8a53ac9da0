use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

/// Legacy marker for "unknown" numeric attributes in exported catalogs.
pub const MISSING_SENTINEL: f64 = -1.0;

/// Field holding the entity's class tag ("Actor" / "Movie").
pub const CLASS_FIELD: &str = "json_class";

/// Field holding the entity's display name.
pub const NAME_FIELD: &str = "name";

// ---------------------------------------------------------------------------
// AttributeValue – a single attribute of an entity
// ---------------------------------------------------------------------------

/// A dynamically-typed attribute value as found in the source catalogs.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    Number(f64),
    /// A list attribute (e.g. an actor's movies); plotted by its length.
    Sequence(Vec<AttributeValue>),
    Text(String),
    Bool(bool),
    /// Unknown value. Catalogs encode this as `-1`.
    Missing,
}

impl AttributeValue {
    /// Wrap a raw number, mapping the legacy sentinel to [`AttributeValue::Missing`].
    pub fn from_number(n: f64) -> Self {
        if n == MISSING_SENTINEL {
            AttributeValue::Missing
        } else {
            AttributeValue::Number(n)
        }
    }

    /// The scalar used for plotting: numbers as-is, sequences by length.
    pub fn magnitude(&self) -> Option<f64> {
        match self {
            AttributeValue::Number(n) => Some(*n),
            AttributeValue::Sequence(items) => Some(items.len() as f64),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, AttributeValue::Missing)
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Number(n) => write!(f, "{n}"),
            AttributeValue::Sequence(items) => write!(f, "[{} items]", items.len()),
            AttributeValue::Text(s) => write!(f, "{s}"),
            AttributeValue::Bool(b) => write!(f, "{b}"),
            AttributeValue::Missing => write!(f, "<missing>"),
        }
    }
}

// ---------------------------------------------------------------------------
// EntityKind – the two fixed categories
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum EntityKind {
    #[default]
    Actor,
    Movie,
}

impl EntityKind {
    pub const ALL: [EntityKind; 2] = [EntityKind::Actor, EntityKind::Movie];

    /// The class tag carried by records of this kind.
    pub fn class_tag(self) -> &'static str {
        match self {
            EntityKind::Actor => "Actor",
            EntityKind::Movie => "Movie",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_tag())
    }
}

impl FromStr for EntityKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Actor" => Ok(EntityKind::Actor),
            "Movie" => Ok(EntityKind::Movie),
            other => anyhow::bail!("unknown entity class '{other}'"),
        }
    }
}

// ---------------------------------------------------------------------------
// EntityRecord – one actor or movie
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct EntityRecord {
    pub id: String,
    pub class_tag: String,
    pub name: String,
    /// Every other field: attribute name → value.
    pub attributes: BTreeMap<String, AttributeValue>,
}

impl EntityRecord {
    /// Label attached to the rendered point, e.g. `"Actor:Tom Hanks"`.
    pub fn label(&self) -> String {
        format!("{}:{}", self.class_tag, self.name)
    }

    pub fn attribute(&self, name: &str) -> Option<&AttributeValue> {
        self.attributes.get(name)
    }
}

// ---------------------------------------------------------------------------
// AttributeRange – observed bounds of one attribute
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttributeRange {
    pub minimum: f64,
    pub maximum: f64,
}

impl AttributeRange {
    pub fn new(minimum: f64, maximum: f64) -> Self {
        AttributeRange { minimum, maximum }
    }
}

// ---------------------------------------------------------------------------
// DataSet – all records of one kind
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct DataSet {
    pub kind: EntityKind,
    pub records: Vec<EntityRecord>,
    /// Sorted names of attributes that carry a magnitude in at least one record.
    pub attribute_names: Vec<String>,
}

impl DataSet {
    pub fn from_records(kind: EntityKind, records: Vec<EntityRecord>) -> Self {
        let names: BTreeSet<String> = records
            .iter()
            .flat_map(|r| r.attributes.iter())
            .filter(|(_, v)| v.magnitude().is_some())
            .map(|(k, _)| k.clone())
            .collect();

        DataSet {
            kind,
            records,
            attribute_names: names.into_iter().collect(),
        }
    }

    /// Min/max of every present magnitude of `attribute`.
    /// `None` when no record has a usable value for it.
    pub fn attribute_range(&self, attribute: &str) -> Option<AttributeRange> {
        self.records
            .iter()
            .filter_map(|r| r.attribute(attribute)?.magnitude())
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some(AttributeRange::new(v, v)),
                Some(r) => Some(AttributeRange::new(r.minimum.min(v), r.maximum.max(v))),
            })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Catalog – one data set per kind
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Catalog {
    pub actors: DataSet,
    pub movies: DataSet,
}

impl Catalog {
    /// Partition records by class tag. Records of an unknown class are dropped.
    pub fn from_records(records: Vec<EntityRecord>) -> Self {
        let mut actors = Vec::new();
        let mut movies = Vec::new();
        for record in records {
            match record.class_tag.parse::<EntityKind>() {
                Ok(EntityKind::Actor) => actors.push(record),
                Ok(EntityKind::Movie) => movies.push(record),
                Err(e) => log::warn!("Skipping record '{}': {e}", record.id),
            }
        }
        Catalog {
            actors: DataSet::from_records(EntityKind::Actor, actors),
            movies: DataSet::from_records(EntityKind::Movie, movies),
        }
    }

    pub fn data_set(&self, kind: EntityKind) -> &DataSet {
        match kind {
            EntityKind::Actor => &self.actors,
            EntityKind::Movie => &self.movies,
        }
    }

    pub fn len(&self) -> usize {
        self.actors.len() + self.movies.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, class: &str, attrs: &[(&str, AttributeValue)]) -> EntityRecord {
        EntityRecord {
            id: id.to_string(),
            class_tag: class.to_string(),
            name: format!("name-{id}"),
            attributes: attrs
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        }
    }

    #[test]
    fn sentinel_becomes_missing() {
        assert_eq!(AttributeValue::from_number(-1.0), AttributeValue::Missing);
        assert_eq!(AttributeValue::from_number(-2.0), AttributeValue::Number(-2.0));
    }

    #[test]
    fn sequence_magnitude_is_its_length() {
        let v = AttributeValue::Sequence(vec![
            AttributeValue::Text("a".into()),
            AttributeValue::Text("b".into()),
            AttributeValue::Text("c".into()),
        ]);
        assert_eq!(v.magnitude(), Some(3.0));
        assert_eq!(AttributeValue::Missing.magnitude(), None);
        assert_eq!(AttributeValue::Text("x".into()).magnitude(), None);
    }

    #[test]
    fn label_joins_class_and_name() {
        let mut r = record("1", "Actor", &[]);
        r.name = "Tom Hanks".into();
        assert_eq!(r.label(), "Actor:Tom Hanks");
    }

    #[test]
    fn range_ignores_missing_and_text() {
        let ds = DataSet::from_records(
            EntityKind::Movie,
            vec![
                record("1", "Movie", &[("gross", AttributeValue::Number(250.0))]),
                record("2", "Movie", &[("gross", AttributeValue::Missing)]),
                record("3", "Movie", &[("gross", AttributeValue::Number(4.0))]),
                record("4", "Movie", &[("gross", AttributeValue::Text("n/a".into()))]),
            ],
        );
        assert_eq!(ds.attribute_range("gross"), Some(AttributeRange::new(4.0, 250.0)));
        assert_eq!(ds.attribute_range("age"), None);
        assert_eq!(ds.attribute_names, vec!["gross".to_string()]);
    }

    #[test]
    fn catalog_partitions_by_class() {
        let catalog = Catalog::from_records(vec![
            record("a", "Actor", &[]),
            record("m", "Movie", &[]),
            record("x", "Director", &[]),
        ]);
        assert_eq!(catalog.data_set(EntityKind::Actor).len(), 1);
        assert_eq!(catalog.data_set(EntityKind::Movie).len(), 1);
        assert_eq!(catalog.len(), 2);
    }
}
