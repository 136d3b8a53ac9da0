/// Data layer: entity records, categories and loading.
///
/// Architecture:
/// ```text
///  .json / .csv / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Vec<EntityRecord>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Catalog   │  one DataSet per EntityKind (Actor / Movie)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ DataSet   │  records, attribute names, attribute_range()
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
