use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{ArrayRef, Float64Array, ListBuilder, StringArray, StringBuilder};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use serde_json::{json, Map, Value};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }

    /// Log-uniform: spans several orders of magnitude like box office numbers.
    fn log_range(&mut self, lo: f64, hi: f64) -> f64 {
        (self.range(lo.ln(), hi.ln())).exp()
    }

    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}

/// One generated row; `-1` marks an unknown number, as in exported catalogs.
struct Row {
    id: String,
    class: &'static str,
    name: String,
    age: Option<f64>,
    total_gross: Option<f64>,
    box_office: Option<f64>,
    rating: Option<f64>,
    links: Vec<String>,
}

const FIRST: [&str; 8] = ["Tom", "Meg", "Denzel", "Julia", "Keanu", "Sandra", "Morgan", "Emma"];
const LAST: [&str; 8] = ["Hanks", "Ryan", "Washington", "Roberts", "Reeves", "Bullock", "Freeman", "Stone"];
const TITLE_A: [&str; 6] = ["Dark", "Silent", "Last", "Golden", "Broken", "Hidden"];
const TITLE_B: [&str; 6] = ["River", "Empire", "Promise", "Signal", "Harbor", "Garden"];

fn generate(rng: &mut SimpleRng) -> Vec<Row> {
    let n_movies = 36;
    let n_actors = 48;
    let movie_ids: Vec<String> = (0..n_movies).map(|i| format!("m{i}")).collect();
    let mut rows = Vec::new();

    for i in 0..n_actors {
        let n_links = (rng.range(0.0, 12.0)) as usize;
        let links = (0..n_links)
            .map(|_| movie_ids[(rng.next_u64() % n_movies as u64) as usize].clone())
            .collect();
        rows.push(Row {
            id: format!("a{i}"),
            class: "Actor",
            name: format!("{} {}", FIRST[i % FIRST.len()], LAST[(i / FIRST.len() + i) % LAST.len()]),
            age: (!rng.chance(0.08)).then(|| rng.range(18.0, 90.0).round()),
            total_gross: (!rng.chance(0.1)).then(|| rng.log_range(1e4, 5e9).round()),
            box_office: None,
            rating: None,
            links,
        });
    }

    for (i, id) in movie_ids.iter().enumerate() {
        let n_cast = 1 + (rng.range(0.0, 20.0)) as usize;
        let links = (0..n_cast)
            .map(|_| format!("a{}", rng.next_u64() % n_actors as u64))
            .collect();
        rows.push(Row {
            id: id.clone(),
            class: "Movie",
            name: format!("The {} {}", TITLE_A[i % TITLE_A.len()], TITLE_B[(i / 2) % TITLE_B.len()]),
            age: (!rng.chance(0.05)).then(|| rng.range(1.0, 80.0).round()),
            total_gross: None,
            box_office: (!rng.chance(0.1)).then(|| rng.log_range(5e3, 2e9).round()),
            rating: Some((rng.range(1.0, 10.0) * 10.0).round() / 10.0),
            links,
        });
    }

    rows
}

fn or_sentinel(v: Option<f64>) -> f64 {
    v.unwrap_or(-1.0)
}

fn write_json(rows: &[Row], path: &str) -> Result<()> {
    let mut actors = Map::new();
    let mut movies = Map::new();
    for row in rows {
        let mut rec = Map::new();
        rec.insert("json_class".into(), json!(row.class));
        rec.insert("name".into(), json!(row.name));
        rec.insert("age".into(), json!(or_sentinel(row.age)));
        if row.class == "Actor" {
            rec.insert("total_gross".into(), json!(or_sentinel(row.total_gross)));
            rec.insert("movies".into(), json!(row.links));
            actors.insert(row.id.clone(), Value::Object(rec));
        } else {
            rec.insert("box_office".into(), json!(or_sentinel(row.box_office)));
            rec.insert("rating".into(), json!(row.rating));
            rec.insert("actors".into(), json!(row.links));
            movies.insert(row.id.clone(), Value::Object(rec));
        }
    }

    let text = serde_json::to_string_pretty(&json!([actors, movies]))?;
    std::fs::write(path, text).with_context(|| format!("writing {path}"))
}

fn write_parquet(rows: &[Row], path: &str) -> Result<()> {
    let f64_col = |get: fn(&Row) -> Option<f64>| -> ArrayRef {
        Arc::new(Float64Array::from(rows.iter().map(get).collect::<Vec<_>>()))
    };

    let mut links = ListBuilder::new(StringBuilder::new());
    for row in rows {
        for link in &row.links {
            links.values().append_value(link);
        }
        links.append(true);
    }

    let item = Arc::new(Field::new("item", DataType::Utf8, true));
    let schema = Arc::new(Schema::new(vec![
        Field::new("id", DataType::Utf8, false),
        Field::new("json_class", DataType::Utf8, false),
        Field::new("name", DataType::Utf8, false),
        Field::new("age", DataType::Float64, true),
        Field::new("total_gross", DataType::Float64, true),
        Field::new("box_office", DataType::Float64, true),
        Field::new("rating", DataType::Float64, true),
        Field::new("links", DataType::List(item), true),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(StringArray::from_iter_values(rows.iter().map(|r| r.id.as_str()))),
            Arc::new(StringArray::from_iter_values(rows.iter().map(|r| r.class))),
            Arc::new(StringArray::from_iter_values(rows.iter().map(|r| r.name.as_str()))),
            f64_col(|r| r.age),
            f64_col(|r| r.total_gross),
            f64_col(|r| r.box_office),
            f64_col(|r| r.rating),
            Arc::new(links.finish()),
        ],
    )
    .context("building record batch")?;

    let file = std::fs::File::create(path).with_context(|| format!("creating {path}"))?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating parquet writer")?;
    writer.write(&batch).context("writing parquet batch")?;
    writer.close().context("closing parquet writer")?;
    Ok(())
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let rows = generate(&mut rng);

    write_json(&rows, "sample_entities.json")?;
    write_parquet(&rows, "sample_entities.parquet")?;

    println!(
        "Wrote {} records to sample_entities.json and sample_entities.parquet",
        rows.len()
    );
    Ok(())
}
