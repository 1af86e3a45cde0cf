//! Edge-list loader
//!
//! One entry per line: `LABEL` declares an isolated vertex, `SOURCE TARGET
//! [WEIGHT]` declares an edge (weight defaults to 1). Blank lines and anything
//! after `#` are ignored.

use anyhow::{bail, Context, Result};
use digraph::{GraphStore, Weight};
use std::path::Path;
use tracing::debug;

const DEFAULT_WEIGHT: Weight = 1;

/// Read and apply an edge-list file
pub fn load_file(path: &Path) -> Result<GraphStore<String>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read graph file {}", path.display()))?;
    let store = parse(&text).with_context(|| format!("invalid graph file {}", path.display()))?;
    debug!(
        "Loaded {} vertices and {} edges from {}",
        store.vertex_count(),
        store.edge_count(),
        path.display()
    );
    Ok(store)
}

/// Apply edge-list text to a fresh store, in line order
pub fn parse(text: &str) -> Result<GraphStore<String>> {
    let mut store = GraphStore::new();

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        match fields.as_slice() {
            [label] => {
                store.add_vertex(label.to_string());
            }
            [source, target, rest @ ..] if rest.len() <= 1 => {
                let weight = match rest.first() {
                    Some(w) => w
                        .parse::<Weight>()
                        .with_context(|| format!("line {}: weight '{}' is not an integer", line_no, w))?,
                    None => DEFAULT_WEIGHT,
                };
                store
                    .add_vertex_with_edges(
                        source.to_string(),
                        Vec::<(String, Weight)>::new(),
                        [(target.to_string(), weight)],
                    )
                    .with_context(|| format!("line {}", line_no))?;
            }
            _ => bail!(
                "line {}: expected 'LABEL' or 'SOURCE TARGET [WEIGHT]', found {} fields",
                line_no,
                fields.len()
            ),
        }
    }

    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_vertices_and_edges() {
        let text = "\
# course prerequisites
Trig
Calc ODEs 2
Trig Calc      # default weight
Galois
";
        let store = parse(text).unwrap();
        assert_eq!(store.vertex_count(), 4);
        assert_eq!(store.edge_count(), 2);
        assert_eq!(store.edge_weight(&"Calc".to_string(), &"ODEs".to_string()), Some(2));
        assert_eq!(store.edge_weight(&"Trig".to_string(), &"Calc".to_string()), Some(1));
        assert!(store.get_vertex(&"Galois".to_string()).unwrap().is_isolated());
    }

    #[test]
    fn test_repeated_edge_keeps_first_weight() {
        let store = parse("A B 4\nA B 9\n").unwrap();
        assert_eq!(store.edge_count(), 1);
        assert_eq!(store.edge_weight(&"A".to_string(), &"B".to_string()), Some(4));
    }

    #[test]
    fn test_errors_carry_line_numbers() {
        let err = parse("A B\nA B x\n").unwrap_err();
        assert!(format!("{:#}", err).contains("line 2"));

        let err = parse("A B 1 extra\n").unwrap_err();
        assert!(err.to_string().contains("line 1"));

        let err = parse("\n\nA A\n").unwrap_err();
        assert!(format!("{:#}", err).contains("line 3"));
    }
}
