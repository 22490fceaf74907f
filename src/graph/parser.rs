//! Parser for the compact adjacency-list notation used on the command line
//!
//! Groups are separated by whitespace. Each group names a source vertex,
//! a colon, then comma-separated `target/weight` pairs:
//!
//! ```text
//! 0:1/1.0,2/2.0 1:2/1.5 2:3/1.0 3:4/8.1
//! ```

use crate::graph::Edge;
use crate::{Error, Result};

/// Parses an adjacency list into edges, in the order they appear
pub fn parse_adjacency_list(input: &str) -> Result<Vec<Edge<f64>>> {
    let mut edges = Vec::new();

    for group in input.split_whitespace() {
        let (source, targets) = group
            .split_once(':')
            .ok_or_else(|| parse_error(group, "missing ':' after the source vertex"))?;
        let source = parse_vertex(source)?;

        // A trailing comma leaves an empty entry, which is tolerated
        for entry in targets.split(',').filter(|entry| !entry.is_empty()) {
            let (target, weight) = entry
                .split_once('/')
                .ok_or_else(|| parse_error(entry, "missing '/' between vertex and weight"))?;
            let target = parse_vertex(target)?;
            let weight = parse_weight(weight)?;
            edges.push(Edge::new(source, target, weight));
        }
    }

    Ok(edges)
}

fn parse_vertex(token: &str) -> Result<usize> {
    token
        .parse()
        .map_err(|_| parse_error(token, "vertex is not a non-negative integer"))
}

fn parse_weight(token: &str) -> Result<f64> {
    let weight: f64 = token
        .parse()
        .map_err(|_| parse_error(token, "weight is not a number"))?;
    if !weight.is_finite() {
        return Err(parse_error(token, "weight must be finite"));
    }
    Ok(weight)
}

fn parse_error(token: &str, reason: &'static str) -> Error {
    Error::Parse {
        token: token.to_string(),
        reason,
    }
}
