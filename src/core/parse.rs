//! Reader for the shared graph input format.
//!
//! Both graph representations consume the same shape of text stream: a node
//! count line, that many label lines, then whitespace-separated edge records
//! terminated by a record whose `from` field is `0` (or by end of input).
//! The matrix graph reads weighted `(from, to, weight)` triples; the
//! adjacency-list graph reads bare `(from, to)` pairs.
//!
//! Recovery from malformed input is out of contract. The parser is strict
//! and best-effort: anything it cannot read as the format above surfaces as
//! [`Error::MalformedInput`] naming what was expected.

use std::io::BufRead;

use super::error::{Error, Result};

/// A weighted edge record from the input stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeTriple {
    pub from: usize,
    pub to: usize,
    pub weight: u32,
}

/// Parsed stream header: one label per node, in id order (id = index + 1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub labels: Vec<String>,
}

impl Header {
    pub fn node_count(&self) -> usize {
        self.labels.len()
    }
}

/// Read the node count line and the label lines that follow it.
pub fn read_header(reader: &mut impl BufRead) -> Result<Header> {
    let count_line = read_line(reader)?
        .ok_or_else(|| Error::MalformedInput("expected node count, got end of input".into()))?;

    let count: usize = count_line
        .trim()
        .parse()
        .map_err(|_| Error::MalformedInput(format!("invalid node count '{}'", count_line.trim())))?;

    if count == 0 {
        return Err(Error::MalformedInput("node count must be at least 1".into()));
    }

    let mut labels = Vec::with_capacity(count);
    for i in 0..count {
        let line = read_line(reader)?.ok_or_else(|| {
            Error::MalformedInput(format!("expected {count} label lines, got {i}"))
        })?;
        labels.push(line.trim_end().to_string());
    }

    Ok(Header { labels })
}

/// Read weighted edge records until the `from == 0` sentinel or end of input.
///
/// Line boundaries carry no meaning in the edge section; records are read
/// three whitespace-separated fields at a time, as the format allows.
pub fn read_weighted_edges(reader: &mut impl BufRead) -> Result<Vec<EdgeTriple>> {
    let mut tokens = read_tokens(reader)?.into_iter();
    let mut edges = Vec::new();

    while let Some(from) = tokens.next() {
        let from = parse_node_field(&from)?;
        if from == 0 {
            break;
        }

        let to = parse_node_field(&next_field(&mut tokens, "edge target")?)?;
        let weight = parse_weight_field(&next_field(&mut tokens, "edge weight")?)?;
        edges.push(EdgeTriple { from, to, weight });
    }

    Ok(edges)
}

/// Read unweighted edge records until the `from == 0` sentinel or end of input.
pub fn read_pairs(reader: &mut impl BufRead) -> Result<Vec<(usize, usize)>> {
    let mut tokens = read_tokens(reader)?.into_iter();
    let mut edges = Vec::new();

    while let Some(from) = tokens.next() {
        let from = parse_node_field(&from)?;
        if from == 0 {
            break;
        }

        let to = parse_node_field(&next_field(&mut tokens, "edge target")?)?;
        edges.push((from, to));
    }

    Ok(edges)
}

fn read_line(reader: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    let n = reader.read_line(&mut line)?;
    if n == 0 {
        Ok(None)
    } else {
        Ok(Some(line))
    }
}

fn read_tokens(reader: &mut impl BufRead) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    while let Some(line) = read_line(reader)? {
        tokens.extend(line.split_whitespace().map(str::to_string));
    }
    Ok(tokens)
}

fn next_field(tokens: &mut impl Iterator<Item = String>, what: &str) -> Result<String> {
    tokens
        .next()
        .ok_or_else(|| Error::MalformedInput(format!("expected {what}, got end of input")))
}

fn parse_node_field(token: &str) -> Result<usize> {
    token
        .parse()
        .map_err(|_| Error::MalformedInput(format!("invalid node id '{token}'")))
}

fn parse_weight_field(token: &str) -> Result<u32> {
    token
        .parse()
        .map_err(|_| Error::MalformedInput(format!("invalid edge weight '{token}'")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_header() {
        let mut input = Cursor::new("3\nAurora\nBig Rock Candy\nCedar\n");
        let header = read_header(&mut input).unwrap();
        assert_eq!(header.node_count(), 3);
        assert_eq!(header.labels, vec!["Aurora", "Big Rock Candy", "Cedar"]);
    }

    #[test]
    fn test_read_header_rejects_bad_count() {
        let mut input = Cursor::new("three\nAurora\n");
        assert!(matches!(
            read_header(&mut input),
            Err(Error::MalformedInput(_))
        ));

        let mut input = Cursor::new("0\n");
        assert!(matches!(
            read_header(&mut input),
            Err(Error::MalformedInput(_))
        ));
    }

    #[test]
    fn test_read_header_rejects_missing_labels() {
        let mut input = Cursor::new("3\nAurora\n");
        assert!(matches!(
            read_header(&mut input),
            Err(Error::MalformedInput(_))
        ));
    }

    #[test]
    fn test_read_weighted_edges_stops_at_sentinel() {
        let mut input = Cursor::new("1 2 5\n2 3 3\n0 0 0\n9 9 9\n");
        let edges = read_weighted_edges(&mut input).unwrap();
        assert_eq!(
            edges,
            vec![
                EdgeTriple { from: 1, to: 2, weight: 5 },
                EdgeTriple { from: 2, to: 3, weight: 3 },
            ]
        );
    }

    #[test]
    fn test_read_weighted_edges_accepts_eof_terminator() {
        // End of input terminates the edge list just like the sentinel.
        let mut input = Cursor::new("1 2 5");
        let edges = read_weighted_edges(&mut input).unwrap();
        assert_eq!(edges.len(), 1);
    }

    #[test]
    fn test_read_weighted_edges_ignores_line_boundaries() {
        let mut input = Cursor::new("1 2\n5 2 3 3\n0");
        let edges = read_weighted_edges(&mut input).unwrap();
        assert_eq!(edges.len(), 2);
        assert_eq!(edges[1], EdgeTriple { from: 2, to: 3, weight: 3 });
    }

    #[test]
    fn test_read_weighted_edges_rejects_truncated_record() {
        let mut input = Cursor::new("1 2\n");
        assert!(matches!(
            read_weighted_edges(&mut input),
            Err(Error::MalformedInput(_))
        ));
    }

    #[test]
    fn test_read_weighted_edges_rejects_negative_weight() {
        let mut input = Cursor::new("1 2 -5\n0 0 0\n");
        assert!(matches!(
            read_weighted_edges(&mut input),
            Err(Error::MalformedInput(_))
        ));
    }

    #[test]
    fn test_read_pairs() {
        let mut input = Cursor::new("1 2\n1 3\n3 2\n0 0\n");
        let edges = read_pairs(&mut input).unwrap();
        assert_eq!(edges, vec![(1, 2), (1, 3), (3, 2)]);
    }
}
