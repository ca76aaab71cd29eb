//! CLI-specific utilities for gridpath.
//!
//! This module contains code specific to the command-line interface,
//! separate from the core library functionality.

/// An `--insert` argument: `FROM,TO,WEIGHT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertSpec {
    pub from: usize,
    pub to: usize,
    pub weight: i64,
}

/// A `--remove` argument: `FROM,TO`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoveSpec {
    pub from: usize,
    pub to: usize,
}

/// Parse an `--insert` value of the form `FROM,TO,WEIGHT`.
pub fn parse_insert_spec(s: &str) -> Result<InsertSpec, String> {
    let fields = split_fields(s, 3)?;
    Ok(InsertSpec {
        from: parse_id(fields[0])?,
        to: parse_id(fields[1])?,
        weight: fields[2]
            .parse()
            .map_err(|_| format!("invalid weight '{}'", fields[2]))?,
    })
}

/// Parse a `--remove` value of the form `FROM,TO`.
pub fn parse_remove_spec(s: &str) -> Result<RemoveSpec, String> {
    let fields = split_fields(s, 2)?;
    Ok(RemoveSpec {
        from: parse_id(fields[0])?,
        to: parse_id(fields[1])?,
    })
}

fn split_fields(s: &str, expected: usize) -> Result<Vec<&str>, String> {
    let fields: Vec<&str> = s.split(',').map(str::trim).collect();
    if fields.len() != expected {
        return Err(format!(
            "expected {expected} comma-separated fields, got {} in '{s}'",
            fields.len()
        ));
    }
    Ok(fields)
}

fn parse_id(field: &str) -> Result<usize, String> {
    field
        .parse()
        .map_err(|_| format!("invalid node id '{field}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_insert_spec() {
        assert_eq!(
            parse_insert_spec("1,3,2").unwrap(),
            InsertSpec { from: 1, to: 3, weight: 2 }
        );
        // Negative weights parse here; the engine rejects them with a
        // proper error instead of the CLI mangling the message.
        assert_eq!(parse_insert_spec("1, 3, -2").unwrap().weight, -2);
    }

    #[test]
    fn test_parse_insert_spec_rejects_bad_shapes() {
        assert!(parse_insert_spec("1,3").is_err());
        assert!(parse_insert_spec("1,3,2,4").is_err());
        assert!(parse_insert_spec("a,3,2").is_err());
    }

    #[test]
    fn test_parse_remove_spec() {
        assert_eq!(
            parse_remove_spec("2,3").unwrap(),
            RemoveSpec { from: 2, to: 3 }
        );
        assert!(parse_remove_spec("2").is_err());
        assert!(parse_remove_spec("2,x").is_err());
    }
}
