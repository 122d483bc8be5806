//! Subcommands of the inspector

use std::io::{Read, Write};
use std::path::Path;

use anyhow::Context;
use contracts::query::{Field, FieldType, QueryResult};
use serde::Serialize;

/// Read a saved query response from `input` or stdin
pub fn read_result(input: Option<&Path>) -> anyhow::Result<QueryResult> {
    let raw = match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            buf
        }
    };

    let result: QueryResult =
        serde_json::from_str(&raw).context("decoding query result")?;
    tracing::debug!(
        tables = result.tables.len(),
        elapsed_us = result.status.elapsed_time,
        "decoded query result"
    );
    Ok(result)
}

#[derive(Serialize)]
struct TableFields<'a> {
    table: &'a str,
    fields: &'a [Field],
}

/// One line per field: `<table>.<field>\t<type>[\t<op>]`
pub fn describe_fields(result: &QueryResult) -> Vec<String> {
    let mut lines = Vec::new();
    for table in &result.tables {
        for field in &table.fields {
            let mut line = format!("{}.{}\t{}", table.name, field.name, field.field_type);
            if let Some(agg) = &field.aggregation {
                line.push('\t');
                line.push_str(agg.op.as_str());
            }
            lines.push(line);
        }
    }
    lines
}

pub fn run_fields(result: &QueryResult, json: bool, out: &mut impl Write) -> anyhow::Result<()> {
    if json {
        let tables: Vec<TableFields> = result
            .tables
            .iter()
            .map(|t| TableFields {
                table: &t.name,
                fields: &t.fields,
            })
            .collect();
        let encoded = serde_json::to_string_pretty(&tables).context("encoding fields")?;
        writeln!(out, "{}", encoded)?;
        return Ok(());
    }

    for line in describe_fields(result) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// Parse each type string and print `<input>\t<canonical>\t<bits>`.
/// Stops at the first string that does not parse.
pub fn run_parse(types: &[String], out: &mut impl Write) -> anyhow::Result<()> {
    for input in types {
        let ft: FieldType = input
            .parse()
            .with_context(|| format!("parsing {:?}", input))?;
        if ft.is_composite() {
            tracing::info!(input = %input, primitives = ft.primitives().count(), "composite field type");
        }
        writeln!(out, "{}\t{}\t{}", input, ft, ft.bits())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "tables": [{
            "name": "0",
            "fields": [
                { "name": "method", "type": "String" },
                { "name": "status", "type": "long|integer" },
                { "name": "count_", "type": "long", "agg": { "op": "count", "fields": ["*"] } }
            ],
            "columns": [["GET"], [200], [4]]
        }],
        "status": { "elapsedTime": 12 }
    }"#;

    fn sample_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_read_and_describe() {
        let file = sample_file();
        let result = read_result(Some(file.path())).unwrap();
        assert_eq!(
            describe_fields(&result),
            vec![
                "0.method\tstring".to_string(),
                "0.status\tint|long".to_string(),
                "0.count_\tlong\tcount".to_string(),
            ]
        );
    }

    #[test]
    fn test_run_fields_json() {
        let result: QueryResult = serde_json::from_str(SAMPLE).unwrap();
        let mut out = Vec::new();
        run_fields(&result, true, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[0]["table"], "0");
        assert_eq!(value[0]["fields"][1]["type"], "int|long");
        assert_eq!(value[0]["fields"][2]["agg"]["op"], "count");
    }

    #[test]
    fn test_read_rejects_bad_type() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"tables":[{"name":"0","fields":[{"name":"a","type":"int|blob"}]}]}"#)
            .unwrap();
        let err = read_result(Some(file.path())).unwrap_err();
        assert!(format!("{:#}", err).contains("unknown field type: blob"));
    }

    #[test]
    fn test_run_parse() {
        let mut out = Vec::new();
        run_parse(&["Float64".to_string(), "long|int".to_string()], &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Float64\treal\t16\nlong|int\tint|long\t12\n");
    }

    #[test]
    fn test_run_parse_stops_on_unknown() {
        let mut out = Vec::new();
        let err = run_parse(&["bool".to_string(), "foo".to_string(), "int".to_string()], &mut out)
            .unwrap_err();
        assert!(format!("{:#}", err).contains("unknown field type: foo"));
        assert_eq!(String::from_utf8(out).unwrap(), "bool\tbool\t1\n");
    }
}
