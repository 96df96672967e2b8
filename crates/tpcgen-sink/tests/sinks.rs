use std::fs;
use std::fs::File;

use arrow::array::Array;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use tempfile::tempdir;
use tpcgen_catalog::TableSpec;
use tpcgen_sink::{build_sink, Row, SinkError, SinkFormat, WriteMode};

fn sample_rows() -> Vec<Row> {
    vec![
        vec!["1".to_string(), "AAAA".to_string(), "".to_string()],
        vec!["2".to_string(), "BBBB".to_string(), "9.50".to_string()],
    ]
}

#[test]
fn delimited_sink_writes_headerless_rows() {
    let dir = tempdir().expect("tempdir");
    let table = TableSpec::new("reason", 3, false);
    let sink = build_sink(SinkFormat::Csv, dir.path(), '|', WriteMode::Overwrite).expect("sink");

    let bytes = sink.write_table(&table, &sample_rows()).expect("write");
    assert!(bytes > 0);

    let content = fs::read_to_string(dir.path().join("reason/part-0.csv")).expect("read part");
    assert_eq!(content, "1|AAAA|\n2|BBBB|9.50\n");
}

#[test]
fn overwrite_replaces_previous_content() {
    let dir = tempdir().expect("tempdir");
    let table = TableSpec::new("reason", 3, false);
    let sink = build_sink(SinkFormat::Csv, dir.path(), '|', WriteMode::Overwrite).expect("sink");

    sink.write_table(&table, &sample_rows()).expect("first write");
    let single = vec![vec!["9".to_string(), "ZZZZ".to_string(), "1".to_string()]];
    sink.write_table(&table, &single).expect("second write");

    let content = fs::read_to_string(dir.path().join("reason/part-0.csv")).expect("read part");
    assert_eq!(content, "9|ZZZZ|1\n");
}

#[test]
fn error_if_exists_refuses_existing_destination() {
    let dir = tempdir().expect("tempdir");
    let table = TableSpec::new("reason", 3, false);
    fs::create_dir_all(dir.path().join("reason")).expect("pre-create");

    let sink =
        build_sink(SinkFormat::Csv, dir.path(), '|', WriteMode::ErrorIfExists).expect("sink");
    let err = sink.write_table(&table, &sample_rows()).unwrap_err();
    assert!(matches!(err, SinkError::DestinationExists(_)));
}

#[test]
fn append_adds_a_second_part() {
    let dir = tempdir().expect("tempdir");
    let table = TableSpec::new("reason", 3, false);
    let sink = build_sink(SinkFormat::Csv, dir.path(), '|', WriteMode::Append).expect("sink");

    sink.write_table(&table, &sample_rows()).expect("first write");
    sink.write_table(&table, &sample_rows()).expect("second write");

    let parts = fs::read_dir(dir.path().join("reason")).expect("list").count();
    assert_eq!(parts, 2);
}

#[test]
fn parquet_sink_writes_declared_schema() {
    let dir = tempdir().expect("tempdir");
    let table = TableSpec::new("reason", 3, false);
    let sink =
        build_sink(SinkFormat::Parquet, dir.path(), '|', WriteMode::Overwrite).expect("sink");

    sink.write_table(&table, &sample_rows()).expect("write");

    let file = File::open(dir.path().join("reason/part-0.parquet")).expect("open part");
    let reader = ParquetRecordBatchReaderBuilder::try_new(file)
        .expect("reader")
        .build()
        .expect("build reader");

    let batches: Vec<_> = reader.collect::<Result<_, _>>().expect("read batches");
    let rows: usize = batches.iter().map(|batch| batch.num_rows()).sum();
    assert_eq!(rows, 2);
    assert_eq!(batches[0].num_columns(), 3);
    assert_eq!(batches[0].schema().field(0).name(), "_c0");
    // Empty generator fields round-trip as nulls.
    assert_eq!(batches[0].column(2).null_count(), 1);
}

#[test]
fn unknown_format_identifier_is_rejected() {
    let err = "avro".parse::<SinkFormat>().unwrap_err();
    assert!(matches!(err, SinkError::UnsupportedFormat(_)));
    assert_eq!("parquet".parse::<SinkFormat>().unwrap(), SinkFormat::Parquet);
    assert_eq!("csv".parse::<SinkFormat>().unwrap(), SinkFormat::Csv);
}

#[test]
fn iceberg_format_fails_at_configuration_time() {
    let dir = tempdir().expect("tempdir");
    let err = build_sink(SinkFormat::Iceberg, dir.path(), '|', WriteMode::Overwrite).unwrap_err();
    assert!(matches!(err, SinkError::UnsupportedFormat(_)));
}

#[test]
fn non_ascii_delimiter_is_rejected() {
    let dir = tempdir().expect("tempdir");
    let err = build_sink(SinkFormat::Csv, dir.path(), 'π', WriteMode::Overwrite).unwrap_err();
    assert!(matches!(err, SinkError::InvalidDelimiter('π')));
}
