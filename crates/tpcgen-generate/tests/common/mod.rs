#![cfg(unix)]
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// Flag parsing shared by every stub generator. Resolves `$OUT` to the
/// file name dsdgen would produce for the invocation mode.
const PARSE_ARGS: &str = r#"
TABLE=""; DIR=""; CHILD=""; PARALLEL=""
while [ "$#" -gt 0 ]; do
  case "$1" in
    -TABLE) TABLE="$2"; shift 2 ;;
    -DIR) DIR="$2"; shift 2 ;;
    -CHILD) CHILD="$2"; shift 2 ;;
    -PARALLEL) PARALLEL="$2"; shift 2 ;;
    *) shift ;;
  esac
done
if [ -n "$PARALLEL" ]; then
  OUT="$DIR/${TABLE}_${CHILD}_${PARALLEL}.dat"
else
  OUT="$DIR/${TABLE}.dat"
fi
"#;

/// Write an executable stand-in for the dsdgen binary.
pub fn write_stub_generator(dir: &Path, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("dsdgen-stub.sh");
    fs::write(&path, format!("#!/bin/sh\n{PARSE_ARGS}\n{body}\n")).expect("write stub");
    let mut permissions = fs::metadata(&path).expect("stat stub").permissions();
    permissions.set_mode(0o755);
    fs::set_permissions(&path, permissions).expect("chmod stub");
    path
}

/// Empty stand-in for the tpcds.idx distributions file.
pub fn write_stub_distributions(dir: &Path) -> PathBuf {
    let path = dir.join("tpcds.idx");
    fs::write(&path, b"").expect("write distributions");
    path
}
