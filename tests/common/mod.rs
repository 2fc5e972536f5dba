//! Shared fixtures for integration tests.
//!
//! Builds picture trees in temp dirs and stands in for `identify` and
//! `jpegtran` with small shell scripts.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

/// Write `size` zero bytes to `root/rel`, creating parent dirs.
pub fn write_file(root: &Path, rel: &str, size: usize) -> PathBuf {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, vec![0u8; size]).unwrap();
    path
}

/// Set the modification time of `path` to `age` ago.
pub fn set_age(path: &Path, age: Duration) {
    let file = fs::File::options().write(true).open(path).unwrap();
    file.set_modified(SystemTime::now() - age).unwrap();
}

pub fn mtime(path: &Path) -> SystemTime {
    fs::metadata(path).unwrap().modified().unwrap()
}

/// The `/p` tree: a.jpg (50000), b.png (30000), sub/c.jpg (20000).
pub fn scenario_tree(root: &Path) {
    write_file(root, "a.jpg", 50_000);
    write_file(root, "b.png", 30_000);
    write_file(root, "sub/c.jpg", 20_000);
}

#[cfg(unix)]
pub fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{}", body)).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// jpegtran stand-in that writes a 5-byte file to its `-outfile` argument.
#[cfg(unix)]
pub fn fake_jpegtran(dir: &Path) -> PathBuf {
    write_script(
        dir,
        "jpegtran",
        r#"out=""
prev=""
for a in "$@"; do
  if [ "$prev" = "-outfile" ]; then out="$a"; fi
  prev="$a"
done
printf 'small' > "$out"
"#,
    )
}

/// jpegtran stand-in that fails on files named `bad*` and shrinks the rest.
#[cfg(unix)]
pub fn picky_jpegtran(dir: &Path) -> PathBuf {
    write_script(
        dir,
        "jpegtran",
        r#"out=""
prev=""
last=""
for a in "$@"; do
  if [ "$prev" = "-outfile" ]; then out="$a"; fi
  prev="$a"
  last="$a"
done
case "$(basename "$last")" in
  bad*) echo "Not a JPEG file: starts with 0x00 0x00" >&2; exit 2 ;;
esac
printf 'small' > "$out"
"#,
    )
}

/// jpegtran stand-in whose output is always 2000 bytes, so nothing shrinks.
#[cfg(unix)]
pub fn bloating_jpegtran(dir: &Path) -> PathBuf {
    write_script(
        dir,
        "jpegtran",
        r#"out=""
prev=""
for a in "$@"; do
  if [ "$prev" = "-outfile" ]; then out="$a"; fi
  prev="$a"
done
printf '%2000s' '' > "$out"
"#,
    )
}

#[cfg(unix)]
pub fn fake_identify(dir: &Path) -> PathBuf {
    write_script(dir, "identify", "printf 'JPEG|640|480\\n'\n")
}

/// Config file pointing both tools at the given scripts.
pub fn tools_config(dir: &Path, identify: &Path, jpegtran: &Path) -> PathBuf {
    let path = dir.join("smally.toml");
    fs::write(
        &path,
        format!(
            "[tools]\nidentify = {:?}\njpegtran = {:?}\n",
            identify.to_string_lossy(),
            jpegtran.to_string_lossy()
        ),
    )
    .unwrap();
    path
}
