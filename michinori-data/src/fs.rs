//! Filesystem helpers built on `cap-std` and `camino`.

use std::io::{self, Read};

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};

/// Open a UTF-8 file path using ambient authority.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Read a file into a string, stripping a leading UTF-8 byte-order mark.
///
/// The master tables are exported by spreadsheet tooling that writes a BOM
/// (`utf-8-sig`); the first header name would otherwise fail to match.
pub fn read_table_text(path: &Utf8Path) -> io::Result<String> {
    let mut file = open_utf8_file(path)?;
    let mut text = String::new();
    file.read_to_string(&mut text)?;
    Ok(match text.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_owned(),
        None => text,
    })
}

/// Read a file verbatim as bytes.
///
/// Used when serving a table for download, where the original bytes
/// (including any BOM) should pass through untouched.
pub fn read_file_bytes(path: &Utf8Path) -> io::Result<Vec<u8>> {
    let mut file = open_utf8_file(path)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use rstest::rstest;
    use std::io::Write;

    fn write_temp(content: &[u8]) -> (tempfile::TempDir, Utf8PathBuf) {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = Utf8PathBuf::from_path_buf(dir.path().join("table.csv"))
            .expect("temp path should be UTF-8");
        let mut file = std::fs::File::create(&path).expect("create temp file");
        file.write_all(content).expect("write temp file");
        (dir, path)
    }

    #[rstest]
    fn strips_a_leading_bom() {
        let (_dir, path) = write_temp("\u{feff}id,lat\n".as_bytes());
        let text = read_table_text(&path).expect("readable file");
        assert_eq!(text, "id,lat\n");
    }

    #[rstest]
    fn leaves_bom_free_content_untouched() {
        let (_dir, path) = write_temp(b"id,lat\n");
        let text = read_table_text(&path).expect("readable file");
        assert_eq!(text, "id,lat\n");
    }

    #[rstest]
    fn byte_reads_preserve_the_bom() {
        let (_dir, path) = write_temp("\u{feff}id\n".as_bytes());
        let bytes = read_file_bytes(&path).expect("readable file");
        assert!(bytes.starts_with("\u{feff}".as_bytes()));
    }

    #[rstest]
    fn missing_file_is_an_io_error() {
        let err = read_table_text(Utf8Path::new("/nonexistent/table.csv"))
            .expect_err("missing file must fail");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
