//! Plain-text tile maps.
//!
//! ```text
//! # one row per line, codes separated by spaces and/or commas
//! 1 1 1 1
//! 1 0 0 1
//! 1 0 2 1
//! 1 1 1 1
//! ```

use std::{fs, io, path::Path};

use thiserror::Error;

use crate::world::{MapError, TileCode, TileMap};

#[derive(Error, Debug)]
pub enum MapFileError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: `{token}` is not a tile code")]
    BadToken { line: usize, token: String },

    #[error(transparent)]
    Shape(#[from] MapError),
}

/// Parse map text. Blank lines and `#` comments are ignored.
pub fn parse_map(text: &str) -> Result<TileMap, MapFileError> {
    let mut rows = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        let row = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
            .map(|t| {
                t.parse::<TileCode>().map_err(|_| MapFileError::BadToken {
                    line: idx + 1,
                    token: t.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        rows.push(row);
    }
    Ok(TileMap::new(rows)?)
}

/// Read and parse a map file.
pub fn load_map_file<P: AsRef<Path>>(path: P) -> Result<TileMap, MapFileError> {
    let text = fs::read_to_string(path)?;
    parse_map(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mixed_separators_and_comments() {
        let text = "# arena\n1,1,1,1\n1 0  0 1   # gap\n\n1, 0, 2, 1\n1 1 1 1\n";
        let map = parse_map(text).unwrap();
        assert_eq!((map.rows(), map.cols()), (4, 4));
        assert_eq!(map.cell_at(2, 2), 2);
        assert_eq!(map.cell_at(1, 1), 0);
    }

    #[test]
    fn reports_bad_token_with_line() {
        let err = parse_map("1 1 1\n1 x 1\n1 1 1").unwrap_err();
        match err {
            MapFileError::BadToken { line, token } => {
                assert_eq!(line, 2);
                assert_eq!(token, "x");
            }
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn shape_errors_pass_through() {
        let err = parse_map("1 1 1\n1 0 0\n1 1 1").unwrap_err();
        assert!(matches!(err, MapFileError::Shape(MapError::OpenBorder { row: 1, col: 2 })));
        assert!(matches!(parse_map("# nothing\n"), Err(MapFileError::Shape(MapError::Empty))));
    }

    #[test]
    fn loads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("room.map");
        fs::write(&path, "1 1 1\n1 0 1\n1 1 1\n").unwrap();
        let map = load_map_file(&path).unwrap();
        assert_eq!(map.max_code(), 1);
        assert!(matches!(
            load_map_file(dir.path().join("missing.map")),
            Err(MapFileError::Io(_))
        ));
    }
}
