//! Config reader (C1): one line per world rank in the shared configuration
//! file, `color work_dir env_assignments`.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::SplitError;

/// The per-process record this component produces: a color, a working
/// directory, and a (possibly empty) sequence of environment assignments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankConfig {
    /// Opaque nonnegative partition key. All ranks sharing a color end up
    /// in the same split communicator.
    pub color: i32,
    /// Working directory this rank should `chdir` into.
    pub work_dir: String,
    /// `(name, value)` pairs to apply to the process environment.
    pub env_assignments: Vec<(String, String)>,
}

/// Read and parse the `rank`'th line (zero-based) of `path`.
pub fn read_rank_config(path: &str, rank: usize) -> Result<RankConfig, SplitError> {
    let file = File::open(path).map_err(|source| SplitError::ConfigMissing {
        path: path.to_owned(),
        source,
    })?;
    let reader = BufReader::new(file);
    parse_rank_config(reader, path, rank)
}

/// Pure parsing over any `BufRead`, so this is testable against an
/// in-memory cursor without touching the filesystem.
pub fn parse_rank_config(
    mut reader: impl BufRead,
    path: &str,
    rank: usize,
) -> Result<RankConfig, SplitError> {
    let mut line = String::new();
    for line_num in 0..=rank {
        line.clear();
        let bytes_read = reader.read_line(&mut line).map_err(|source| SplitError::ConfigMissing {
            path: path.to_owned(),
            source,
        })?;
        if bytes_read == 0 {
            return Err(SplitError::ConfigTruncated {
                path: path.to_owned(),
                rank,
            });
        }
        let _ = line_num;
    }

    parse_line(line.trim_end_matches(['\n', '\r']), rank)
}

fn parse_line(line: &str, rank: usize) -> Result<RankConfig, SplitError> {
    let mut fields = line.split_whitespace();

    let color_token = fields.next().ok_or_else(|| SplitError::ConfigMalformed {
        rank,
        reason: "line is empty, expected at least a color".to_owned(),
    })?;
    let color: i32 = color_token.parse().map_err(|_| SplitError::ConfigMalformed {
        rank,
        reason: format!("color {color_token:?} is not an integer"),
    })?;

    // The original's `sscanf(line, "%d %s %s", ...)` only requires a color;
    // a line with no working directory field leaves it empty rather than
    // failing the parse.
    let work_dir = fields.next().unwrap_or("").to_owned();

    // Whatever's left on the line (if anything) is the env-assignment
    // string; unlike color/work_dir it is whitespace-free by construction
    // (the grammar separates assignments with `;`, never spaces), so a
    // single remaining token is all we expect — but accept a fully empty
    // remainder too, since env assignments are optional.
    let env_vars = fields.next().unwrap_or("");
    let env_assignments = parse_env_assignments(env_vars, rank)?;

    Ok(RankConfig {
        color,
        work_dir,
        env_assignments,
    })
}

fn parse_env_assignments(env_vars: &str, rank: usize) -> Result<Vec<(String, String)>, SplitError> {
    if env_vars.is_empty() {
        return Ok(Vec::new());
    }

    env_vars
        .split(';')
        .map(|assignment| {
            assignment
                .split_once('=')
                .map(|(key, value)| (key.to_owned(), value.to_owned()))
                .ok_or_else(|| SplitError::ConfigMalformed {
                    rank,
                    reason: format!("env assignment {assignment:?} has no '='"),
                })
        })
        .collect()
}

/// Convenience used by `Path`-based callers / tests.
pub fn read_rank_config_at(path: impl AsRef<Path>, rank: usize) -> Result<RankConfig, SplitError> {
    read_rank_config(&path.as_ref().to_string_lossy(), rank)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parses_color_dir_and_env() {
        let file = "0 /tmp FOO=bar;BAZ=qux\n1 /tmp/b\n";
        let cfg = parse_rank_config(Cursor::new(file), "test", 0).unwrap();
        assert_eq!(cfg.color, 0);
        assert_eq!(cfg.work_dir, "/tmp");
        assert_eq!(
            cfg.env_assignments,
            vec![
                ("FOO".to_owned(), "bar".to_owned()),
                ("BAZ".to_owned(), "qux".to_owned())
            ]
        );
    }

    #[test]
    fn env_assignments_are_optional() {
        let file = "1 /tmp/b\n";
        let cfg = parse_rank_config(Cursor::new(file), "test", 0).unwrap();
        assert_eq!(cfg.color, 1);
        assert_eq!(cfg.work_dir, "/tmp/b");
        assert!(cfg.env_assignments.is_empty());
    }

    #[test]
    fn picks_out_the_right_rank_line() {
        let file = "0 /tmp/a\n0 /tmp/a\n1 /tmp/b\n1 /tmp/b\n";
        let cfg = parse_rank_config(Cursor::new(file), "test", 2).unwrap();
        assert_eq!(cfg.color, 1);
        assert_eq!(cfg.work_dir, "/tmp/b");
    }

    #[test]
    fn missing_rank_line_is_truncated_error() {
        let file = "0 /tmp\n";
        let err = parse_rank_config(Cursor::new(file), "test", 3).unwrap_err();
        assert!(matches!(err, SplitError::ConfigTruncated { rank: 3, .. }));
    }

    #[test]
    fn work_dir_is_optional() {
        let file = "2\n";
        let cfg = parse_rank_config(Cursor::new(file), "test", 0).unwrap();
        assert_eq!(cfg.color, 2);
        assert_eq!(cfg.work_dir, "");
        assert!(cfg.env_assignments.is_empty());
    }

    #[test]
    fn non_integer_color_is_malformed() {
        let file = "not-a-color /tmp\n";
        let err = parse_rank_config(Cursor::new(file), "test", 0).unwrap_err();
        assert!(matches!(err, SplitError::ConfigMalformed { rank: 0, .. }));
    }

    #[test]
    fn env_assignment_without_equals_is_malformed() {
        let file = "0 /tmp FOO\n";
        let err = parse_rank_config(Cursor::new(file), "test", 0).unwrap_err();
        assert!(matches!(err, SplitError::ConfigMalformed { rank: 0, .. }));
    }

    #[test]
    fn missing_file_is_config_missing() {
        let err = read_rank_config("/nonexistent/path/to/a/file", 0).unwrap_err();
        assert!(matches!(err, SplitError::ConfigMissing { .. }));
    }
}
