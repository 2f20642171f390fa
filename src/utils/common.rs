//! Common utility functions

use std::path::{Path, PathBuf};
use crate::DB_EXTENSION;

/// Join items into lines of `per_line` entries separated by ", "
///
/// A `per_line` of zero is treated as one.
pub fn format_list_for_display<S: AsRef<str>>(items: &[S], per_line: usize) -> String {
    items
        .chunks(per_line.max(1))
        .map(|chunk| {
            chunk.iter()
                .map(AsRef::as_ref)
                .collect::<Vec<_>>()
                .join(", ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Append `.db` unless the file name already ends with it
///
/// The check is a plain suffix match on the final path component, so
/// `backup.DB` still gets the extension added.
pub fn with_db_extension(path: &Path) -> PathBuf {
    let suffix = format!(".{DB_EXTENSION}");
    let already = path
        .file_name()
        .map(|name| name.to_string_lossy().ends_with(&suffix))
        .unwrap_or(false);

    if already {
        path.to_path_buf()
    } else {
        let mut os = path.as_os_str().to_owned();
        os.push(&suffix);
        PathBuf::from(os)
    }
}

/// Strip one trailing line ending ("\n" or "\r\n")
pub fn trim_line_ending(line: &str) -> &str {
    line.strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line)
}
