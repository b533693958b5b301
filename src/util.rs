//! Small string and path helpers shared by the model, the module resolver
//! and the writer. Pure functions, no state.

use std::path::{Component, Path, PathBuf};

/// Parse a comma/whitespace-delimited attribute value into an ordered list.
///
/// Commas count as separators, runs of separators collapse, items come
/// back trimmed. An empty value gives an empty list.
pub fn value_list(value: &str) -> Vec<String> {
    value
        .replace(',', " ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Split a newline-delimited attribute value (headerPath, extraDefs,
/// externalLibraries, …) into its lines.
pub fn newline_list(value: &str) -> Vec<String> {
    value.lines().map(str::to_string).collect()
}

/// Resolve `.` and `..` segments without touching the filesystem.
///
/// A `..` that would climb past the start of the path is dropped.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for comp in path.components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn value_list_collapses_separators() {
        let test_cases = vec![
            ("", vec![]),
            ("curl rt dl pthread", vec!["curl", "rt", "dl", "pthread"]),
            ("juce_core,juce_events", vec!["juce_core", "juce_events"]),
            (
                "juce_core    juce_events juce_graphics ",
                vec!["juce_core", "juce_events", "juce_graphics"],
            ),
            ("  a , ,b  ,c ", vec!["a", "b", "c"]),
        ];

        for (src, expected) in test_cases {
            assert_eq!(value_list(src), expected, "input: [{src}]");
        }
    }

    #[test]
    fn newline_list_keeps_order() {
        assert_eq!(newline_list("a\nb\nc"), vec!["a", "b", "c"]);
        assert_eq!(newline_list(""), Vec::<String>::new());
    }

    #[test]
    fn normalize_path_resolves_dots() {
        let test_cases = vec![
            ("a/b/../c", "a/c"),
            ("./a/./b", "a/b"),
            ("/juce/modules/../modules/juce_core.h", "/juce/modules/juce_core.h"),
            ("a/../../b", "b"),
        ];

        for (src, expected) in test_cases {
            assert_eq!(normalize_path(Path::new(src)), PathBuf::from(expected));
        }
    }
}
