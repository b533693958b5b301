//! JUCE module metadata resolver.
//!
//! A module is declared by a header named after the module itself
//! (`juce_core.h`) somewhere below a search root. The header carries a
//! delimited block of `key: value` lines:
//!
//! ```text
//! BEGIN_JUCE_MODULE_DECLARATION
//!   ID:            juce_core
//!   dependencies:  juce_events
//! END_JUCE_MODULE_DECLARATION
//! ```
//!
//! A value may continue on following lines that carry no `key:` prefix;
//! continuations are glued onto the most recently seen key.

pub mod tables;

use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::util;

const BEGIN_MARKER: &str = "BEGIN_JUCE_MODULE_DECLARATION";
const END_MARKER: &str = "END_JUCE_MODULE_DECLARATION";

const META_ID: &str = "ID";
const META_VENDOR: &str = "vendor";
const META_VERSION: &str = "version";
const META_NAME: &str = "name";
const META_DESCRIPTION: &str = "description";
const META_WEBSITE: &str = "website";
const META_LICENSE: &str = "license";
const META_DEPENDENCIES: &str = "dependencies";
const META_OSX_FRAMEWORKS: &str = "OSXFrameworks";
const META_IOS_FRAMEWORKS: &str = "iOSFrameworks";
const META_LINUX_LIBS: &str = "linuxLibs";
const META_LINUX_PACKAGES: &str = "linuxPackages";
const META_MINGW_LIBS: &str = "mingwLibs";
const META_MINIMUM_CPP: &str = "minimumCppStandard";

/// Where the line reader currently is relative to the declaration block.
enum ParseState {
    Searching,
    Capturing,
    Done,
}

/// Metadata of one module, keyed by the declaration block's key names.
///
/// A module that was never found on disk has no header path and empty
/// metadata; every accessor then returns `""`.
#[derive(Debug, Default)]
pub struct Module {
    header: Option<PathBuf>,
    metadata: HashMap<String, String>,
}

impl Module {
    /// Search `root` for a file named `<name>.h` and parse its declaration
    /// block.
    ///
    /// A module that cannot be found anywhere below `root` resolves to
    /// empty metadata; that is the normal "module not on disk, fall back
    /// to fetching the source" case. A header that is found but cannot be
    /// read is a hard error.
    pub fn resolve(root: &Path, name: &str) -> Result<Module> {
        let target = format!("{name}.h");
        let Some(header) = find_file(root, &target) else {
            return Ok(Module::default());
        };

        let header = util::normalize_path(&header);
        let metadata = parse_declaration(&header)?;
        Ok(Module {
            header: Some(header),
            metadata,
        })
    }

    /// Whether a declaration header was located on disk.
    pub fn is_resolved(&self) -> bool {
        self.header.is_some()
    }

    pub fn header(&self) -> Option<&Path> {
        self.header.as_deref()
    }

    fn get(&self, key: &str) -> &str {
        self.metadata.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn id(&self) -> &str {
        self.get(META_ID)
    }

    pub fn vendor(&self) -> &str {
        self.get(META_VENDOR)
    }

    pub fn version(&self) -> &str {
        self.get(META_VERSION)
    }

    pub fn name(&self) -> &str {
        self.get(META_NAME)
    }

    pub fn description(&self) -> &str {
        self.get(META_DESCRIPTION)
    }

    pub fn website(&self) -> &str {
        self.get(META_WEBSITE)
    }

    pub fn license(&self) -> &str {
        self.get(META_LICENSE)
    }

    /// Raw dependency list; split it with [`util::value_list`].
    pub fn dependencies(&self) -> &str {
        self.get(META_DEPENDENCIES)
    }

    pub fn osx_frameworks(&self) -> &str {
        self.get(META_OSX_FRAMEWORKS)
    }

    pub fn ios_frameworks(&self) -> &str {
        self.get(META_IOS_FRAMEWORKS)
    }

    pub fn linux_libs(&self) -> &str {
        self.get(META_LINUX_LIBS)
    }

    pub fn linux_packages(&self) -> &str {
        self.get(META_LINUX_PACKAGES)
    }

    pub fn mingw_libs(&self) -> &str {
        self.get(META_MINGW_LIBS)
    }

    pub fn minimum_cpp_standard(&self) -> &str {
        self.get(META_MINIMUM_CPP)
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "** Module **")?;
        writeln!(f, "ID : {}", self.id())?;
        writeln!(f, "Vendor : {}", self.vendor())?;
        writeln!(f, "Version : {}", self.version())?;
        writeln!(f, "Name : {}", self.name())?;
        writeln!(f, "Description : {}", self.description())?;
        writeln!(f, "Website : {}", self.website())?;
        writeln!(f, "License : {}", self.license())?;

        for item in util::value_list(self.dependencies()) {
            writeln!(f, "<< dep >> {item}")?;
        }
        for item in util::value_list(self.osx_frameworks()) {
            writeln!(f, "<< OSXFramework >> {item}")?;
        }
        for item in util::value_list(self.ios_frameworks()) {
            writeln!(f, "<< iOSFrameworks >> {item}")?;
        }
        for item in util::value_list(self.linux_libs()) {
            writeln!(f, "<< linuxLibs >> {item}")?;
        }
        for item in util::value_list(self.linux_packages()) {
            writeln!(f, "<< linuxPackages >> {item}")?;
        }
        for item in util::value_list(self.mingw_libs()) {
            writeln!(f, "<< mingwLibs >> {item}")?;
        }
        writeln!(f)
    }
}

/// Depth-first search below `root` for a file literally named `target`.
///
/// Directory entries come back in whatever order the OS hands them out;
/// the first match in traversal order wins and the search stops there.
/// An explicit stack keeps deep trees from recursing.
fn find_file(root: &Path, target: &str) -> Option<PathBuf> {
    let mut stack = vec![root.to_path_buf()];

    while let Some(dir) = stack.pop() {
        let Ok(entries) = std::fs::read_dir(&dir) else {
            continue;
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                stack.push(path);
            } else if entry.file_name().to_string_lossy() == target {
                return Some(path);
            }
        }
    }

    None
}

/// Read `header` through the two-state line machine and post-process the
/// captured block into a key/value map.
fn parse_declaration(header: &Path) -> Result<HashMap<String, String>> {
    let file = File::open(header)
        .with_context(|| format!("Error opening file: {}", header.display()))?;

    let mut captured = String::new();
    let mut state = ParseState::Searching;

    for line in BufReader::new(file).lines() {
        let line =
            line.with_context(|| format!("Error reading file: {}", header.display()))?;

        match state {
            ParseState::Searching => {
                if line.contains(BEGIN_MARKER) {
                    state = ParseState::Capturing;
                }
            }
            ParseState::Capturing => {
                if line.contains(END_MARKER) {
                    state = ParseState::Done;
                } else {
                    captured.push_str(&line);
                    captured.push_str(" \n");
                }
            }
            ParseState::Done => {}
        }

        if matches!(state, ParseState::Done) {
            break;
        }
    }

    Ok(parse_block(&captured))
}

/// Split the captured block into `key -> value` pairs.
///
/// A line with a colon assigns (first colon splits, both sides trimmed,
/// later assignments overwrite). A colon-free line longer than two chars
/// is a continuation: commas become spaces and the line is appended to
/// the most recently assigned key.
fn parse_block(captured: &str) -> HashMap<String, String> {
    let mut metadata = HashMap::new();
    let mut last_key: Option<String> = None;

    for line in captured.lines() {
        if let Some((key, value)) = line.split_once(':') {
            let key = key.trim().to_string();
            metadata.insert(key.clone(), value.trim().to_string());
            last_key = Some(key);
        } else if line.len() > 2 {
            let continuation = line.replace(',', " ");
            match &last_key {
                Some(key) => {
                    let entry: &mut String = metadata.entry(key.clone()).or_default();
                    entry.push(' ');
                    entry.push_str(&continuation);
                }
                None => {
                    // A block must not open with a continuation line.
                    println!(
                        "Ignoring continuation line before any key: [{}]",
                        line.trim()
                    );
                }
            }
        }
    }

    metadata
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util;
    use std::io::Write;

    fn capture(lines: &[&str]) -> String {
        let mut s = String::new();
        for line in lines {
            s.push_str(line);
            s.push_str(" \n");
        }
        s
    }

    #[test]
    fn block_splits_on_first_colon() {
        let block = capture(&[
            "ID:            juce_core",
            "vendor:        juce",
            "website:       http://www.juce.com/juce",
        ]);
        let meta = parse_block(&block);

        assert_eq!(meta["ID"], "juce_core");
        assert_eq!(meta["vendor"], "juce");
        // only the first colon splits, the URL keeps its own
        assert_eq!(meta["website"], "http://www.juce.com/juce");
    }

    #[test]
    fn continuation_lines_glue_onto_last_key() {
        let block = capture(&["dependencies: juce_core", "   juce_events,juce_graphics"]);
        let meta = parse_block(&block);

        let deps = util::value_list(&meta["dependencies"]);
        assert_eq!(deps, vec!["juce_core", "juce_events", "juce_graphics"]);
    }

    #[test]
    fn continuation_before_any_key_is_dropped() {
        let block = capture(&["   stray continuation", "ID: juce_core"]);
        let meta = parse_block(&block);

        assert_eq!(meta.len(), 1);
        assert_eq!(meta["ID"], "juce_core");
    }

    #[test]
    fn later_assignment_overwrites() {
        let block = capture(&["name: First", "name: Second"]);
        let meta = parse_block(&block);

        assert_eq!(meta["name"], "Second");
    }

    #[test]
    fn declaration_machine_captures_between_markers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("juce_osc.h");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "/*").unwrap();
        writeln!(f, " BEGIN_JUCE_MODULE_DECLARATION").unwrap();
        writeln!(f, "  ID:           juce_osc").unwrap();
        writeln!(f, "  dependencies: juce_core juce_events").unwrap();
        writeln!(f, " END_JUCE_MODULE_DECLARATION").unwrap();
        writeln!(f, "*/").unwrap();
        writeln!(f, "ID: not_metadata").unwrap();
        drop(f);

        let meta = parse_declaration(&path).unwrap();
        assert_eq!(meta["ID"], "juce_osc");
        assert_eq!(
            util::value_list(&meta["dependencies"]),
            vec!["juce_core", "juce_events"]
        );
    }

    #[test]
    fn first_match_in_traversal_order_wins() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("modules").join("juce_core");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(
            nested.join("juce_core.h"),
            "BEGIN_JUCE_MODULE_DECLARATION\nID: juce_core\nEND_JUCE_MODULE_DECLARATION\n",
        )
        .unwrap();

        let module = Module::resolve(dir.path(), "juce_core").unwrap();
        assert!(module.is_resolved());
        assert_eq!(module.id(), "juce_core");
    }

    #[test]
    fn missing_module_resolves_empty() {
        let dir = tempfile::tempdir().unwrap();
        let module = Module::resolve(dir.path(), "juce_dsp").unwrap();

        assert!(!module.is_resolved());
        assert_eq!(module.id(), "");
        assert_eq!(module.dependencies(), "");
    }
}
