use std::path::Path;

use jucer2cmake_rust::model::Project;
use jucer2cmake_rust::writer::cmake;

#[test]
fn console_project_without_exports() {
    let project = Project::load(Path::new("tests/demo.jucer"), None).expect("fixture loads");
    let script = cmake::emit(&project);

    assert!(script.contains("project(DemoConsole LANGUAGES CXX C)"));
    assert!(script.contains("set(CMAKE_CXX_STANDARD 14)"));
    assert!(script.contains("add_executable(DemoConsole ${SRC_FILES} ${JUCE_LIBRARY_CODE_CPP})"));

    // no version attribute: the default and its hex form appear verbatim
    assert!(script.contains("JUCE_APP_VERSION=1.0.0"));
    assert!(script.contains("JUCE_APP_VERSION_HEX=0x010000"));

    // compile-flagged sources only
    assert!(script.contains("    Source/Main.cpp"));
    assert!(!script.contains("Helpers.h"));

    // no export format is valid, so no platform fragment links anything
    assert!(!script.contains("target_link_libraries"));
    assert!(!script.contains("find_library"));
}

#[test]
fn plugin_project_with_exports() {
    let project = Project::load(Path::new("tests/plugin.jucer"), None).expect("fixture loads");
    let script = cmake::emit(&project);

    assert!(script.contains("add_library(DemoPlug SHARED ${SRC_FILES} ${JUCE_LIBRARY_CODE_CPP})"));
    assert!(script.contains("JUCE_APP_VERSION=0.9.1"));
    assert!(script.contains("JUCE_APP_VERSION_HEX=0x000901"));

    // one module path is missing on disk, so the script fetches JUCE
    assert!(script.contains("ExternalProject_Add(juce_root"));
    assert!(script.contains("GIT_TAG 5.4.7"));
    assert!(script.contains("${JUCE_ROOT}/modules"));

    // mac export resolves frameworks for both referenced modules, sorted
    assert!(script.contains("find_library(FRAMEWORK0 Carbon)"));
    assert!(script.contains("find_library(FRAMEWORK1 Cocoa)"));
    assert!(script.contains("find_library(FRAMEWORK2 IOKit)"));
    assert!(script.contains("find_library(FRAMEWORK3 QuartzCore)"));

    // VS2019 and VS2017 are absent, the VS2015 settings win
    assert!(script.contains("\"C:\\SDKs\\ASIOSDK\\common\""));
    assert!(script.contains("winmm.lib"));

    // resource folder derives from the first resource file
    assert!(script.contains("${CMAKE_CURRENT_SOURCE_DIR}/Assets"));
}

#[test]
fn write_overwrites_existing_output() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("CMakeLists.txt"), "stale contents").unwrap();

    let project =
        Project::load(Path::new("tests/demo.jucer"), Some(dir.path())).expect("fixture loads");
    let path = cmake::write(&project).expect("script written");

    assert_eq!(path, dir.path().join("CMakeLists.txt"));
    let script = std::fs::read_to_string(&path).unwrap();
    assert!(script.starts_with("################################################"));
    assert!(!script.contains("stale contents"));
}

#[test]
fn emitting_twice_is_byte_identical() {
    let project = Project::load(Path::new("tests/plugin.jucer"), None).expect("fixture loads");

    let first = cmake::emit(&project);
    let second = cmake::emit(&project);
    assert_eq!(first, second);
}
