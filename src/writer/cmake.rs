//! Emit the generated build script.
//!
//! Every fragment below is computed on its own from the project model and
//! the concatenation order in [`emit`] is fixed. Fragments print progress
//! lines while they work (which search paths were valid, which toolchain
//! configuration was picked); those lines never end up in the output.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::model::{self, Project, ProjectType};
use crate::module::tables::{self, PlatformLibs};

/// Visual Studio export formats, newest first; the first one present in
/// the descriptor wins.
const MSVC_EXPORTS: [&str; 3] = ["VS2019", "VS2017", "VS2015"];

/// Concatenate every fragment in its fixed order.
///
/// The only state emission touches is the project's download memo flag,
/// so emitting the same model twice produces byte-identical output.
pub fn emit(project: &Project) -> String {
    let mut out = String::new();
    out.push_str(&header(project));
    out.push_str(&dependencies(project));
    out.push_str(&cpp_standard(project));
    out.push_str(&defines(project));
    out.push_str(&include_dirs(project));
    out.push_str(autogen_vars());
    out.push_str(&resource_files(project));
    out.push_str(&source_list(project));
    out.push_str(&executable(project));
    out.push_str(&common_options(project));
    out.push_str(&target_config(project));
    out
}

/// Generate and write `CMakeLists.txt` into the project's output
/// directory, overwriting whatever was there.
pub fn write(project: &Project) -> Result<PathBuf> {
    let path = project.cmake_path();
    let script = emit(project);
    fs::write(&path, script).with_context(|| format!("Writing {}", path.display()))?;
    Ok(path)
}

fn header(project: &Project) -> String {
    let mut ss = String::from(
        "################################################\n\
         #\n\
         #    This file was auto-generated by jucer2cmake-rust\n\
         #\n\
         ################################################\n\
         \n\n\
         cmake_minimum_required(VERSION 3.11)\n\
         \n\
         if(NOT CMAKE_BUILD_TYPE)\n\
         \x20   set(CMAKE_BUILD_TYPE \"Release\" CACHE STRING \"Choose the type of build, options are: Debug, Release, or MinSizeRel.\" FORCE)\n\
         \x20   message(STATUS \"CMAKE_BUILD_TYPE not set, defaulting to Release.\")\n\
         endif()\n\n",
    );

    ss.push_str(&format!("project({} ", project.name));
    if !project.plugin_desc.is_empty() {
        ss.push_str(&format!("DESCRIPTION \"{}\"\n", project.plugin_desc));
    }
    ss.push_str("LANGUAGES CXX C)\n\n");

    ss.push_str("message(STATUS \"Generator .............. ${CMAKE_GENERATOR}\")\n");
    ss.push_str("message(STATUS \"Build Type ............. ${CMAKE_BUILD_TYPE}\")\n");
    ss.push_str(&format!(
        "message(STATUS \"AppVersion ............. {}\")\n\n",
        project.version
    ));

    ss
}

/// One entry per declared module search path: a path present on disk
/// contributes nothing, a missing one makes the script fetch the JUCE
/// sources and flips the project-wide download flag.
fn dependencies(project: &Project) -> String {
    let mut ss = String::from("include(ExternalProject)\n\n");

    for path in project.module_path_list() {
        let full = project.base_path().join(&path);
        if full.exists() {
            println!("Valid: {}", full.display());
            continue;
        }

        println!("Path not present: {}", full.display());
        println!("Configured to download JUCE");

        if project.juce_folder.is_empty() {
            ss.push_str("set(JUCE_ROOT ${CMAKE_CURRENT_BINARY_DIR}/juce)\n\n");
            ss.push_str("ExternalProject_Add(juce_root\n");
            ss.push_str("    GIT_REPOSITORY https://github.com/WeAreROLI/JUCE.git\n");
            ss.push_str(&format!("    GIT_TAG {}\n", project.jucer_version));
            ss.push_str("    GIT_SHALLOW 1\n");
            ss.push_str("    BUILD_IN_SOURCE 0\n");
            ss.push_str("    SOURCE_DIR ${JUCE_ROOT}\n");
            ss.push_str("    PATCH_COMMAND \"\"\n");
            ss.push_str("    UPDATE_COMMAND \"\"\n");
            ss.push_str("    CONFIGURE_COMMAND \"\"\n");
            ss.push_str("    BUILD_COMMAND \"\"\n");
            ss.push_str("    INSTALL_COMMAND \"\"\n");
            ss.push_str(")\n");
            ss.push_str("set(EXTERNAL_JUCE TRUE)\n\n");
            project.set_download_juce_source();
        } else {
            ss.push_str(&format!("set(JUCE_ROOT {path})\n"));
        }
    }

    ss
}

fn cpp_standard(project: &Project) -> String {
    let standard = if project.cpp_language_standard.is_empty() {
        "11"
    } else {
        &project.cpp_language_standard
    };

    format!(
        "set(CMAKE_CXX_STANDARD {standard})\n\
         set(CMAKE_CXX_STANDARD_REQUIRED ON)\n\
         set(CMAKE_CXX_EXTENSIONS OFF)\n"
    )
}

fn defines(project: &Project) -> String {
    let (version, hex) = encoded_version(&project.version);

    let mut ss = String::from("\nadd_compile_definitions(\n");
    if !project.defines.is_empty() {
        ss.push_str(&format!("    {}\n", project.defines));
    }
    ss.push_str(&format!("    JUCE_APP_VERSION={version}\n"));
    ss.push_str(&format!("    JUCE_APP_VERSION_HEX=0x{hex}\n"));
    for (symbol, enabled) in [
        ("JucePlugin_Build_VST", project.build_vst),
        ("JucePlugin_Build_VST3", project.build_vst3),
        ("JucePlugin_Build_AU", project.build_au),
        ("JucePlugin_Build_AUv3", project.build_auv3),
        ("JucePlugin_Build_RTAS", project.build_rtas),
        ("JucePlugin_Build_AAX", project.build_aax),
        ("JucePlugin_Build_Standalone", project.build_standalone),
        ("JucePlugin_Build_Unity", project.build_unity),
    ] {
        ss.push_str(&format!("    {}={}\n", symbol, enabled as u8));
    }
    ss.push_str(")\n\n");
    ss
}

/// Encode `MAJOR.MINOR.POINT` as three zero-padded hex bytes.
///
/// A version that does not have exactly three numeric components is
/// substituted by `0.0.0` with a warning instead of being indexed blind.
fn encoded_version(version: &str) -> (String, String) {
    let parts: Option<Vec<u32>> = version.split('.').map(|c| c.parse().ok()).collect();
    match parts {
        Some(parts) if parts.len() == 3 => (
            version.to_string(),
            format!("{:02x}{:02x}{:02x}", parts[0], parts[1], parts[2]),
        ),
        _ => {
            println!("Warning: version [{version}] is not MAJOR.MINOR.POINT, using 0.0.0");
            ("0.0.0".to_string(), "000000".to_string())
        }
    }
}

fn include_dirs(project: &Project) -> String {
    let mut ss = String::from("include_directories(\n\n    JuceLibraryCode\n");

    if !project.download_juce_source() {
        for path in project.module_path_list() {
            ss.push_str(&format!("    {path}\n"));
        }
    } else {
        ss.push_str("    ${JUCE_ROOT}/modules\n");
    }

    for path in &project.header_path {
        ss.push_str(&format!("    {path}\n"));
    }
    ss.push_str(")\n\n");
    ss
}

fn autogen_vars() -> &'static str {
    "if(APPLE)\n\
     \x20   file(GLOB JUCE_LIBRARY_CODE_CPP RELATIVE ${CMAKE_SOURCE_DIR} CONFIGURE_DEPENDS\n\
     \x20      JuceLibraryCode/*.mm\n\
     \x20      JuceLibraryCode/BinaryData.cpp\n\
     \x20   )\n\
     \x20   if(CMAKE_BUILD_TYPE STREQUAL \"Debug\")\n\
     \x20       add_compile_definitions(DEBUG)\n\
     \x20   endif()\n\
     else()\n\
     \x20   file(GLOB JUCE_LIBRARY_CODE_CPP RELATIVE ${CMAKE_SOURCE_DIR} CONFIGURE_DEPENDS JuceLibraryCode/*.cpp)\n\
     endif()\n"
}

fn resource_files(project: &Project) -> String {
    let files = project.resource_files();

    let mut ss = String::from("\nset(RESOURCE_FILES\n");
    for file in &files {
        ss.push_str(&format!("\n    {file}"));
    }
    ss.push_str("\n)\n\n");

    // the resource subdirectory comes from the first file's leading path
    // segment, with a literal fallback when the project has no resources
    let directory = match files.first() {
        Some(file) => file
            .split(['/', '\\'])
            .next()
            .unwrap_or_default()
            .to_string(),
        None => {
            println!("Default Resource Folder Name");
            "Resources".to_string()
        }
    };

    ss.push_str("if(RESOURCE_FILES)\n");
    ss.push_str("    add_custom_command(\n");
    ss.push_str("        OUTPUT BinaryData.cpp BinaryData.h\n");
    ss.push_str("        COMMAND ${BINARY_BUILDER}\n");
    ss.push_str(&format!(
        "        ARGS ${{CMAKE_CURRENT_SOURCE_DIR}}/{directory} ${{CMAKE_CURRENT_SOURCE_DIR}}/JuceLibraryCode BinaryData\n"
    ));
    ss.push_str("    )\n");
    ss.push_str("    add_custom_target(BinaryData DEPENDS BinaryData.cpp BinaryData.h)\n");
    ss.push_str("endif()\n\n");
    ss
}

fn source_list(project: &Project) -> String {
    let mut ss = String::from("set(SRC_FILES\n");
    for file in project.source_files() {
        ss.push_str(&format!("\n    {file}"));
    }
    ss.push_str("\n)\n\n");
    ss
}

fn executable(project: &Project) -> String {
    if project.name.is_empty() {
        return String::new();
    }

    let mut ss = String::new();
    match &project.project_type {
        ProjectType::ConsoleApp | ProjectType::GuiApp => {
            ss.push_str(&format!(
                "add_executable({} ${{SRC_FILES}} ${{JUCE_LIBRARY_CODE_CPP}})\n",
                project.name
            ));
        }
        ProjectType::AudioPlug | ProjectType::Dll | ProjectType::Library => {
            ss.push_str(&format!(
                "add_library({} SHARED ${{SRC_FILES}} ${{JUCE_LIBRARY_CODE_CPP}})\n",
                project.name
            ));
        }
        ProjectType::Unknown(other) => {
            println!("Warning: unrecognised project type [{other}], no build target emitted");
        }
    }

    ss.push_str(&format!(
        "if(EXTERNAL_JUCE)\n    add_dependencies({} juce_root)\nendif()\n\n",
        project.name
    ));
    ss
}

fn common_options(project: &Project) -> String {
    format!(
        "if (CMAKE_CXX_COMPILER_ID MATCHES \"Clang\")\n\
         \x20   if(CMAKE_BUILD_TYPE STREQUAL \"Release\")\n\
         \x20       target_compile_options({name} PUBLIC -flto)\n\
         \x20       target_link_options({name} PUBLIC -flto)\n\
         \x20   elseif(CMAKE_BUILD_TYPE STREQUAL \"Debug\")\n\
         \x20       target_compile_options({name} PUBLIC -fsanitize=address -fno-omit-frame-pointer)\n\
         \x20       target_link_options({name} PUBLIC -fsanitize=address)\n\
         \x20   endif()\n\
         endif()\n\n",
        name = project.name
    )
}

/// The nested platform dispatch: UNIX splits into Apple (Darwin or iOS)
/// and Linux, everything else falls to MSVC. Each leaf renders nothing
/// when its export format is absent from the descriptor.
fn target_config(project: &Project) -> String {
    let mut ss = String::from("if(UNIX)\n");
    ss.push_str("    if(APPLE)\n");
    ss.push_str("        if(${CMAKE_SYSTEM_NAME} STREQUAL \"Darwin\")\n");
    ss.push_str(&apple_config(project, "XCODE_MAC", &tables::OSX_FRAMEWORKS, "XCode"));
    ss.push_str("        elseif(${CMAKE_SYSTEM_NAME} STREQUAL \"iOS\")\n");
    ss.push_str(&apple_config(project, "XCODE_IPHONE", &tables::IOS_FRAMEWORKS, "iOS"));
    ss.push_str("        endif()\n");
    ss.push_str("    elseif(ANDROID)\n");
    ss.push_str("    else()\n");
    ss.push_str(&linux_config(project));
    ss.push_str("    endif()\n");
    ss.push_str("elseif(MSVC)\n");
    ss.push_str(&msvc_config(project));
    ss.push_str("endif()\n");
    ss
}

/// Shared between the macOS and iOS leaves; they differ only in export
/// format name and framework table.
fn apple_config(
    project: &Project,
    export_name: &str,
    table: &PlatformLibs,
    label: &str,
) -> String {
    let b = project.resolve_export(export_name);
    if !b.valid {
        return String::new();
    }
    println!("Using {label} Config");

    let mut ss = String::new();
    if !b.debug.header_path.is_empty() {
        ss.push_str(&format!(
            "            target_include_directories({} PUBLIC\n",
            project.name
        ));
        for path in &b.debug.header_path {
            ss.push_str(&format!("                {path}\n"));
        }
        ss.push_str("            )\n\n");
    }

    if !b.extra_compiler_flags.is_empty() {
        ss.push_str(&format!(
            "            target_compile_options({} PUBLIC {})\n\n",
            project.name, b.extra_compiler_flags
        ));
    }

    if !b.debug.library_path.is_empty() {
        ss.push_str(&format!(
            "            target_link_directories({} BEFORE PUBLIC\n",
            project.name
        ));
        for path in &b.debug.library_path {
            ss.push_str(&format!("                {path}\n"));
        }
        ss.push_str("            )\n\n");
    }

    let frameworks = model::libraries_for(table, &project.module_list());
    for (i, framework) in frameworks.iter().enumerate() {
        ss.push_str(&format!("            find_library(FRAMEWORK{i} {framework})\n"));
    }
    ss.push('\n');
    ss.push_str(&format!(
        "            target_link_libraries({}\n",
        project.name
    ));
    for library in &b.external_libraries {
        ss.push_str(&format!("                {library}\n"));
    }
    for i in 0..frameworks.len() {
        ss.push_str(&format!("                ${{FRAMEWORK{i}}}\n"));
    }
    ss.push_str("            )\n");

    ss
}

fn linux_config(project: &Project) -> String {
    let b = project.resolve_export("LINUX_MAKE");
    if !b.valid {
        return String::new();
    }
    println!("Using Linux Config");

    let modules = project.module_list();
    let mut ss = String::new();

    let packages = model::libraries_for(&tables::LINUX_PACKAGES, &modules);
    if !packages.is_empty() {
        ss.push_str("\n        include(FindPkgConfig)\n");
        ss.push_str("        pkg_check_modules(JUCE_LIBS REQUIRED\n            ");
        for package in &packages {
            ss.push_str(package);
            ss.push(' ');
        }
        ss.push_str("\n)\n");
    }

    if !b.debug.header_path.is_empty() || !packages.is_empty() {
        ss.push_str(&format!(
            "\n        target_include_directories({} PUBLIC\n",
            project.name
        ));
        if !packages.is_empty() {
            ss.push_str("            ${JUCE_LIBS_INCLUDE_DIRS}\n");
        }
        for path in &b.debug.header_path {
            ss.push_str(&format!("            {path}\n"));
        }
        ss.push_str("        )\n");
    }

    if !b.extra_compiler_flags.is_empty() {
        ss.push_str(&format!(
            "\n        target_compile_options({} PUBLIC {})\n",
            project.name, b.extra_compiler_flags
        ));
    }

    if !b.debug.library_path.is_empty() {
        ss.push_str(&format!(
            "\n        target_link_directories({} BEFORE PUBLIC\n",
            project.name
        ));
        for path in &b.debug.library_path {
            ss.push_str(&format!("            {path}\n"));
        }
        ss.push_str("        )\n");
    }

    let libs = model::libraries_for(&tables::LINUX_LIBS, &modules);
    if !b.external_libraries.is_empty() || !packages.is_empty() || !libs.is_empty() {
        ss.push_str(&format!(
            "\n        target_link_libraries({}\n",
            project.name
        ));
        for library in &b.external_libraries {
            ss.push_str(&format!("            {library}\n"));
        }
        if !packages.is_empty() {
            ss.push_str("            ${JUCE_LIBS_LIBRARIES}\n");
        }
        if !libs.is_empty() {
            ss.push_str("            ");
            for lib in &libs {
                ss.push_str(lib);
                ss.push(' ');
            }
            ss.push('\n');
        }
        ss.push_str("        )\n");
    }

    ss
}

fn msvc_config(project: &Project) -> String {
    // first available of VS2019 / VS2017 / VS2015; no merging
    let Some((picked, b)) = MSVC_EXPORTS
        .iter()
        .map(|&name| (name, project.resolve_export(name)))
        .find(|(_, b)| b.valid)
    else {
        return String::new();
    };
    println!("Using {picked} Config");

    let mut ss = String::new();
    if !b.debug.header_path.is_empty() {
        ss.push_str(&format!(
            "\n    target_include_directories({} PUBLIC\n",
            project.name
        ));
        for path in &b.debug.header_path {
            ss.push_str(&format!("        \"{path}\"\n"));
        }
        ss.push_str("    )\n\n");
    }

    if !b.extra_compiler_flags.is_empty() || !b.extra_defs.is_empty() {
        ss.push_str(&format!(
            "\n    target_compile_options({} PUBLIC \n",
            project.name
        ));
        if !b.extra_compiler_flags.is_empty() {
            ss.push_str(&format!("        {}\n", b.extra_compiler_flags));
        }
        for def in &b.extra_defs {
            ss.push_str(&format!("        {def}\n"));
        }
        ss.push_str("    )\n");
    }

    if !b.debug.library_path.is_empty() {
        ss.push_str(&format!(
            "\n    target_link_directories({} BEFORE PUBLIC\n",
            project.name
        ));
        for path in &b.debug.library_path {
            ss.push_str(&format!("        \"{path}\"\n"));
        }
        ss.push_str("    )\n");
    }

    if !b.external_libraries.is_empty() || !b.extra_linker_flags.is_empty() {
        ss.push_str(&format!(
            "\n    target_link_libraries({}\n",
            project.name
        ));
        for library in &b.external_libraries {
            ss.push_str(&format!("        {library}\n"));
        }
        ss.push_str(&format!("        {}\n", b.extra_linker_flags));
        ss.push_str("    )\n");
    }

    ss
}
