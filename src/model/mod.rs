//! Normalized in-memory form of a `.jucer` project descriptor.
//!
//! `Project::load` pulls every attribute of the root element into typed
//! fields with total, defaulting extraction; a missing attribute never
//! fails the load. The descriptor source stays owned by the model and the
//! structured queries (module list, export formats, file groups) re-run
//! against it on demand.

use std::cell::Cell;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::module::Module;
use crate::module::tables::PlatformLibs;
use crate::util;

/// Source-tree groups nest at most this deep in a descriptor.
const MAX_GROUP_DEPTH: usize = 4;

const DEFAULT_VERSION: &str = "1.0.0";

/// The closed set of project types a descriptor can declare. Anything
/// else maps to `Unknown`, which emits no build target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectType {
    ConsoleApp,
    GuiApp,
    AudioPlug,
    Dll,
    Library,
    Unknown(String),
}

impl ProjectType {
    fn from_attr(value: &str) -> Self {
        match value {
            "consoleapp" => Self::ConsoleApp,
            "guiapp" => Self::GuiApp,
            "audioplug" => Self::AudioPlug,
            "dll" => Self::Dll,
            "library" => Self::Library,
            other => Self::Unknown(other.to_string()),
        }
    }
}

impl Default for ProjectType {
    fn default() -> Self {
        Self::Unknown(String::new())
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::ConsoleApp => "consoleapp",
            Self::GuiApp => "guiapp",
            Self::AudioPlug => "audioplug",
            Self::Dll => "dll",
            Self::Library => "library",
            Self::Unknown(other) => other,
        };
        write!(f, "{s}")
    }
}

/// One debug or release configuration of an export format.
#[derive(Debug, Default)]
pub struct BuildConfig {
    pub valid: bool,
    pub name: String,
    pub is_debug: bool,
    pub optimisation: bool,
    pub target_name: String,
    pub header_path: Vec<String>,
    pub library_path: Vec<String>,
}

/// One export format subtree (`XCODE_MAC`, `VS2019`, …).
///
/// `valid` is false when the descriptor has no such section at all, which
/// is different from "present but empty". Check it before reading fields.
/// Either sub-config can be missing on its own without invalidating the
/// export.
#[derive(Debug, Default)]
pub struct BuildExport {
    pub valid: bool,
    pub target_folder: String,
    pub extra_defs: Vec<String>,
    pub external_libraries: Vec<String>,
    pub cpp_language_standard: String,
    pub extra_compiler_flags: String,
    pub extra_linker_flags: String,
    pub debug: BuildConfig,
    pub release: BuildConfig,
}

#[derive(Debug, Default)]
pub struct Project {
    source: String,
    base_path: PathBuf,
    output_path: PathBuf,
    /// Set once during emission when a module search path is missing on
    /// disk and the generated script has to fetch the JUCE sources.
    download_juce_source: Cell<bool>,

    pub id: String,
    pub name: String,
    pub display_splash_screen: bool,
    pub report_app_usage: bool,
    pub splash_screen_colour: String,
    pub project_type: ProjectType,
    pub juce_folder: String,
    pub version: String,
    pub bundle_identifier: String,
    pub include_binary_in_app_config: bool,
    pub cpp_language_standard: String,
    pub company_copyright: String,
    pub build_vst: bool,
    pub build_vst3: bool,
    pub build_au: bool,
    pub build_auv3: bool,
    pub build_rtas: bool,
    pub build_aax: bool,
    pub build_standalone: bool,
    pub build_unity: bool,
    pub enable_iaa: bool,
    pub plugin_name: String,
    pub plugin_desc: String,
    pub plugin_manufacturer: String,
    pub plugin_manufacturer_code: String,
    pub plugin_code: String,
    pub plugin_channel_configs: String,
    pub plugin_is_synth: bool,
    pub plugin_wants_midi_in: bool,
    pub plugin_produces_midi_out: bool,
    pub plugin_is_midi_effect: bool,
    pub plugin_editor_requires_keys: bool,
    pub plugin_au_export_prefix: String,
    pub aax_identifier: String,
    pub plugin_aax_category: i32,
    pub jucer_version: String,
    pub company_name: String,
    pub header_path: Vec<String>,
    pub company_website: String,
    pub defines: String,
    pub plugin_formats: String,
    pub plugin_characteristics_value: String,
    pub user_notes: String,
}

impl Project {
    /// Load a descriptor from disk.
    ///
    /// An unreadable input is an error; a descriptor that fails to parse
    /// as XML is reported and still yields a model with every field at
    /// its default.
    pub fn load(input: &Path, output: Option<&Path>) -> Result<Project> {
        let source = fs::read_to_string(input)
            .with_context(|| format!("Reading {}", input.display()))?;

        let base_path = input
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."))
            .to_path_buf();
        let output_path = match output {
            Some(path) => path.to_path_buf(),
            None => base_path.clone(),
        };

        Ok(Self::from_source(source, base_path, output_path, input))
    }

    /// Build the model from an in-memory descriptor source.
    pub(crate) fn from_source(
        source: String,
        base_path: PathBuf,
        output_path: PathBuf,
        origin: &Path,
    ) -> Project {
        let mut project = Project {
            base_path,
            output_path,
            version: DEFAULT_VERSION.to_string(),
            ..Project::default()
        };

        match roxmltree::Document::parse(&source) {
            Ok(doc) => project.read_attributes(&doc),
            Err(e) => {
                // best effort: report and carry on with the defaults
                println!("XML [{}] parsed with errors", origin.display());
                println!("Error description: {e}");
                return project;
            }
        }

        project.source = source;
        project
    }

    fn read_attributes(&mut self, doc: &roxmltree::Document) {
        for node in doc
            .root()
            .children()
            .filter(|n| n.has_tag_name("JUCERPROJECT"))
        {
            self.id = attr(&node, "id");
            self.name = attr(&node, "name");
            self.display_splash_screen = attr_bool(&node, "displaySplashScreen");
            self.report_app_usage = attr_bool(&node, "reportAppUsage");
            self.splash_screen_colour = attr(&node, "splashScreenColour");
            self.project_type = ProjectType::from_attr(&attr(&node, "projectType"));
            self.juce_folder = attr(&node, "juceFolder");
            let version = attr(&node, "version");
            if !version.is_empty() {
                self.version = version;
            }
            self.bundle_identifier = attr(&node, "bundleIdentifier");
            self.include_binary_in_app_config = attr_bool(&node, "includeBinaryInAppConfig");
            self.cpp_language_standard = attr(&node, "cppLanguageStandard");
            self.company_copyright = attr(&node, "companyCopyright");
            self.build_vst = attr_bool(&node, "buildVST");
            self.build_vst3 = attr_bool(&node, "buildVST3");
            self.build_au = attr_bool(&node, "buildAU");
            self.build_auv3 = attr_bool(&node, "buildAUv3");
            self.build_rtas = attr_bool(&node, "buildRTAS");
            self.build_aax = attr_bool(&node, "buildAAX");
            self.build_standalone = attr_bool(&node, "buildStandalone");
            self.build_unity = attr_bool(&node, "buildUnity");
            self.enable_iaa = attr_bool(&node, "enableIAA");
            self.plugin_name = attr(&node, "pluginName");
            self.plugin_desc = attr(&node, "pluginDesc");
            self.plugin_manufacturer = attr(&node, "pluginManufacturer");
            self.plugin_manufacturer_code = attr(&node, "pluginManufacturerCode");
            self.plugin_code = attr(&node, "pluginCode");
            self.plugin_channel_configs = attr(&node, "pluginChannelConfigs");
            self.plugin_is_synth = attr_bool(&node, "pluginIsSynth");
            self.plugin_wants_midi_in = attr_bool(&node, "pluginWantsMidiIn");
            self.plugin_produces_midi_out = attr_bool(&node, "pluginProducesMidiOut");
            self.plugin_is_midi_effect = attr_bool(&node, "pluginIsMidiEffectPlugin");
            self.plugin_editor_requires_keys = attr_bool(&node, "pluginEditorRequiresKeys");
            self.plugin_au_export_prefix = attr(&node, "pluginAUExportPrefix");
            self.aax_identifier = attr(&node, "aaxIdentifier");
            self.plugin_aax_category = attr_int(&node, "pluginAAXCategory");
            self.jucer_version = attr(&node, "jucerVersion");
            self.company_name = attr(&node, "companyName");
            let header_path = attr(&node, "headerPath");
            if !header_path.is_empty() {
                self.header_path = util::newline_list(&header_path);
            }
            self.company_website = attr(&node, "companyWebsite");
            self.defines = attr(&node, "defines");
            self.plugin_formats = attr(&node, "pluginFormats");
            self.plugin_characteristics_value = attr(&node, "pluginCharacteristicsValue");
            self.user_notes = attr(&node, "userNotes");
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Where the generated script goes; any existing file is overwritten.
    pub fn cmake_path(&self) -> PathBuf {
        self.output_path.join("CMakeLists.txt")
    }

    pub fn download_juce_source(&self) -> bool {
        self.download_juce_source.get()
    }

    /// Remember that at least one module search path was missing and the
    /// generated script fetches JUCE instead.
    pub fn set_download_juce_source(&self) {
        self.download_juce_source.set(true);
    }

    fn doc(&self) -> Option<roxmltree::Document<'_>> {
        if self.source.is_empty() {
            return None;
        }
        // the source parsed cleanly at load time, so this cannot fail
        roxmltree::Document::parse(&self.source).ok()
    }

    /// Ids of every referenced module, in document order, duplicates kept.
    pub fn module_list(&self) -> Vec<String> {
        let Some(doc) = self.doc() else {
            return Vec::new();
        };
        select(&doc, &["JUCERPROJECT", "MODULES", "MODULE"])
            .iter()
            .map(|n| attr(n, "id"))
            .collect()
    }

    /// Names of the export-format sections present in the descriptor.
    pub fn export_format_names(&self) -> Vec<String> {
        let Some(doc) = self.doc() else {
            return Vec::new();
        };
        select(&doc, &["JUCERPROJECT", "EXPORTFORMATS"])
            .iter()
            .flat_map(|n| n.children())
            .filter(|n| n.is_element())
            .map(|n| n.tag_name().name().to_string())
            .collect()
    }

    /// Every non-empty module search path declared by any export format.
    ///
    /// Only consecutive duplicates collapse; a path that reappears later
    /// in the list stays.
    pub fn module_path_list(&self) -> Vec<String> {
        let Some(doc) = self.doc() else {
            return Vec::new();
        };

        let mut list = Vec::new();
        for format in self.export_format_names() {
            let path = [
                "JUCERPROJECT",
                "EXPORTFORMATS",
                format.as_str(),
                "MODULEPATHS",
                "MODULEPATH",
            ];
            for node in select(&doc, &path) {
                let value = attr(&node, "path");
                if !value.is_empty() {
                    list.push(value);
                }
            }
        }

        list.dedup();
        list
    }

    /// Look up one export format and its Debug/Release configurations.
    pub fn resolve_export(&self, format: &str) -> BuildExport {
        let mut build = BuildExport::default();
        let Some(doc) = self.doc() else {
            return build;
        };

        for node in select(&doc, &["JUCERPROJECT", "EXPORTFORMATS", format]) {
            build.target_folder = attr(&node, "targetFolder");
            let extra_defs = attr(&node, "extraDefs");
            if !extra_defs.is_empty() {
                build.extra_defs = util::newline_list(&extra_defs);
            }
            let external_libraries = attr(&node, "externalLibraries");
            if !external_libraries.is_empty() {
                build.external_libraries = util::newline_list(&external_libraries);
            }
            build.extra_linker_flags = attr(&node, "extraLinkerFlags");
            build.cpp_language_standard = attr(&node, "cppLanguageStandard");
            build.extra_compiler_flags = attr(&node, "extraCompilerFlags");
            build.valid = true;
        }

        build.debug = resolve_config(&doc, format, "Debug");
        build.release = resolve_config(&doc, format, "Release");
        build
    }

    /// Compile-flagged files of every source group, up to the maximum
    /// nesting depth.
    pub fn source_files(&self) -> Vec<String> {
        let Some(doc) = self.doc() else {
            return Vec::new();
        };

        let mut files = Vec::new();
        let mut group_path = vec!["JUCERPROJECT", "MAINGROUP", "GROUP"];
        for _ in 0..MAX_GROUP_DEPTH {
            let mut query = group_path.clone();
            query.push("FILE");
            for node in select(&doc, &query) {
                if attr_bool(&node, "compile") {
                    files.push(attr(&node, "file"));
                }
            }
            group_path.push("GROUP");
        }
        files
    }

    /// Files of the `Resources` group, in document order.
    pub fn resource_files(&self) -> Vec<String> {
        let Some(doc) = self.doc() else {
            return Vec::new();
        };
        select(&doc, &["JUCERPROJECT", "MAINGROUP", "GROUP"])
            .into_iter()
            .filter(|n| n.attribute("name") == Some("Resources"))
            .flat_map(|n| n.children())
            .filter(|n| n.has_tag_name("FILE"))
            .map(|n| attr(&n, "file"))
            .collect()
    }

    /// Resolve every referenced module against the declared search paths
    /// that exist on disk.
    ///
    /// Each lookup constructs a fresh resolver and repeats the directory
    /// search; there is no cache. A module absent from every root comes
    /// back unresolved with empty metadata.
    pub fn resolve_modules(&self) -> Result<Vec<(String, Module)>> {
        let roots: Vec<PathBuf> = self
            .module_path_list()
            .iter()
            .map(|path| self.base_path.join(path))
            .filter(|path| path.exists())
            .collect();

        let mut resolved = Vec::new();
        for name in self.module_list() {
            let mut module = Module::default();
            for root in &roots {
                module = Module::resolve(root, &name)?;
                if module.is_resolved() {
                    break;
                }
            }
            resolved.push((name, module));
        }
        Ok(resolved)
    }
}

/// Union of the table entries for every listed module, sorted and
/// deduplicated, so the output does not depend on module order.
pub fn libraries_for(table: &PlatformLibs, modules: &[String]) -> Vec<String> {
    let mut libs: Vec<String> = modules
        .iter()
        .filter_map(|module| table.get(module.as_str()))
        .flat_map(|entry| util::value_list(entry))
        .collect();
    libs.sort();
    libs.dedup();
    libs
}

fn resolve_config(doc: &roxmltree::Document, format: &str, name: &str) -> BuildConfig {
    let mut config = BuildConfig::default();
    let path = [
        "JUCERPROJECT",
        "EXPORTFORMATS",
        format,
        "CONFIGURATIONS",
        "CONFIGURATION",
    ];

    for node in select(doc, &path)
        .into_iter()
        .filter(|n| n.attribute("name") == Some(name))
    {
        config.name = attr(&node, "name");
        config.is_debug = attr_bool(&node, "isDebug");
        config.optimisation = attr_bool(&node, "optimisation");
        config.target_name = attr(&node, "targetName");
        let header_path = attr(&node, "headerPath");
        if !header_path.is_empty() {
            config.header_path = util::newline_list(&header_path);
        }
        let library_path = attr(&node, "libraryPath");
        if !library_path.is_empty() {
            config.library_path = util::newline_list(&library_path);
        }
        config.valid = true;
    }

    config
}

/// Walk element children level by level, like an absolute `/A/B/C` query.
fn select<'a, 'input>(
    doc: &'a roxmltree::Document<'input>,
    path: &[&str],
) -> Vec<roxmltree::Node<'a, 'input>> {
    let mut current = vec![doc.root()];
    for segment in path {
        current = current
            .iter()
            .flat_map(|n| n.children())
            .filter(|n| n.has_tag_name(*segment))
            .collect();
    }
    current
}

fn attr(node: &roxmltree::Node, name: &str) -> String {
    node.attribute(name).unwrap_or("").to_string()
}

fn attr_bool(node: &roxmltree::Node, name: &str) -> bool {
    matches!(node.attribute(name), Some(v) if v.starts_with(['1', 't', 'T', 'y', 'Y']))
}

fn attr_int(node: &roxmltree::Node, name: &str) -> i32 {
    node.attribute(name)
        .and_then(|v| v.parse().ok())
        .unwrap_or(0)
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "id = {}", self.id)?;
        writeln!(f, "name = {}", self.name)?;
        writeln!(f, "displaySplashScreen = {}", self.display_splash_screen)?;
        writeln!(f, "reportAppUsage = {}", self.report_app_usage)?;
        writeln!(f, "splashScreenColour = {}", self.splash_screen_colour)?;
        writeln!(f, "projectType = {}", self.project_type)?;
        writeln!(f, "version = {}", self.version)?;
        writeln!(f, "bundleIdentifier = {}", self.bundle_identifier)?;
        writeln!(
            f,
            "includeBinaryInAppConfig = {}",
            self.include_binary_in_app_config
        )?;
        writeln!(f, "cppLanguageStandard = {}", self.cpp_language_standard)?;
        writeln!(f, "companyCopyright = {}", self.company_copyright)?;
        writeln!(f, "buildVST = {}", self.build_vst)?;
        writeln!(f, "buildVST3 = {}", self.build_vst3)?;
        writeln!(f, "buildAU = {}", self.build_au)?;
        writeln!(f, "buildAUv3 = {}", self.build_auv3)?;
        writeln!(f, "buildRTAS = {}", self.build_rtas)?;
        writeln!(f, "buildAAX = {}", self.build_aax)?;
        writeln!(f, "buildStandalone = {}", self.build_standalone)?;
        writeln!(f, "buildUnity = {}", self.build_unity)?;
        writeln!(f, "enableIAA = {}", self.enable_iaa)?;
        writeln!(f, "pluginName = {}", self.plugin_name)?;
        writeln!(f, "pluginDesc = {}", self.plugin_desc)?;
        writeln!(f, "pluginManufacturer = {}", self.plugin_manufacturer)?;
        writeln!(
            f,
            "pluginManufacturerCode = {}",
            self.plugin_manufacturer_code
        )?;
        writeln!(f, "pluginCode = {}", self.plugin_code)?;
        writeln!(f, "pluginChannelConfigs = {}", self.plugin_channel_configs)?;
        writeln!(f, "pluginIsSynth = {}", self.plugin_is_synth)?;
        writeln!(f, "pluginWantsMidiIn = {}", self.plugin_wants_midi_in)?;
        writeln!(f, "pluginProducesMidiOut = {}", self.plugin_produces_midi_out)?;
        writeln!(
            f,
            "pluginIsMidiEffectPlugin = {}",
            self.plugin_is_midi_effect
        )?;
        writeln!(
            f,
            "pluginEditorRequiresKeys = {}",
            self.plugin_editor_requires_keys
        )?;
        writeln!(f, "pluginAUExportPrefix = {}", self.plugin_au_export_prefix)?;
        writeln!(f, "aaxIdentifier = {}", self.aax_identifier)?;
        writeln!(f, "pluginAAXCategory = {}", self.plugin_aax_category)?;
        writeln!(f, "jucerVersion = {}", self.jucer_version)?;
        writeln!(f, "companyName = {}", self.company_name)?;
        writeln!(f, "headerPath = ")?;
        for path in &self.header_path {
            writeln!(f, "    {path}")?;
        }
        writeln!(f, "companyWebsite = {}", self.company_website)?;
        writeln!(f, "defines = {}", self.defines)?;
        writeln!(f, "pluginFormats = {}", self.plugin_formats)?;
        writeln!(
            f,
            "pluginCharacteristicsValue = {}",
            self.plugin_characteristics_value
        )?;
        writeln!(f, "userNotes = {}", self.user_notes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module::tables;
    use std::path::Path;

    fn project(source: &str) -> Project {
        Project::from_source(
            source.to_string(),
            PathBuf::from("."),
            PathBuf::from("."),
            Path::new("test.jucer"),
        )
    }

    #[test]
    fn missing_attributes_default() {
        let p = project(r#"<JUCERPROJECT name="Demo"/>"#);

        assert_eq!(p.name, "Demo");
        assert_eq!(p.version, "1.0.0");
        assert_eq!(p.cpp_language_standard, "");
        assert!(!p.build_vst);
        assert_eq!(p.plugin_aax_category, 0);
        assert_eq!(p.project_type, ProjectType::Unknown(String::new()));
    }

    #[test]
    fn version_attribute_overrides_default() {
        let p = project(r#"<JUCERPROJECT name="Demo" version="2.3.4"/>"#);
        assert_eq!(p.version, "2.3.4");

        // present but empty keeps the default
        let p = project(r#"<JUCERPROJECT name="Demo" version=""/>"#);
        assert_eq!(p.version, "1.0.0");
    }

    #[test]
    fn unparseable_descriptor_keeps_defaults() {
        let p = project("<JUCERPROJECT name=");

        assert_eq!(p.name, "");
        assert_eq!(p.version, "1.0.0");
        assert!(p.module_list().is_empty());
        assert!(p.module_path_list().is_empty());
        assert!(!p.resolve_export("VS2019").valid);
    }

    #[test]
    fn module_list_keeps_document_order_and_duplicates() {
        let p = project(
            r#"<JUCERPROJECT name="Demo">
                 <MODULES>
                   <MODULE id="juce_gui_basics"/>
                   <MODULE id="juce_core"/>
                   <MODULE id="juce_core"/>
                 </MODULES>
               </JUCERPROJECT>"#,
        );

        assert_eq!(
            p.module_list(),
            vec!["juce_gui_basics", "juce_core", "juce_core"]
        );
    }

    #[test]
    fn module_path_list_dedups_adjacent_only() {
        let p = project(
            r#"<JUCERPROJECT name="Demo">
                 <EXPORTFORMATS>
                   <XCODE_MAC>
                     <MODULEPATHS>
                       <MODULEPATH id="m1" path="A"/>
                       <MODULEPATH id="m2" path="B"/>
                     </MODULEPATHS>
                   </XCODE_MAC>
                   <LINUX_MAKE>
                     <MODULEPATHS>
                       <MODULEPATH id="m1" path="A"/>
                     </MODULEPATHS>
                   </LINUX_MAKE>
                 </EXPORTFORMATS>
               </JUCERPROJECT>"#,
        );
        // the non-adjacent repeat of A survives
        assert_eq!(p.module_path_list(), vec!["A", "B", "A"]);

        let p = project(
            r#"<JUCERPROJECT name="Demo">
                 <EXPORTFORMATS>
                   <LINUX_MAKE>
                     <MODULEPATHS>
                       <MODULEPATH id="m1" path="A"/>
                       <MODULEPATH id="m2" path="A"/>
                       <MODULEPATH id="m3" path="B"/>
                     </MODULEPATHS>
                   </LINUX_MAKE>
                 </EXPORTFORMATS>
               </JUCERPROJECT>"#,
        );
        assert_eq!(p.module_path_list(), vec!["A", "B"]);
    }

    #[test]
    fn absent_export_is_invalid_but_configs_stay_independent() {
        let p = project(
            r#"<JUCERPROJECT name="Demo">
                 <EXPORTFORMATS>
                   <VS2015 targetFolder="Builds/VisualStudio2015">
                     <CONFIGURATIONS>
                       <CONFIGURATION name="Debug" isDebug="1" targetName="Demo"
                                      headerPath="C:\sdk\include" libraryPath="C:\sdk\lib"/>
                     </CONFIGURATIONS>
                   </VS2015>
                 </EXPORTFORMATS>
               </JUCERPROJECT>"#,
        );

        assert!(!p.resolve_export("VS2019").valid);

        let export = p.resolve_export("VS2015");
        assert!(export.valid);
        assert_eq!(export.target_folder, "Builds/VisualStudio2015");
        assert!(export.debug.valid);
        assert!(export.debug.is_debug);
        assert_eq!(export.debug.header_path, vec!["C:\\sdk\\include"]);
        // no Release configuration, but the export itself stays valid
        assert!(!export.release.valid);
    }

    #[test]
    fn source_files_keep_compile_flagged_entries_only() {
        let p = project(
            r#"<JUCERPROJECT name="Demo">
                 <MAINGROUP id="g0" name="Demo">
                   <GROUP id="g1" name="Source">
                     <FILE id="f1" compile="1" file="Source/Main.cpp"/>
                     <FILE id="f2" compile="0" file="Source/Header.h"/>
                     <GROUP id="g2" name="Inner">
                       <FILE id="f3" compile="1" file="Source/Inner/Thing.cpp"/>
                     </GROUP>
                   </GROUP>
                 </MAINGROUP>
               </JUCERPROJECT>"#,
        );

        assert_eq!(
            p.source_files(),
            vec!["Source/Main.cpp", "Source/Inner/Thing.cpp"]
        );
    }

    #[test]
    fn resource_files_come_from_the_resources_group() {
        let p = project(
            r#"<JUCERPROJECT name="Demo">
                 <MAINGROUP id="g0" name="Demo">
                   <GROUP id="g1" name="Resources">
                     <FILE id="f1" file="Assets/logo.png"/>
                     <FILE id="f2" file="Assets/click.wav"/>
                   </GROUP>
                   <GROUP id="g2" name="Source">
                     <FILE id="f3" compile="1" file="Source/Main.cpp"/>
                   </GROUP>
                 </MAINGROUP>
               </JUCERPROJECT>"#,
        );

        assert_eq!(p.resource_files(), vec!["Assets/logo.png", "Assets/click.wav"]);
    }

    #[test]
    fn libraries_for_is_order_independent() {
        let forward = vec!["juce_core".to_string(), "juce_graphics".to_string()];
        let backward = vec!["juce_graphics".to_string(), "juce_core".to_string()];

        let a = libraries_for(&tables::OSX_FRAMEWORKS, &forward);
        let b = libraries_for(&tables::OSX_FRAMEWORKS, &backward);

        assert_eq!(a, b);
        assert_eq!(a, vec!["Cocoa", "IOKit", "QuartzCore"]);
    }

    #[test]
    fn libraries_for_ignores_unknown_modules() {
        let modules = vec!["juce_core".to_string(), "not_a_module".to_string()];
        let libs = libraries_for(&tables::LINUX_LIBS, &modules);
        assert_eq!(libs, vec!["curl", "dl", "pthread", "rt"]);
    }
}
