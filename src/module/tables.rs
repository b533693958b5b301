//! Per-module platform library names.
//!
//! These are used when module directories are not present on disk, so the
//! generated script can still link the system frameworks each JUCE module
//! needs. Loaded once on first use, immutable afterwards.

use std::collections::HashMap;
use std::sync::LazyLock;

pub type PlatformLibs = HashMap<&'static str, &'static str>;

pub static OSX_FRAMEWORKS: LazyLock<PlatformLibs> = LazyLock::new(|| {
    HashMap::from([
        ("juce_audio_basics", "Accelerate"),
        ("juce_audio_devices", "CoreAudio CoreMIDI AudioToolbox"),
        ("juce_audio_formats", "CoreAudio CoreMIDI QuartzCore AudioToolbox"),
        ("juce_audio_processors", "CoreAudio CoreMIDI AudioToolbox"),
        ("juce_audio_utils", "CoreAudioKit DiscRecording"),
        ("juce_core", "Cocoa IOKit"),
        ("juce_dsp", "Accelerate"),
        ("juce_graphics", "Cocoa QuartzCore"),
        ("juce_gui_basics", "Cocoa Carbon QuartzCore"),
        ("juce_gui_extra", "WebKit"),
        ("juce_opengl", "OpenGL"),
        ("juce_video", "AVKit AVFoundation CoreMedia"),
    ])
});

pub static IOS_FRAMEWORKS: LazyLock<PlatformLibs> = LazyLock::new(|| {
    HashMap::from([
        ("juce_audio_basics", "Accelerate"),
        ("juce_audio_devices", "CoreAudio CoreMIDI AudioToolbox AVFoundation"),
        ("juce_audio_formats", "AudioToolbox QuartzCore"),
        ("juce_audio_processors", "AudioToolbox"),
        ("juce_audio_utils", "CoreAudioKit"),
        ("juce_core", "Foundation"),
        ("juce_dsp", "Accelerate"),
        ("juce_graphics", "CoreGraphics CoreImage CoreText QuartzCore"),
        ("juce_gui_basics", "UIKit MobileCoreServices"),
        ("juce_opengl", "OpenGLES"),
        ("juce_video", "AVKit AVFoundation CoreMedia"),
    ])
});

pub static LINUX_PACKAGES: LazyLock<PlatformLibs> = LazyLock::new(|| {
    HashMap::from([
        ("juce_audio_devices", "alsa"),
        ("juce_graphics", "x11 xinerama xext freetype2"),
        ("juce_gui_basics", "x11 xinerama xext freetype2"),
    ])
});

pub static LINUX_LIBS: LazyLock<PlatformLibs> = LazyLock::new(|| {
    HashMap::from([
        ("juce_core", "curl rt dl pthread"),
        ("juce_opengl", "GL"),
    ])
});

pub static MINGW_LIBS: LazyLock<PlatformLibs> = LazyLock::new(|| {
    HashMap::from([
        ("juce_audio_devices", "winmm"),
        (
            "juce_core",
            "uuid wsock32 wininet version ole32 ws2_32 oleaut32 imm32 comdlg32 shlwapi rpcrt4 winmm",
        ),
        ("juce_opengl", "opengl32"),
    ])
});
