// File: crates/chart-core/src/font.rs
// Summary: Locate a CJK-capable font once per run and expose the resulting text mode.

use std::borrow::Cow;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use skia_safe as skia;
use tracing::{debug, info, warn};

use crate::format::ascii_fallback;

/// Well-known CJK font locations across Linux, macOS and WSL.
pub const CJK_FONT_CANDIDATES: [&str; 20] = [
    "/usr/share/fonts/truetype/wqy/wqy-microhei.ttc",
    "/usr/share/fonts/truetype/wqy/wqy-zenhei.ttc",
    "/usr/share/fonts/truetype/arphic/ukai.ttc",
    "/usr/share/fonts/truetype/arphic/uming.ttc",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/opentype/noto/NotoSansSC-Regular.otf",
    "/usr/local/share/fonts/NotoSansCJKsc-Regular.otf",
    "/Library/Fonts/Songti.ttc",
    "/Library/Fonts/STHeiti Light.ttc",
    "/System/Library/Fonts/STHeiti Light.ttc",
    "/System/Library/Fonts/PingFang.ttc",
    "/mnt/c/Windows/Fonts/msyh.ttc",
    "/mnt/c/Windows/Fonts/msyh.ttf",
    "/mnt/c/Windows/Fonts/msyhbd.ttc",
    "/mnt/c/Windows/Fonts/msyhbd.ttf",
    "/mnt/c/Windows/Fonts/msjh.ttc",
    "/mnt/c/Windows/Fonts/simhei.ttf",
    "/mnt/c/Windows/Fonts/simsun.ttc",
    "/mnt/c/Windows/Fonts/simkai.ttf",
    "/mnt/c/Windows/Fonts/simfang.ttf",
];

const FONT_EXTENSIONS: [&str; 3] = ["ttf", "otf", "ttc"];

/// Where a font may come from, in discovery order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FontSource {
    File(PathBuf),
    Family(String),
}

impl fmt::Display for FontSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontSource::File(p) => write!(f, "{}", p.display()),
            FontSource::Family(name) => write!(f, "family '{name}'"),
        }
    }
}

/// Candidate list: the user's choice (a file when it exists, otherwise a
/// family name), then the `fonts/` directory, then the fixed CJK paths.
pub fn candidates(font_arg: Option<&str>, fonts_dir: Option<&Path>) -> Vec<FontSource> {
    let mut out = Vec::new();
    if let Some(arg) = font_arg.map(str::trim).filter(|a| !a.is_empty()) {
        let path = PathBuf::from(arg);
        if path.is_file() {
            out.push(FontSource::File(path));
        } else {
            out.push(FontSource::Family(arg.to_string()));
        }
    }
    if let Some(dir) = fonts_dir {
        out.extend(bundled_fonts(dir).into_iter().map(FontSource::File));
    }
    out.extend(
        CJK_FONT_CANDIDATES
            .iter()
            .map(PathBuf::from)
            .filter(|p| p.is_file())
            .map(FontSource::File),
    );
    out
}

/// Font files in `dir`, grouped by extension (ttf, otf, ttc) and sorted by name.
fn bundled_fonts(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(dir) else { return Vec::new() };
    let files: Vec<PathBuf> = entries.filter_map(|e| e.ok()).map(|e| e.path()).filter(|p| p.is_file()).collect();
    let mut out = Vec::new();
    for ext in FONT_EXTENSIONS {
        let mut group: Vec<PathBuf> = files
            .iter()
            .filter(|p| p.extension().and_then(|e| e.to_str()).is_some_and(|e| e.eq_ignore_ascii_case(ext)))
            .cloned()
            .collect();
        group.sort();
        out.extend(group);
    }
    out
}

/// `fonts/` next to the running executable.
pub fn default_fonts_dir() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    Some(exe.parent()?.join("fonts"))
}

/// A typeface that loaded successfully, with where it came from.
#[derive(Clone)]
pub struct LoadedFont {
    pub typeface: skia::Typeface,
    pub source: FontSource,
}

impl fmt::Debug for LoadedFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadedFont")
            .field("family", &self.typeface.family_name())
            .field("source", &self.source)
            .finish()
    }
}

fn load(mgr: &skia::FontMgr, source: &FontSource) -> Option<skia::Typeface> {
    match source {
        FontSource::File(path) => match fs::read(path) {
            Ok(bytes) => mgr.new_from_data(&bytes, None::<usize>),
            Err(e) => {
                debug!(path = %path.display(), error = %e, "font unreadable");
                None
            }
        },
        FontSource::Family(name) => mgr.match_family_style(name, skia::FontStyle::normal()),
    }
}

/// Text capability for one run: either a loaded font that can draw the item
/// names as-is, or ASCII fallback with default system fonts.
#[derive(Clone, Debug, Default)]
pub enum FontMode {
    Capable(LoadedFont),
    #[default]
    AsciiFallback,
}

impl FontMode {
    /// Try every candidate in order; the first that loads as a typeface wins.
    pub fn resolve(font_arg: Option<&str>) -> Self {
        Self::resolve_from(&candidates(font_arg, default_fonts_dir().as_deref()))
    }

    pub fn resolve_from(sources: &[FontSource]) -> Self {
        let mgr = skia::FontMgr::default();
        for source in sources {
            if let Some(typeface) = load(&mgr, source) {
                info!(font = %source, family = %typeface.family_name(), "using font");
                return FontMode::Capable(LoadedFont { typeface, source: source.clone() });
            }
        }
        warn!("no CJK-capable font found; non-ASCII text falls back to code points");
        FontMode::AsciiFallback
    }

    pub fn is_capable(&self) -> bool {
        matches!(self, FontMode::Capable(_))
    }

    pub fn typeface(&self) -> Option<&skia::Typeface> {
        match self {
            FontMode::Capable(font) => Some(&font.typeface),
            FontMode::AsciiFallback => None,
        }
    }

    /// Text as it will be drawn under this mode.
    pub fn prepare<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if self.is_capable() || text.is_ascii() {
            Cow::Borrowed(text)
        } else {
            Cow::Owned(ascii_fallback(text))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_mode_escapes_text() {
        let mode = FontMode::AsciiFallback;
        assert!(!mode.is_capable());
        assert_eq!(mode.prepare("Week start (Mon)"), "Week start (Mon)");
        assert_eq!(mode.prepare("钢盔"), "U+94A2 U+76D4");
    }

    #[test]
    fn missing_path_is_treated_as_family() {
        let c = candidates(Some("Definitely Not A File.ttf"), None);
        assert_eq!(c[0], FontSource::Family("Definitely Not A File.ttf".into()));
    }

    #[test]
    fn user_file_then_bundled_fonts_in_order() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.otf", "a.otf", "z.ttf", "notes.txt", "c.TTC"] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }
        let user = dir.path().join("z.ttf");
        let c = candidates(user.to_str(), Some(dir.path()));
        let files: Vec<String> = c
            .iter()
            .take(5)
            .map(|s| match s {
                FontSource::File(p) => p.file_name().unwrap().to_string_lossy().into_owned(),
                FontSource::Family(f) => f.clone(),
            })
            .collect();
        assert_eq!(files, vec!["z.ttf", "z.ttf", "a.otf", "b.otf", "c.TTC"]);
    }

    #[test]
    fn garbage_font_files_do_not_load() {
        let dir = tempfile::tempdir().unwrap();
        let bogus = dir.path().join("bogus.ttf");
        fs::write(&bogus, b"not a font").unwrap();
        let mode = FontMode::resolve_from(&[FontSource::File(bogus)]);
        assert!(!mode.is_capable());
    }
}
