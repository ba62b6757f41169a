use std::path::PathBuf;

use figlet_rs::FIGfont;
use today_logging::{today_debug, today_warn};

/// Turns a short text into multi-line ASCII art in a named style.
pub trait AsciiArt {
    fn render(&self, text: &str, style: &str) -> String;
}

/// FIGlet renderer. Styles are looked up as `<font_dir>/<style>.flf`; any
/// style that can't be loaded uses the bundled standard font.
pub struct FigletArt {
    font_dir: Option<PathBuf>,
    standard: Option<FIGfont>,
}

impl FigletArt {
    pub fn new(font_dir: Option<PathBuf>) -> Self {
        let standard = match FIGfont::standard() {
            Ok(font) => Some(font),
            Err(err) => {
                today_warn!("Bundled FIGlet font unavailable: {}", err);
                None
            }
        };
        Self { font_dir, standard }
    }

    fn load(&self, style: &str) -> Option<FIGfont> {
        let path = self.font_dir.as_ref()?.join(format!("{style}.flf"));
        match FIGfont::from_file(path.to_str()?) {
            Ok(font) => Some(font),
            Err(err) => {
                today_debug!("FIGlet font {:?} not loaded: {}", path, err);
                None
            }
        }
    }
}

impl AsciiArt for FigletArt {
    fn render(&self, text: &str, style: &str) -> String {
        let loaded = self.load(style);
        let Some(font) = loaded.as_ref().or(self.standard.as_ref()) else {
            return text.to_string();
        };
        match font.convert(text) {
            Some(figure) => figure.to_string(),
            None => text.to_string(),
        }
    }
}
