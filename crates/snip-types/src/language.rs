/// A recognition language, as both backends need to name it.
///
/// Tesseract takes the traineddata code (`-l eng`), Gemini takes the
/// human-readable name inside the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub name: &'static str,
    pub tesseract_code: &'static str,
}

pub const LANGUAGES: [Language; 10] = [
    Language { name: "English", tesseract_code: "eng" },
    Language { name: "Bangla", tesseract_code: "ben" },
    Language { name: "Hindi", tesseract_code: "hin" },
    Language { name: "Japanese", tesseract_code: "jpn" },
    Language { name: "Spanish", tesseract_code: "spa" },
    Language { name: "French", tesseract_code: "fra" },
    Language { name: "German", tesseract_code: "deu" },
    Language { name: "Chinese (Simplified)", tesseract_code: "chi_sim" },
    Language { name: "Russian", tesseract_code: "rus" },
    Language { name: "Arabic", tesseract_code: "ara" },
];

impl Language {
    pub fn by_code(code: &str) -> Option<&'static Language> {
        LANGUAGES.iter().find(|l| l.tesseract_code == code)
    }

    pub fn by_name(name: &str) -> Option<&'static Language> {
        LANGUAGES.iter().find(|l| l.name == name)
    }

    /// Fallback language when the configured code is unknown.
    pub fn default() -> &'static Language {
        &LANGUAGES[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_code_and_name_agree() {
        let by_code = Language::by_code("chi_sim").unwrap();
        let by_name = Language::by_name("Chinese (Simplified)").unwrap();
        assert_eq!(by_code, by_name);
    }

    #[test]
    fn unknown_code_falls_back_to_english() {
        assert!(Language::by_code("xyz").is_none());
        assert_eq!(Language::default().tesseract_code, "eng");
    }
}
