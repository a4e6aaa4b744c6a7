//! Language profiles — dispatch by file extension.
//!
//! Each profile names the Pygments lexer for the language and the comment
//! syntaxes the section parser should recognize. Unknown extensions fall
//! back to [`DEFAULT`]: plain text with `#` line comments.

use std::path::Path;

/// Comment syntaxes enabled for one language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommentStyles {
    /// `// ...`
    pub line_slash: bool,
    /// `# ...`
    pub line_hash: bool,
    /// `; ...`
    pub line_semicolon: bool,
    /// `/* ... */`
    pub block: bool,
}

impl CommentStyles {
    pub const SLASH: Self = Self::none().with_slash();
    pub const HASH: Self = Self::none().with_hash();
    pub const SEMICOLON: Self = Self::none().with_semicolon();
    pub const C_LIKE: Self = Self::none().with_slash().with_block();

    pub const fn none() -> Self {
        Self {
            line_slash: false,
            line_hash: false,
            line_semicolon: false,
            block: false,
        }
    }

    pub const fn with_slash(mut self) -> Self {
        self.line_slash = true;
        self
    }

    pub const fn with_hash(mut self) -> Self {
        self.line_hash = true;
        self
    }

    pub const fn with_semicolon(mut self) -> Self {
        self.line_semicolon = true;
        self
    }

    pub const fn with_block(mut self) -> Self {
        self.block = true;
        self
    }

    /// Markers of the enabled single-line styles, in scan order.
    pub fn line_markers(&self) -> impl Iterator<Item = &'static str> {
        [
            (self.line_slash, "//"),
            (self.line_hash, "#"),
            (self.line_semicolon, ";"),
        ]
        .into_iter()
        .filter_map(|(enabled, marker)| enabled.then_some(marker))
    }
}

/// What we know about the language of one source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// Lexer name understood by the highlighter.
    pub name: &'static str,
    pub styles: CommentStyles,
}

impl Language {
    const fn new(name: &'static str, styles: CommentStyles) -> Self {
        Self { name, styles }
    }
}

/// Profile used for any extension missing from [`LANGUAGES`].
pub const DEFAULT: Language = Language::new("text", CommentStyles::HASH);

/// Extension (without the dot) to profile.
static LANGUAGES: &[(&str, Language)] = &[
    ("as", Language::new("as3", CommentStyles::C_LIKE)),
    ("asm", Language::new("nasm", CommentStyles::SEMICOLON)),
    ("bash", Language::new("bash", CommentStyles::HASH)),
    ("c", Language::new("c", CommentStyles::C_LIKE)),
    ("cc", Language::new("cpp", CommentStyles::C_LIKE)),
    ("clj", Language::new("clojure", CommentStyles::SEMICOLON)),
    ("coffee", Language::new("coffee-script", CommentStyles::HASH)),
    ("conf", Language::new("text", CommentStyles::HASH)),
    ("cpp", Language::new("cpp", CommentStyles::C_LIKE)),
    ("css", Language::new("css", CommentStyles::none().with_block())),
    ("el", Language::new("emacs-lisp", CommentStyles::SEMICOLON)),
    ("go", Language::new("go", CommentStyles::C_LIKE)),
    ("h", Language::new("c", CommentStyles::C_LIKE)),
    ("hpp", Language::new("cpp", CommentStyles::C_LIKE)),
    ("ini", Language::new("ini", CommentStyles::SEMICOLON)),
    ("java", Language::new("java", CommentStyles::C_LIKE)),
    ("js", Language::new("javascript", CommentStyles::C_LIKE)),
    ("lisp", Language::new("common-lisp", CommentStyles::SEMICOLON)),
    ("m", Language::new("objective-c", CommentStyles::C_LIKE)),
    ("php", Language::new("php", CommentStyles::C_LIKE)),
    ("py", Language::new("python", CommentStyles::HASH)),
    ("rb", Language::new("ruby", CommentStyles::HASH)),
    ("rs", Language::new("rust", CommentStyles::C_LIKE)),
    ("sh", Language::new("bash", CommentStyles::HASH)),
];

/// Look up the profile for an extension, with or without its leading dot.
pub fn lookup(extension: &str) -> &'static Language {
    let ext = extension.strip_prefix('.').unwrap_or(extension);
    LANGUAGES
        .iter()
        .find(|(key, _)| *key == ext)
        .map(|(_, lang)| lang)
        .unwrap_or(&DEFAULT)
}

/// Profile for a file, by its extension.
pub fn for_path(path: &Path) -> &'static Language {
    path.extension()
        .and_then(|e| e.to_str())
        .map(lookup)
        .unwrap_or(&DEFAULT)
}

/// Whether the extension has its own profile (used when scanning directories).
pub fn is_known(extension: &str) -> bool {
    let ext = extension.strip_prefix('.').unwrap_or(extension);
    LANGUAGES.iter().any(|(key, _)| *key == ext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_known_extension() {
        let lang = lookup("js");
        assert_eq!(lang.name, "javascript");
        assert!(lang.styles.line_slash);
        assert!(lang.styles.block);
        assert!(!lang.styles.line_hash);
    }

    #[test]
    fn lookup_accepts_leading_dot() {
        assert_eq!(lookup(".py").name, "python");
    }

    #[test]
    fn lookup_miss_falls_back_to_default() {
        let lang = lookup("xyz");
        assert_eq!(*lang, DEFAULT);
        assert_eq!(lang.name, "text");
        assert_eq!(lang.styles, CommentStyles::HASH);
    }

    #[test]
    fn for_path_without_extension() {
        assert_eq!(*for_path(Path::new("Makefile")), DEFAULT);
        assert_eq!(for_path(Path::new("src/lib.rs")).name, "rust");
    }

    #[test]
    fn builtin_profiles_enable_one_line_style_at_most() {
        for (ext, lang) in LANGUAGES {
            assert!(
                lang.styles.line_markers().count() <= 1,
                "{} enables several line styles",
                ext
            );
        }
    }

    #[test]
    fn line_markers_in_scan_order() {
        let styles = CommentStyles::none().with_semicolon().with_slash();
        let markers: Vec<_> = styles.line_markers().collect();
        assert_eq!(markers, vec!["//", ";"]);
    }
}
