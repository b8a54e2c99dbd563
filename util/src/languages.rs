/// Source languages the feedback prompt knows how to describe.
///
/// The language is picked from the submission suffix and only affects
/// wording: the name shown to the model and the code fence tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    C,
    Cpp,
    Java,
    Python,
    Rust,
    Go,
    JavaScript,
    CSharp,
    Haskell,
    /// Anything else; the prompt falls back to "source" and an untagged fence.
    Other,
}

impl Language {
    /// Picks the language for a filename suffix such as `.c` or `c`.
    pub fn from_suffix(suffix: &str) -> Self {
        let ext = suffix.trim_start_matches('.').to_ascii_lowercase();
        match ext.as_str() {
            "c" | "h"                        => Language::C,
            "cpp" | "cc" | "cxx" | "hpp"     => Language::Cpp,
            "java"                           => Language::Java,
            "py"                             => Language::Python,
            "rs"                             => Language::Rust,
            "go"                             => Language::Go,
            "js" | "mjs"                     => Language::JavaScript,
            "cs"                             => Language::CSharp,
            "hs"                             => Language::Haskell,
            _                                => Language::Other,
        }
    }

    /// Human-readable name used in prompts and console messages.
    pub fn display_name(self) -> &'static str {
        match self {
            Language::C          => "C",
            Language::Cpp        => "C++",
            Language::Java       => "Java",
            Language::Python     => "Python",
            Language::Rust       => "Rust",
            Language::Go         => "Go",
            Language::JavaScript => "JavaScript",
            Language::CSharp     => "C#",
            Language::Haskell    => "Haskell",
            Language::Other      => "source",
        }
    }

    /// Markdown code fence info string.
    pub fn fence_tag(self) -> &'static str {
        match self {
            Language::C          => "c",
            Language::Cpp        => "cpp",
            Language::Java       => "java",
            Language::Python     => "python",
            Language::Rust       => "rust",
            Language::Go         => "go",
            Language::JavaScript => "javascript",
            Language::CSharp     => "csharp",
            Language::Haskell    => "haskell",
            Language::Other      => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffix_with_or_without_dot() {
        assert_eq!(Language::from_suffix(".c"), Language::C);
        assert_eq!(Language::from_suffix("c"), Language::C);
        assert_eq!(Language::from_suffix(".CPP"), Language::Cpp);
        assert_eq!(Language::from_suffix(".py"), Language::Python);
    }

    #[test]
    fn unknown_suffix_falls_back() {
        let lang = Language::from_suffix(".zig");
        assert_eq!(lang, Language::Other);
        assert_eq!(lang.display_name(), "source");
        assert_eq!(lang.fence_tag(), "");
    }

    #[test]
    fn c_is_described_as_c() {
        assert_eq!(Language::C.display_name(), "C");
        assert_eq!(Language::C.fence_tag(), "c");
    }
}
