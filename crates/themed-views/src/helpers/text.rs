//! String helpers: slugs, excerpts and path normalisation.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

static NON_LETTER_OR_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\d]+").expect("valid regex"));
static NON_SLUG_CHAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^-\w]+").expect("valid regex"));
static HTML_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));
static LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\r\n|[\n\x0B\x0C\r\x{85}\x{2028}\x{2029}]").expect("valid regex")
});
static REPEATED_SLASH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/+").expect("valid regex"));

/// URL slug: ASCII, lowercase, dash separated. Returns `n-a` when nothing survives.
pub fn slugify(text: &str) -> String {
    let dashed = NON_LETTER_OR_DIGIT.replace_all(text, "-");
    let trimmed = dashed.trim_matches('-');

    // Decompose and drop what has no ASCII form (accents become bare letters).
    let ascii: String = trimmed.nfkd().filter(char::is_ascii).collect();
    let lower = ascii.to_lowercase();
    let slug = NON_SLUG_CHAR.replace_all(&lower, "").into_owned();

    if slug.is_empty() {
        "n-a".to_string()
    } else {
        slug
    }
}

/// First paragraph of `text` with tags stripped, optionally cut to
/// `max_word` words and then at the first space at or after `max_character`.
///
/// A zero limit disables that cut. When no space follows `max_character` the
/// text is kept whole.
pub fn excerpt(text: &str, max_word: usize, max_character: usize) -> String {
    let stripped = HTML_TAG.replace_all(text, "");
    let mut out = LINE_BREAK
        .split(&stripped)
        .next()
        .unwrap_or_default()
        .to_string();

    if max_word > 0 {
        out = out.split(' ').take(max_word).collect::<Vec<_>>().join(" ");
    }

    if max_character > 0 {
        let cut = out
            .char_indices()
            .skip(max_character)
            .find(|(_, c)| *c == ' ')
            .map(|(idx, _)| idx);
        if let Some(idx) = cut {
            out.truncate(idx);
        }
    }

    out
}

/// Forward slashes only, no repeated separators.
pub fn normalize_path(path: &str) -> String {
    let forward = path.replace('\\', "/");
    REPEATED_SLASH.replace_all(&forward, "/").into_owned()
}
