//! The page dialect: CSS selectors and heading labels the extractors drive
//! on. One place to touch when the site markup shifts.

/// Breadcrumb strip carrying the `Number <n>` marker.
pub const NAVIGATION_HEADER: &str = "div.navigation-header";

/// Page title; its direct text is the translation.
pub const TITLE: &str = "h1";

/// Headword glyph inside the title (also the reading glyph span in rows).
pub const TITLE_CHARACTER: &str = "h1 span.kanji_character";

/// Usefulness-rating region; stars are counted inside it.
pub const RATING_REGION: &str = "div.rating";

/// Component breakdown region; repeats the page title as a visual artifact.
pub const COMPONENTS_REGION: &str = "div.components";

/// Generic freeform description region, also the final mnemonic fallback.
pub const DESCRIPTION_REGION: &str = "div.description";

pub const HEADINGS: &str = "h2";
pub const ROWS: &str = "tr";
pub const CELLS: &str = "td";
pub const SPANS: &str = "span";
pub const ANCHORS: &str = "a";

/// Span carrying the core reading glyphs inside a row's first cell.
pub const READING_SPAN: &str = "span.kanji_character";

/// Class marking decoration (particle) spans around a reading.
pub const PARTICLE_CLASS: &str = "particles";

pub const ONYOMI_HEADING: &str = "Onyomi";
pub const KUNYOMI_HEADING: &str = "Kunyomi";
pub const JUKUGO_HEADING: &str = "Jukugo";

/// Mnemonic table labels, in fallback order.
pub const MNEMONIC_HEADINGS: &[&str] = &["Mnemonic"];
pub const ONYOMI_MNEMONIC_HEADINGS: &[&str] = &["Onyomi mnemonic", "Mnemonic"];

/// The usefulness marker counted for star ratings.
pub const STAR: char = '★';

/// Href fragment distinguishing kanji component links from radical ones.
pub const KANJI_HREF: &str = "/kanji/";
