// Centralized magic numbers & default values
pub const DEFAULT_COUNT: &str = "1";
pub const DEFAULT_MAX_COUNT: u64 = 1000;
// Highest value --max-count accepts
pub const MAX_COUNT_LIMIT: u64 = 100_000;

// Page text and class names shared by the HTML page and the terminal form
pub const PAGE_TITLE: &str = "TIRED OF BORING LOREM IPSUM?";
pub const INPUT_LABEL: &str = "Paragraphs:";
pub const GENERATE_LABEL: &str = "GENERATE";
pub const ARTICLE_CLASS: &str = "lorem-ipsum__paragraphs";
pub const PARAGRAPH_CLASS: &str = "lorem-ipsum__paragraph";
