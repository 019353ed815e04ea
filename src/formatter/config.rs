#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatterConfig {
    /// Surround `,` and `=` with spaces.
    pub separator_spacing: bool,
    pub line_ending: String,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            separator_spacing: true,
            line_ending: "\n".to_string(),
        }
    }
}
