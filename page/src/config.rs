/// Digits the page number is zero-padded to (`#025`)
pub const DEFAULT_NUMBER_WIDTH: usize = 3;

/// Knobs for assembling a detail page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageConfig {
    pub number_width: usize,
    /// Resolve the previous and next Pokemon for navigation
    pub include_neighbors: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            number_width: DEFAULT_NUMBER_WIDTH,
            include_neighbors: true,
        }
    }
}
