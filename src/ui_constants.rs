// Shared UI constants so layout numbers aren't scattered across views.

/// Default card width in logical pixels.
pub const CARD_WIDTH: f32 = 320.0;

/// Gap between cards in the grid.
pub const CARD_GAP: f32 = 16.0;

/// Maximum content width of the article screen.
pub const ARTICLE_MAX_WIDTH: f32 = 760.0;

/// UI spacing constants.
pub mod spacing {
    pub const SMALL: f32 = 4.0;
    pub const MEDIUM: f32 = 8.0;
    pub const LARGE: f32 = 16.0;
    pub const XLARGE: f32 = 24.0;
}

/// Card-specific layout constants.
pub mod card {
    /// Inner margin of the card frame (symmetric).
    pub const INNER_MARGIN: f32 = 8.0;

    /// Border radius of card corners.
    pub const ROUNDING: f32 = 8.0;

    /// Space after the cover image.
    pub const POST_COVER_GAP: f32 = 12.0;

    /// Tag chip rounding.
    pub const CHIP_ROUNDING: f32 = 10.0;
}
