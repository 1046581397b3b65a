pub mod color;
pub mod mood;
pub mod palette;
pub mod params;
pub mod theme;

pub use color::{
    __path_handle_match, __path_handle_match_shade, __path_handle_oklch, __path_handle_quick_pick,
};
pub use color::{
    handle_match, handle_match_shade, handle_oklch, handle_quick_pick, MatchResponse,
    OklchResponse, OklchValue, QuickPickResponse, RgbValue,
};
pub use mood::{__path_handle_mood, __path_handle_mood_preview, __path_handle_moods};
pub use mood::{
    handle_mood, handle_mood_preview, handle_moods, MoodInfo, MoodPreviewResponse, MoodResponse,
};
pub use palette::{__path_handle_gray_pair, __path_handle_palette, __path_handle_palettes};
pub use palette::{
    handle_gray_pair, handle_palette, handle_palettes, GrayPairResponse, PaletteDetail,
    PaletteSummary,
};
pub use theme::{__path_handle_theme, handle_theme, ThemeResponse};
