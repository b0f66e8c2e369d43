/// User interface module
///
/// - `card.rs` - the meme card, navigation arrows and progress dots
/// - `chrome.rs` - header, footer, genre chips, upload placeholder, notices
/// - `stage.rs` - clipped stage that slides cards sideways
/// - `style.rs` - colour palette and widget styles

pub mod card;
pub mod chrome;
pub mod stage;
pub mod style;
