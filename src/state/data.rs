/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the feed loader, the carousel and the UI layer.

use serde::{Deserialize, Serialize};

/// Meme genres, a closed set
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Genre {
    DarkHumor,
    Sarcastic,
    Pun,
    Metaphorical,
    Tech,
}

impl Genre {
    /// Every genre, in chip order
    pub const ALL: [Genre; 5] = [
        Genre::DarkHumor,
        Genre::Sarcastic,
        Genre::Pun,
        Genre::Metaphorical,
        Genre::Tech,
    ];

    /// Lowercase slug as it appears in feed files (e.g. "dark-humor")
    pub fn slug(&self) -> &'static str {
        match self {
            Genre::DarkHumor => "dark-humor",
            Genre::Sarcastic => "sarcastic",
            Genre::Pun => "pun",
            Genre::Metaphorical => "metaphorical",
            Genre::Tech => "tech",
        }
    }

    /// Human-readable label: slug words capitalised ("Dark Humor")
    pub fn label(&self) -> String {
        self.slug()
            .split('-')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Represents a single meme in the feed
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Meme {
    /// Unique, stable identifier (used in share links)
    pub id: u64,
    pub title: String,
    pub caption: String,
    /// Image reference: a URL or a local file path
    pub image_url: String,
    pub genre: Genre,
    /// Stored like counter, never touched by local interactions
    #[serde(default)]
    pub likes: u32,
    /// Stored save counter, never touched by local interactions
    #[serde(default)]
    pub saves: u32,
}

impl Meme {
    /// Local file backing the image reference, if it points at one
    ///
    /// Remote URLs return `None`: the browser never fetches over the network.
    pub fn local_image_path(&self) -> Option<std::path::PathBuf> {
        let reference = self.image_url.trim();
        if let Some(path) = reference.strip_prefix("file://") {
            return Some(path.into());
        }
        if reference.contains("://") || reference.is_empty() {
            return None;
        }
        Some(reference.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genre_labels() {
        assert_eq!(Genre::DarkHumor.label(), "Dark Humor");
        assert_eq!(Genre::Tech.label(), "Tech");
        assert_eq!(Genre::Metaphorical.slug(), "metaphorical");
    }

    #[test]
    fn test_genre_uses_slug_on_the_wire() {
        let json = serde_json::to_string(&Genre::DarkHumor).unwrap();
        assert_eq!(json, "\"dark-humor\"");
    }

    #[test]
    fn test_local_image_path() {
        let mut meme = Meme {
            id: 7,
            title: "t".into(),
            caption: "c".into(),
            image_url: "https://example.com/a.png".into(),
            genre: Genre::Pun,
            likes: 0,
            saves: 0,
        };
        assert_eq!(meme.local_image_path(), None);

        meme.image_url = "file:///tmp/a.png".into();
        assert_eq!(meme.local_image_path(), Some("/tmp/a.png".into()));

        meme.image_url = "memes/b.jpg".into();
        assert_eq!(meme.local_image_path(), Some("memes/b.jpg".into()));
    }
}
