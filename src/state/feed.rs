/// Meme feed loading
///
/// The feed is the ordered list of memes the carousel walks through.
/// It either comes from the built-in samples or from a JSON file:
///
/// ```json
/// [
///   { "id": 1, "title": "...", "caption": "...", "imageUrl": "...",
///     "genre": "tech", "likes": 42, "saves": 10 }
/// ]
/// ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::data::{Genre, Meme};

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("failed to read feed {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed feed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("feed contains no memes")]
    Empty,
    #[error("duplicate meme id {0}")]
    DuplicateId(u64),
}

/// Built-in sample memes, shown when no feed file is configured
pub fn sample_feed() -> Vec<Meme> {
    vec![
        Meme {
            id: 1,
            title: String::from("Sample Meme 1"),
            caption: String::from("This is a funny meme about coding"),
            image_url: String::from(
                "https://via.placeholder.com/600x400/0b1020/00d4c9?text=Meme+1",
            ),
            genre: Genre::Tech,
            likes: 42,
            saves: 10,
        },
        Meme {
            id: 2,
            title: String::from("Sample Meme 2"),
            caption: String::from("Dark humor at its finest"),
            image_url: String::from(
                "https://via.placeholder.com/600x400/0b1020/ff4db6?text=Meme+2",
            ),
            genre: Genre::DarkHumor,
            likes: 156,
            saves: 45,
        },
    ]
}

/// Parse and validate a feed from JSON text
pub fn parse_feed(json: &str) -> Result<Vec<Meme>, FeedError> {
    let memes: Vec<Meme> = serde_json::from_str(json)?;
    validate(&memes)?;
    Ok(memes)
}

/// Read a feed file from disk
pub fn load_feed(path: &Path) -> Result<Vec<Meme>, FeedError> {
    let json = std::fs::read_to_string(path).map_err(|source| FeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let memes = parse_feed(&json)?;
    tracing::info!(count = memes.len(), path = %path.display(), "loaded meme feed");
    Ok(memes)
}

fn validate(memes: &[Meme]) -> Result<(), FeedError> {
    if memes.is_empty() {
        return Err(FeedError::Empty);
    }

    let mut seen = HashSet::with_capacity(memes.len());
    for meme in memes {
        if !seen.insert(meme.id) {
            return Err(FeedError::DuplicateId(meme.id));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_feed_is_valid() {
        let feed = sample_feed();
        assert_eq!(feed.len(), 2);
        assert!(validate(&feed).is_ok());
    }

    #[test]
    fn test_parse_feed() {
        let json = r#"[
            {"id": 9, "title": "A", "caption": "a", "imageUrl": "a.png", "genre": "pun", "likes": 1},
            {"id": 4, "title": "B", "caption": "b", "imageUrl": "b.png", "genre": "dark-humor"}
        ]"#;

        let feed = parse_feed(json).unwrap();
        assert_eq!(feed.len(), 2);
        assert_eq!(feed[0].id, 9);
        assert_eq!(feed[0].genre, Genre::Pun);
        assert_eq!(feed[1].genre, Genre::DarkHumor);
        assert_eq!(feed[1].likes, 0);
        assert_eq!(feed[1].saves, 0);
    }

    #[test]
    fn test_rejects_empty_feed() {
        assert!(matches!(parse_feed("[]"), Err(FeedError::Empty)));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let json = r#"[
            {"id": 1, "title": "A", "caption": "a", "imageUrl": "a.png", "genre": "tech"},
            {"id": 1, "title": "B", "caption": "b", "imageUrl": "b.png", "genre": "tech"}
        ]"#;
        assert!(matches!(parse_feed(json), Err(FeedError::DuplicateId(1))));
    }

    #[test]
    fn test_rejects_unknown_genre() {
        let json = r#"[{"id": 1, "title": "A", "caption": "a", "imageUrl": "a.png", "genre": "slapstick"}]"#;
        assert!(matches!(parse_feed(json), Err(FeedError::Parse(_))));
    }

    #[test]
    fn test_load_feed_from_file() {
        let path = std::env::temp_dir().join(format!("memeflow-feed-{}.json", std::process::id()));
        let json = serde_json::to_string(&sample_feed()).unwrap();
        std::fs::write(&path, json).unwrap();

        let feed = load_feed(&path).unwrap();
        assert_eq!(feed, sample_feed());

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::env::temp_dir().join("memeflow-feed-does-not-exist.json");
        assert!(matches!(load_feed(&path), Err(FeedError::Io { .. })));
    }
}
