/// Genre chip selection
use super::data::{Genre, Meme};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenreFilter {
    #[default]
    All,
    Only(Genre),
}

impl GenreFilter {
    /// All chips in display order: "All" first, then every genre
    pub fn chips() -> Vec<GenreFilter> {
        std::iter::once(GenreFilter::All)
            .chain(Genre::ALL.into_iter().map(GenreFilter::Only))
            .collect()
    }

    pub fn label(&self) -> String {
        match self {
            GenreFilter::All => String::from("All"),
            GenreFilter::Only(genre) => genre.label(),
        }
    }

    pub fn matches(&self, meme: &Meme) -> bool {
        match self {
            GenreFilter::All => true,
            GenreFilter::Only(genre) => meme.genre == *genre,
        }
    }

    /// Keep the matching memes, preserving feed order
    pub fn apply(&self, feed: &[Meme]) -> Vec<Meme> {
        feed.iter().filter(|meme| self.matches(meme)).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::feed::sample_feed;

    #[test]
    fn test_chip_order_and_labels() {
        let labels: Vec<String> = GenreFilter::chips().iter().map(|c| c.label()).collect();
        assert_eq!(
            labels,
            vec!["All", "Dark Humor", "Sarcastic", "Pun", "Metaphorical", "Tech"]
        );
    }

    #[test]
    fn test_apply() {
        let feed = sample_feed();

        assert_eq!(GenreFilter::All.apply(&feed), feed);

        let tech = GenreFilter::Only(Genre::Tech).apply(&feed);
        assert_eq!(tech.len(), 1);
        assert_eq!(tech[0].id, 1);

        assert!(GenreFilter::Only(Genre::Pun).apply(&feed).is_empty());
    }
}
