/// Carousel controller
///
/// Owns the position inside an ordered list of memes together with the
/// ephemeral like/dislike/save overlay for the meme on screen. Every
/// operation keeps `index < len` and never lets liked and disliked be
/// set at the same time.

use iced::keyboard::{key::Named, Key};

use super::data::Meme;

/// Last navigation direction, consumed by the slide animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Forward,
    Backward,
    #[default]
    None,
}

/// Per-meme interaction overlay
///
/// Purely local UI state: it is cleared on every navigation and never
/// written back to the meme's stored counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Interactions {
    pub liked: bool,
    pub disliked: bool,
    pub saved: bool,
}

#[derive(Debug, Clone)]
pub struct Carousel {
    items: Vec<Meme>,
    index: usize,
    direction: Direction,
    interactions: Interactions,
}

impl Carousel {
    /// Create a carousel positioned on the first meme
    ///
    /// Returns `None` for an empty list, there is nothing to navigate.
    pub fn new(items: Vec<Meme>) -> Option<Self> {
        if items.is_empty() {
            return None;
        }

        Some(Self {
            items,
            index: 0,
            direction: Direction::None,
            interactions: Interactions::default(),
        })
    }

    pub fn current(&self) -> &Meme {
        &self.items[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub fn items(&self) -> &[Meme] {
        &self.items
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn interactions(&self) -> Interactions {
        self.interactions
    }

    pub fn can_go_previous(&self) -> bool {
        self.index > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.index + 1 < self.items.len()
    }

    /// Step back one meme. No-op on the first meme.
    pub fn go_previous(&mut self) -> bool {
        if !self.can_go_previous() {
            return false;
        }

        self.direction = Direction::Backward;
        self.index -= 1;
        self.interactions = Interactions::default();
        true
    }

    /// Step forward one meme. No-op on the last meme.
    pub fn go_next(&mut self) -> bool {
        if !self.can_go_next() {
            return false;
        }

        self.direction = Direction::Forward;
        self.index += 1;
        self.interactions = Interactions::default();
        true
    }

    pub fn toggle_like(&mut self) {
        self.interactions.liked = !self.interactions.liked;
        if self.interactions.liked {
            self.interactions.disliked = false;
        }
    }

    pub fn toggle_dislike(&mut self) {
        self.interactions.disliked = !self.interactions.disliked;
        if self.interactions.disliked {
            self.interactions.liked = false;
        }
    }

    pub fn toggle_save(&mut self) {
        self.interactions.saved = !self.interactions.saved;
    }

    /// Shareable link for the current meme: `<origin>/meme/<id>`
    pub fn share_link(&self, origin: &str) -> String {
        format!("{}/meme/{}", origin.trim_end_matches('/'), self.current().id)
    }

    /// Arrow keys navigate, everything else is ignored.
    /// Returns `true` if the carousel moved.
    pub fn handle_key(&mut self, key: &Key) -> bool {
        match key {
            Key::Named(Named::ArrowLeft) => self.go_previous(),
            Key::Named(Named::ArrowRight) => self.go_next(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::Genre;

    fn meme(id: u64) -> Meme {
        Meme {
            id,
            title: format!("Meme {}", id),
            caption: String::from("caption"),
            image_url: format!("https://example.com/{}.png", id),
            genre: Genre::Tech,
            likes: 3,
            saves: 1,
        }
    }

    fn carousel(len: u64) -> Carousel {
        Carousel::new((1..=len).map(meme).collect()).unwrap()
    }

    fn assert_in_bounds(carousel: &Carousel) {
        assert!(carousel.index() < carousel.len());
    }

    #[test]
    fn test_empty_list_has_no_carousel() {
        assert!(Carousel::new(Vec::new()).is_none());
    }

    #[test]
    fn test_starts_at_first_item() {
        let c = carousel(3);
        assert_eq!(c.index(), 0);
        assert_eq!(c.direction(), Direction::None);
        assert_eq!(c.interactions(), Interactions::default());
        assert_eq!(c.current().id, 1);
    }

    #[test]
    fn test_previous_at_start_is_noop() {
        let mut c = carousel(2);
        c.toggle_save();
        let before = (c.index(), c.direction(), c.interactions());

        assert!(!c.go_previous());
        assert_eq!((c.index(), c.direction(), c.interactions()), before);
    }

    #[test]
    fn test_next_at_end_is_noop() {
        let mut c = carousel(2);
        assert!(c.go_next());
        c.toggle_like();
        let before = (c.index(), c.direction(), c.interactions());

        assert!(!c.go_next());
        assert_eq!((c.index(), c.direction(), c.interactions()), before);
    }

    #[test]
    fn test_navigation_resets_overlay() {
        let mut c = carousel(3);
        c.toggle_like();
        c.toggle_save();
        assert!(c.go_next());
        assert_eq!(c.interactions(), Interactions::default());

        c.toggle_dislike();
        assert!(c.go_previous());
        assert_eq!(c.interactions(), Interactions::default());
    }

    #[test]
    fn test_like_then_dislike() {
        let mut c = carousel(1);
        c.toggle_like();
        c.toggle_dislike();
        let state = c.interactions();
        assert!(!state.liked);
        assert!(state.disliked);

        c.toggle_like();
        let state = c.interactions();
        assert!(state.liked);
        assert!(!state.disliked);
    }

    #[test]
    fn test_like_and_dislike_never_both_set() {
        let mut c = carousel(1);
        // Walk every toggle sequence of length 6
        for mask in 0u32..(3u32.pow(6)) {
            let mut m = mask;
            for _ in 0..6 {
                match m % 3 {
                    0 => c.toggle_like(),
                    1 => c.toggle_dislike(),
                    _ => c.toggle_save(),
                }
                m /= 3;
                let state = c.interactions();
                assert!(!(state.liked && state.disliked));
            }
        }
    }

    #[test]
    fn test_toggle_like_leaves_stored_count() {
        let mut c = carousel(1);
        c.toggle_like();
        assert_eq!(c.current().likes, 3);
    }

    #[test]
    fn test_save_twice_restores() {
        let mut c = carousel(1);
        c.toggle_like();
        c.toggle_save();
        c.toggle_save();
        assert!(!c.interactions().saved);
        assert!(c.interactions().liked);
    }

    #[test]
    fn test_two_item_scenario() {
        let mut c = carousel(2);

        assert!(c.go_next());
        assert_eq!(c.index(), 1);
        assert_eq!(c.direction(), Direction::Forward);
        assert_eq!(c.interactions(), Interactions::default());

        c.toggle_like();
        assert!(c.interactions().liked);

        assert!(c.go_previous());
        assert_eq!(c.index(), 0);
        assert_eq!(c.direction(), Direction::Backward);
        assert!(!c.interactions().liked);
        assert_in_bounds(&c);
    }

    #[test]
    fn test_single_item_navigation_is_noop() {
        let mut c = carousel(1);
        assert!(!c.go_next());
        assert!(!c.go_previous());
        assert!(!c.handle_key(&Key::Named(Named::ArrowRight)));
        assert!(!c.handle_key(&Key::Named(Named::ArrowLeft)));
        assert_eq!(c.index(), 0);
        assert_eq!(c.direction(), Direction::None);
        assert!(!c.can_go_next());
        assert!(!c.can_go_previous());
    }

    #[test]
    fn test_handle_key() {
        let mut c = carousel(3);
        assert!(c.handle_key(&Key::Named(Named::ArrowRight)));
        assert!(c.handle_key(&Key::Named(Named::ArrowRight)));
        assert_eq!(c.index(), 2);

        assert!(!c.handle_key(&Key::Named(Named::ArrowUp)));
        assert!(!c.handle_key(&Key::Character("l".into())));
        assert_eq!(c.index(), 2);

        assert!(c.handle_key(&Key::Named(Named::ArrowLeft)));
        assert_eq!(c.index(), 1);
        assert_in_bounds(&c);
    }

    #[test]
    fn test_bounds_hold_under_random_walk() {
        let mut c = carousel(4);
        let steps = [true, true, false, true, true, true, false, false, false, false, true];
        for forward in steps {
            if forward {
                c.go_next();
            } else {
                c.go_previous();
            }
            assert_in_bounds(&c);
        }
    }

    #[test]
    fn test_share_link() {
        let mut c = carousel(2);
        assert_eq!(c.share_link("http://localhost:3000"), "http://localhost:3000/meme/1");
        c.go_next();
        assert_eq!(c.share_link("https://memes.example/"), "https://memes.example/meme/2");
    }
}
