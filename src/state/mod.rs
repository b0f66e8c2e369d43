/// State management module
///
/// This module handles all application state, including:
/// - The carousel controller and its interaction overlay (carousel.rs)
/// - Shared data structures (data.rs)
/// - Feed loading and validation (feed.rs)
/// - Genre chip selection (filter.rs)
/// - Status notices (notice.rs)
/// - Card slide animation (transition.rs)
/// - User settings (settings.rs)

pub mod carousel;
pub mod data;
pub mod feed;
pub mod filter;
pub mod notice;
pub mod settings;
pub mod transition;
