// ABOUTME: Library module for the slideas converter.
// ABOUTME: Converts Slideas-dialect decks into Reveal.js-flavoured markdown.

// Reexport modules
pub mod cache;
pub mod config;
pub mod deck;
pub mod errors;
pub mod header;
pub mod images;
pub mod layout;
pub mod line;
pub mod meta;
pub mod notes;
pub mod page;
pub mod utils;
pub mod watch;

// Reexport common types and functions
pub use cache::cache_file;
pub use config::{Config, ConvertOptions};
pub use deck::{BatchReport, DeckConverter, Outcome, convert_file, convert_text};
pub use errors::{Result, SlideasError};
pub use images::clean_image_params;
pub use meta::Metadata;
pub use notes::extract_notes;
pub use page::{Page, process_page};
pub use watch::{WatchConfig, watch_decks};
