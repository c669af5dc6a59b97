//! Page storage and rendering
//!
//! A page is one plain-text file named after its title. `store` handles the
//! file I/O, `render` turns inline `[PageName]` references into hyperlinks.

pub mod render;
pub mod store;
