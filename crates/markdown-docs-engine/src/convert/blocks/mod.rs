//! # Block Classification
//!
//! Each block is classified on its own text into exactly one [`LineClass`].
//! The fence check always comes first; the remaining openers each need a
//! distinct literal prefix and are tried in a fixed order:
//! heading, blockquote, list item, horizontal rule, table row, paragraph.
//!
//! ## Modules
//!
//! - **`kinds`**: one type per block kind, owning its delimiter knowledge
//! - **`classify`**: `BlockClassifier` producing a `LineClass` per block

pub mod classify;
pub mod kinds;

pub use classify::{BlockClassifier, LineClass};
pub use kinds::{FenceSig, ListMarker};
