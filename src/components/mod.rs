//! The components module contains all shared components for our app.

mod icons;
mod page;
mod track_card;

pub use icons::*;
pub use page::*;
pub use track_card::*;
