//! UI Components
//!
//! Gallery cards.

pub mod image_card;
pub mod update_card;

pub use image_card::ImageCard;
pub use update_card::UpdateCard;
