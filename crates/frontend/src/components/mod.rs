//! Reusable UI components.

mod loading;
mod token_badge;
mod user_protected;
mod video_card;

pub use loading::Loading;
pub use token_badge::{TokenBadge, format_tokens};
pub use user_protected::UserProtected;
pub use video_card::VideoCard;
