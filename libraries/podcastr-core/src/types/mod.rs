//! Episode domain types

mod episode;
mod ids;

pub use episode::Episode;
pub use ids::EpisodeId;
