mod player;
mod track;

pub use player::{LoopMode, Player};
pub use track::{Keyframe, KeyframeTrack};
