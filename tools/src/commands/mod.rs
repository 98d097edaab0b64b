pub mod probs;
pub mod unpack;
