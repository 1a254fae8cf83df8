// Utility functions

pub mod media;

pub use media::prefers_reduced_motion;
