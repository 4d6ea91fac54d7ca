pub mod distance;
pub mod estimate;
pub mod feed;
pub mod scoring;
pub mod simulate;
