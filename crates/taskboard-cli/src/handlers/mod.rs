pub mod board;
pub mod comment;
pub mod group;
pub mod realtime;
pub mod task;
