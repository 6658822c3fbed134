pub mod book;
pub mod genre;

pub use book::{Book, NewBook};
pub use genre::Genre;
