pub mod author;
pub mod playlist;
pub mod track;
pub mod user;
