pub mod platforms;
pub mod players;
