pub mod dump;
pub mod init;
pub mod view;
