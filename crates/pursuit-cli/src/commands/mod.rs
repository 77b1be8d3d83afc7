pub mod batch;
pub mod init;
pub mod solve;
