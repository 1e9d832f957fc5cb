pub mod cases;
pub mod init;
pub mod log_submit;
pub mod show;
pub mod walk;
