pub mod assess;
pub mod init;
pub mod purge;
pub mod records;
pub mod validate;
