pub mod init;
pub mod links;
pub mod run;
pub mod sections;
