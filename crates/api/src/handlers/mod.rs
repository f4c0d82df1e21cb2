pub mod image;
pub mod measure;
pub mod meta;
pub mod pages;
pub mod proxy;
pub mod request;
pub mod submission;
