pub mod apply;
pub mod request;
