pub mod http;
pub mod view;
