pub mod config;
pub mod logging;

pub mod document;
pub mod fetch;
pub mod localize;
pub mod normalize;
pub mod rename;
pub mod scan;
pub mod storage;
pub mod url_model;
