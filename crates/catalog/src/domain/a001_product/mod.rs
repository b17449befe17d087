pub mod cms_api_client;
pub mod details;
pub mod list;
