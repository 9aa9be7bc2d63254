mod app_info;
mod chat_message;
mod endpoint;
mod query_request;
mod upload_request;

pub use app_info::*;
pub use chat_message::*;
pub use endpoint::*;
pub use query_request::*;
pub use upload_request::*;
