pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{ApiClient, Transport};

pub use connector::{MockTransport, RecordedRequest, ReqwestTransport};

pub use domain::{
    ApiError, AppInfo, BuildProfile, ChatMessage, ChatRole, EndpointConfig, HistoryEntry,
    QueryRequest, TransportError, UploadFile, UploadRequest,
};
