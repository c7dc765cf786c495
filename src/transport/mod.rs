pub mod error;
pub mod interceptor;
pub mod request;
pub mod reqwest_transport;
pub mod response;
pub mod transport;
