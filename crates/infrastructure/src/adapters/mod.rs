//! Port adapters backed by third-party I/O libraries.

mod reqwest_transport;

pub use reqwest_transport::ReqwestTransport;
