pub mod http;

#[cfg(any(test, feature = "api_mock"))]
pub mod mock;
