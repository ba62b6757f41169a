use std::fmt;

/// The asynchronous data source behind a refresh controller.
///
/// Failures are values, not panics: the controller stores whatever `Error`
/// comes back in the request state.
#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    type Options: Clone + PartialEq + fmt::Debug + Send + Sync + 'static;
    type Output: Clone + Send + Sync + 'static;
    type Error: Clone + fmt::Display + Send + Sync + 'static;

    async fn fetch(&self, options: &Self::Options) -> Result<Self::Output, Self::Error>;
}
