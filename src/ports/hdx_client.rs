//! HDX (Humanitarian Data Exchange) client port definition.

use std::io::Write;

use url::Url;

use crate::domain::AppError;

/// Port for HDX operations.
pub trait HdxClient {
    /// Resolve the download URL of a named resource within a dataset.
    fn resource_url(&self, dataset: &str, resource: &str) -> Result<Url, AppError>;

    /// Stream a resource into `destination`, returning the number of bytes written.
    fn download(&self, url: &Url, destination: &mut dyn Write) -> Result<u64, AppError>;
}

impl<T: HdxClient + ?Sized> HdxClient for Box<T> {
    fn resource_url(&self, dataset: &str, resource: &str) -> Result<Url, AppError> {
        (**self).resource_url(dataset, resource)
    }

    fn download(&self, url: &Url, destination: &mut dyn Write) -> Result<u64, AppError> {
        (**self).download(url, destination)
    }
}
