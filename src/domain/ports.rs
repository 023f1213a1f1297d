use crate::utils::error::Result;
use serde::de::DeserializeOwned;

pub trait DataSource: Send + Sync {
    fn fetch<T: DeserializeOwned + Send>(
        &self,
        path: &str,
    ) -> impl std::future::Future<Output = Result<T>> + Send;
}

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> Option<&str>;
    fn site_root(&self) -> &str;
    fn output_path(&self) -> &str;
}
