/// Synchronous supplier of one ordered record sequence. The grid paginates
/// client-side, so providers have no paging contract of their own.
pub trait DatasetProvider<R>: Send + Sync {
    fn fetch(&self) -> Vec<R>;
}
