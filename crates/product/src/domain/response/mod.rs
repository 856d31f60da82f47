mod pagination;
mod product;

pub use self::pagination::{PageMetadata, PageResponse};
pub use self::product::ProductResponse;
