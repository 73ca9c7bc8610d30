pub mod pagination;
pub mod use_case;

pub use pagination::{Pagination, SearchQuery, SortDirection};
pub use use_case::{NotificationResult, NotificationUseCase, Query, UseCase};
