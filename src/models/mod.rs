//! Data models for the lending client

pub mod book;
pub mod borrow;
pub mod confirm;
pub mod datetime;
pub mod page;
pub mod portal;
pub mod session;
pub mod toast;
pub mod user;

// Re-export commonly used types
pub use book::{AdminBook, Book};
pub use borrow::{AdminBorrowRecord, BorrowedBook};
pub use confirm::{ConfirmOptions, ConfirmRequest, ConfirmVariant};
pub use page::PageResult;
pub use portal::{CarouselItem, PortalPostDetail, PortalPostListItem};
pub use session::{Profile, Scope, Session, SessionExpired};
pub use toast::{ToastItem, ToastKind};
pub use user::{Credentials, LoginResponse, UserProfile};
