pub mod error;
pub mod router;
pub mod templates;
pub mod types;
pub mod handlers {
    pub mod health;
    pub mod pages;
    pub mod producer;
    pub mod qr;
    pub mod transactions;
}

pub use error::WebError;
pub use router::create_router;
pub use types::AppState;
