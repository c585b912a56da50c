// Domain layer: article records, the filtering core, the article repo
// contract and its filesystem implementation, and the like-service client.
// UI code lives in views/ and app/; nothing here touches egui.

use lazy_static::lazy_static;

pub mod article;
pub mod cover;
pub mod filter;
pub mod likes;
pub mod repo;

lazy_static! {
    /// Shared HTTP client for the like service and remote cover images.
    pub(crate) static ref CLIENT: reqwest::Client = reqwest::Client::builder()
        .user_agent(concat!("inkpost/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap();
}
