pub mod content;
pub mod layout;
pub mod pages;

pub use pages::{render_page, AssetInventory, ExternalLinks, Flash, RenderContext};
