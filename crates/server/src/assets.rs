use std::{fs, path::Path};

use site::AssetInventory;
use tracing::warn;

/// Read the stylesheet once at startup. A missing file is a warning,
/// not an error: pages render unstyled without it.
pub fn load_stylesheet(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(css) => Some(css),
        Err(error) => {
            warn!(
                path = %path.display(),
                %error,
                "stylesheet not loaded; pages will render unstyled"
            );
            None
        }
    }
}

/// Which image files actually exist in the assets directory. A missing
/// directory simply yields an empty inventory.
pub fn image_inventory(assets_dir: &Path) -> AssetInventory {
    let mut inventory = AssetInventory::default();
    let Ok(entries) = fs::read_dir(assets_dir) else {
        return inventory;
    };
    for entry in entries.flatten() {
        let is_file = entry.file_type().map(|kind| kind.is_file()).unwrap_or(false);
        if !is_file {
            continue;
        }
        if let Ok(name) = entry.file_name().into_string() {
            inventory.insert(name);
        }
    }
    inventory
}

/// Asset names are single path segments; anything that could escape the
/// assets directory is refused.
pub fn is_safe_asset_name(name: &str) -> bool {
    !name.is_empty() && !name.contains('/') && !name.contains('\\') && !name.contains("..")
}

pub fn content_type_for(name: &str) -> &'static str {
    let extension = name
        .rsplit('.')
        .next()
        .map(|ext| ext.to_ascii_lowercase());
    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("webp") => "image/webp",
        Some("css") => "text/css",
        Some("pdf") => "application/pdf",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refuses_path_escaping_names() {
        assert!(!is_safe_asset_name(""));
        assert!(!is_safe_asset_name("../secret"));
        assert!(!is_safe_asset_name("images/me.png"));
        assert!(!is_safe_asset_name("c:\\windows"));
        assert!(is_safe_asset_name("me.png"));
    }

    #[test]
    fn maps_known_extensions() {
        assert_eq!(content_type_for("me.png"), "image/png");
        assert_eq!(content_type_for("photo.JPG"), "image/jpeg");
        assert_eq!(content_type_for("unknown.bin"), "application/octet-stream");
        assert_eq!(content_type_for("noextension"), "application/octet-stream");
    }

    #[test]
    fn missing_assets_dir_yields_empty_inventory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let inventory = image_inventory(&dir.path().join("does-not-exist"));
        assert!(!inventory.contains("me.png"));
    }

    #[test]
    fn inventory_lists_files_only() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("me.png"), b"png").expect("write");
        fs::create_dir(dir.path().join("nested")).expect("mkdir");

        let inventory = image_inventory(dir.path());
        assert!(inventory.contains("me.png"));
        assert!(!inventory.contains("nested"));
    }

    #[test]
    fn missing_stylesheet_is_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(load_stylesheet(&dir.path().join("style.css")).is_none());

        fs::write(dir.path().join("style.css"), "body{}").expect("write");
        assert_eq!(
            load_stylesheet(&dir.path().join("style.css")).as_deref(),
            Some("body{}")
        );
    }
}
