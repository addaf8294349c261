use crate::domain::entities::common::RelativePath;

/// Directory the resized icons are written to.
pub const ICON_DIR: &str = "src-tauri/icons";

/// One resize target derived from the source icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconTarget {
    pub file_name: &'static str,
    pub width: u32,
    pub height: u32,
}

impl IconTarget {
    const fn new(file_name: &'static str, width: u32, height: u32) -> Self {
        Self {
            file_name,
            width,
            height,
        }
    }

    /// Output path relative to the project root.
    pub fn path(&self) -> RelativePath {
        RelativePath::new(format!("{}/{}", ICON_DIR, self.file_name))
    }
}

/// Every icon produced per run. Resize targets are absolute.
pub static ICON_SIZES: [IconTarget; 4] = [
    IconTarget::new("32x32.png", 32, 32),
    IconTarget::new("128x128.png", 128, 128),
    IconTarget::new("128x128@2x.png", 256, 256),
    IconTarget::new("icon.png", 128, 128),
];
