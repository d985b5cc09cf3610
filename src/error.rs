use thiserror::Error;

/// Errors from rendering the drawing into a bitmap
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Invalid export dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("Failed to encode exported image: {0}")]
    Encode(#[from] image::ImageError),
}

/// Errors from loading a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}
