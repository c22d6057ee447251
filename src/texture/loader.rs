use std::path::{Path, PathBuf};
use std::time::Duration;

use image::imageops::FilterType;

use crate::error::{Result, ViewerError};

/// Where a wall texture comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextureSource {
    Url(String),
    File(PathBuf),
}

impl TextureSource {
    pub fn parse(source: &str) -> Self {
        let trimmed = source.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            TextureSource::Url(trimmed.to_string())
        } else {
            TextureSource::File(PathBuf::from(trimmed))
        }
    }
}

impl std::fmt::Display for TextureSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TextureSource::Url(url) => write!(f, "{url}"),
            TextureSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Decoded RGBA8 pixels
#[derive(Debug, Clone)]
pub struct TextureImage {
    pub rgba_data: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

pub enum TextureLoadResult {
    Success { wall_id: usize, image: TextureImage },
    Error { wall_id: usize, error: String },
}

/// Load texture from local file
pub async fn load_from_file(path: &Path) -> Result<Vec<u8>> {
    let data = tokio::fs::read(path).await?;
    Ok(data)
}

pub async fn download_texture(url: &str) -> Result<Vec<u8>> {
    let response = reqwest::get(url).await.map_err(|source| ViewerError::Network {
        url: url.to_string(),
        source,
    })?;

    if !response.status().is_success() {
        return Err(ViewerError::Http {
            status: response.status(),
            url: url.to_string(),
        });
    }

    let bytes = response.bytes().await.map_err(|source| ViewerError::Network {
        url: url.to_string(),
        source,
    })?;
    if bytes.is_empty() {
        return Err(ViewerError::EmptyBody(url.to_string()));
    }
    Ok(bytes.to_vec())
}

/// Decode any format the `image` crate recognizes into RGBA8. Images larger than
/// `max_dimension` on either side are shrunk to fit, keeping their aspect ratio.
pub fn decode_image(data: &[u8], max_dimension: u32) -> Result<TextureImage> {
    let mut img = image::load_from_memory(data)?;
    if img.width() > max_dimension || img.height() > max_dimension {
        log::debug!(
            "Downscaling {}x{} texture to fit {max_dimension}",
            img.width(),
            img.height()
        );
        img = img.resize(max_dimension, max_dimension, FilterType::Triangle);
    }
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(TextureImage {
        rgba_data: rgba.into_raw(),
        width,
        height,
    })
}

async fn fetch(source: &TextureSource) -> Result<Vec<u8>> {
    match source {
        TextureSource::Url(url) => download_texture(url).await,
        TextureSource::File(path) => load_from_file(path).await,
    }
}

/// Fetch and decode. Without a timeout a stalled fetch stays pending.
pub async fn load_texture(
    source: &TextureSource,
    timeout: Option<Duration>,
    max_dimension: u32,
) -> Result<TextureImage> {
    let data = match timeout {
        Some(limit) => tokio::time::timeout(limit, fetch(source))
            .await
            .map_err(|_| ViewerError::Timeout(limit))??,
        None => fetch(source).await?,
    };
    decode_image(&data, max_dimension)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_distinguishes_urls_from_paths() {
        assert_eq!(
            TextureSource::parse("https://example.com/wall.jpg"),
            TextureSource::Url("https://example.com/wall.jpg".to_string())
        );
        assert_eq!(
            TextureSource::parse("  HTTP://example.com/a.png "),
            TextureSource::Url("HTTP://example.com/a.png".to_string())
        );
        assert_eq!(
            TextureSource::parse("textures/brick.png"),
            TextureSource::File(PathBuf::from("textures/brick.png"))
        );
    }

    #[test]
    fn decode_rejects_garbage() {
        assert!(matches!(
            decode_image(b"definitely not an image", 1024),
            Err(ViewerError::Decode(_))
        ));
    }

    fn encode_png(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(width, height, image::Rgba([200, 100, 50, 255]));
        let mut out = std::io::Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn oversized_images_shrink_to_the_limit() {
        let img = decode_image(&encode_png(200, 10), 64).unwrap();
        assert_eq!(img.width, 64);
        assert!(img.height >= 1 && img.height <= 64, "height {}", img.height);
        assert_eq!(img.rgba_data.len(), (img.width * img.height * 4) as usize);

        let tall = decode_image(&encode_png(8, 100), 50).unwrap();
        assert_eq!(tall.height, 50);
        assert!(tall.width <= 50);
    }

    #[test]
    fn images_within_the_limit_keep_their_size() {
        let img = decode_image(&encode_png(64, 32), 64).unwrap();
        assert_eq!((img.width, img.height), (64, 32));
    }

    #[tokio::test]
    async fn loads_local_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wall.png");
        image::RgbaImage::from_pixel(3, 2, image::Rgba([10, 20, 30, 255]))
            .save(&path)
            .unwrap();

        let source = TextureSource::File(path);
        let img = load_texture(&source, Some(Duration::from_secs(5)), 1024)
            .await
            .unwrap();
        assert_eq!((img.width, img.height), (3, 2));
        assert_eq!(img.rgba_data.len(), 3 * 2 * 4);
        assert_eq!(&img.rgba_data[..4], &[10, 20, 30, 255]);
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = TextureSource::File(dir.path().join("nope.jpg"));
        assert!(matches!(
            load_texture(&source, None, 1024).await,
            Err(ViewerError::Io(_))
        ));
    }
}
