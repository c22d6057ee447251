use std::io;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("network error fetching {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} from {url}")]
    Http {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("empty response body from {0}")]
    EmptyBody(String),

    #[error("texture fetch timed out after {0:?}")]
    Timeout(Duration),

    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("image decode failed: {0}")]
    Decode(#[from] image::ImageError),

    #[error("texture size {width}x{height} is unusable, device limit is {max}")]
    InvalidTextureSize { width: u32, height: u32, max: u32 },

    #[error(transparent)]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    #[error(transparent)]
    RequestAdapter(#[from] wgpu::RequestAdapterError),

    #[error(transparent)]
    RequestDevice(#[from] wgpu::RequestDeviceError),

    #[error("surface reports no supported {0}")]
    SurfaceUnsupported(&'static str),

    #[error(transparent)]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error(transparent)]
    Os(#[from] winit::error::OsError),
}

pub type Result<T> = std::result::Result<T, ViewerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_loop_failures_convert_with_question_mark() {
        fn create() -> Result<()> {
            Err::<(), _>(winit::error::EventLoopError::RecreationAttempt)?;
            Ok(())
        }
        assert!(matches!(create(), Err(ViewerError::EventLoop(_))));
    }

    #[test]
    fn size_error_names_the_limit() {
        let e = ViewerError::InvalidTextureSize {
            width: 20000,
            height: 100,
            max: 8192,
        };
        assert_eq!(e.to_string(), "texture size 20000x100 is unusable, device limit is 8192");
    }
}
