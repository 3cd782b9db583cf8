use std::path::{Path, PathBuf};

use flower_browser_application::{ApplicationError, Artwork, ArtworkLoader, ArtworkSource};
use flower_browser_domain::{detect_artwork_format, ArtworkFormat, ImageRef};
use image::{io::Reader as ImageReader, DynamicImage, ImageBuffer, Rgba};
use tracing::trace;

/// Loads flower artwork from an asset directory with the `image` crate.
///
/// A missing asset yields a square placeholder tinted from the image ref so
/// the browser stays usable without bundled images.
#[derive(Debug, Clone)]
pub struct ImageCrateArtworkLoader {
    asset_dir: PathBuf,
    max_edge: u32,
}

impl ImageCrateArtworkLoader {
    pub fn new(asset_dir: impl Into<PathBuf>, max_edge: u32) -> Self {
        Self {
            asset_dir: asset_dir.into(),
            max_edge: max_edge.max(1),
        }
    }

    pub fn asset_path(&self, image_ref: &ImageRef) -> PathBuf {
        self.asset_dir.join(image_ref.as_str())
    }
}

impl ArtworkLoader for ImageCrateArtworkLoader {
    fn load(&self, image_ref: &ImageRef) -> Result<Artwork, ApplicationError> {
        let path = self.asset_path(image_ref);
        if detect_artwork_format(&path) == ArtworkFormat::Unsupported {
            return Err(ApplicationError::Decode(format!(
                "unsupported artwork format: {:?}",
                path
            )));
        }

        if !path.is_file() {
            trace!(path = %path.display(), "artwork asset not found");
            return Ok(placeholder_artwork(image_ref, self.max_edge));
        }

        let image = decode_asset(&path)?;
        let image = fit_within(image, self.max_edge);
        let rgba = image.to_rgba8();

        Ok(Artwork {
            width: rgba.width(),
            height: rgba.height(),
            rgba: rgba.into_raw(),
            source: ArtworkSource::Asset(path),
        })
    }
}

fn decode_asset(path: &Path) -> Result<DynamicImage, ApplicationError> {
    ImageReader::open(path)
        .map_err(|error| ApplicationError::Io(error.to_string()))?
        .with_guessed_format()
        .map_err(|error| ApplicationError::Decode(error.to_string()))?
        .decode()
        .map_err(|error| ApplicationError::Decode(error.to_string()))
}

fn fit_within(image: DynamicImage, max_edge: u32) -> DynamicImage {
    if image.width() <= max_edge && image.height() <= max_edge {
        return image;
    }
    image.thumbnail(max_edge, max_edge)
}

fn placeholder_artwork(image_ref: &ImageRef, edge: u32) -> Artwork {
    let [r, g, b] = placeholder_color(image_ref);
    let buffer = ImageBuffer::from_fn(edge, edge, |_x, _y| Rgba([r, g, b, 255_u8]));
    Artwork {
        width: edge,
        height: edge,
        rgba: buffer.into_raw(),
        source: ArtworkSource::Placeholder,
    }
}

// FNV-1a over the ref, folded into a muted colour.
fn placeholder_color(image_ref: &ImageRef) -> [u8; 3] {
    let hash = image_ref
        .as_str()
        .bytes()
        .fold(0xcbf2_9ce4_8422_2325_u64, |acc, byte| {
            (acc ^ u64::from(byte)).wrapping_mul(0x0000_0100_0000_01b3)
        });
    let channel = |shift: u32| 64 + ((hash >> shift) & 0x7f) as u8;
    [channel(0), channel(16), channel(32)]
}
