//! Image metadata needed to lay the overlay out at native aspect ratio.

use std::path::Path;

use crate::error::LabelResult;
use crate::input::ImageRect;

/// Natural pixel size of an image file, read from its header only.
pub fn natural_size(path: &Path) -> LabelResult<(u32, u32)> {
    let size = image::image_dimensions(path)?;
    tracing::debug!(width = size.0, height = size.1, "Read image size from {}", path.display());
    Ok(size)
}

/// Rendered image box for a file shown inside `container`.
pub fn fitted_rect(path: &Path, container: ImageRect) -> LabelResult<ImageRect> {
    Ok(ImageRect::fit_contain(natural_size(path)?, container))
}
