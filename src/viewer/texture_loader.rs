use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use exif::{In, Reader, Tag, Value};
use rand::seq::SliceRandom;
use raylib::prelude::*;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no image files found in {0}")]
    NoImages(PathBuf),
    #[error("failed to decode {path}: {reason}")]
    Decode { path: PathBuf, reason: String },
}

const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_lowercase()
}

/// Image files in `dir`, sorted by file name or shuffled.
pub fn load_image_paths(dir: &Path, shuffle: bool) -> Result<Vec<PathBuf>, LoadError> {
    let io_error = |source| LoadError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_error)? {
        let path = entry.map_err(io_error)?.path();
        if path.is_file() && IMAGE_EXTENSIONS.contains(&extension_of(&path).as_str()) {
            paths.push(path);
        }
    }

    if paths.is_empty() {
        return Err(LoadError::NoImages(dir.to_path_buf()));
    }

    if shuffle {
        paths.shuffle(&mut rand::rng());
    } else {
        paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    }
    Ok(paths)
}

fn decode_error<E: std::fmt::Display>(path: &Path) -> impl FnOnce(E) -> LoadError + '_ {
    move |e| LoadError::Decode {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
}

/// EXIF orientation of a JPEG, 1 (upright) when absent or unreadable.
fn exif_orientation(path: &Path, bytes: &[u8]) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(bytes)) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| match &field.value {
                Value::Short(values) => values.first().copied(),
                _ => None,
            })
            .unwrap_or(1),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not read EXIF data");
            1
        }
    }
}

pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    path: &Path,
) -> Result<Texture2D, LoadError> {
    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let extension = extension_of(path);
    let orientation = if extension == "jpg" || extension == "jpeg" {
        exif_orientation(path, &bytes)
    } else {
        1
    };

    let mut image = Image::load_image_from_mem(&format!(".{extension}"), &bytes)
        .map_err(decode_error(path))?;

    // 3 = 180 deg, 6 = 90 deg CW, 8 = 90 deg CCW; mirrored orientations are left as is
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }
    debug!(path = %path.display(), orientation, "image decoded");

    rl.load_texture_from_image(thread, &image).map_err(decode_error(path))
}
