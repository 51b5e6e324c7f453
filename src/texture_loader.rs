use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use exif::{In, Reader, Tag, Value};
use rand::seq::SliceRandom;
use raylib::prelude::*;
use tracing::{debug, warn};
use crate::error::SlideSourceError;

const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

fn lowercase_extension(path: &Path) -> String {
    path.extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase()
}

pub fn is_image_path(path: &Path) -> bool {
    IMAGE_EXTENSIONS.contains(&lowercase_extension(path).as_str())
}

// --- Helper: Load and Sort Image Paths ---
pub fn load_sorted_image_paths(dir_path: &Path) -> Result<Vec<PathBuf>, SlideSourceError> {
    let read_dir_error = |source| SlideSourceError::ReadDir { path: dir_path.to_path_buf(), source };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir_path).map_err(read_dir_error)? {
        let path = entry.map_err(read_dir_error)?.path();
        if path.is_file() && is_image_path(&path) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    if paths.is_empty() {
        return Err(SlideSourceError::NoImages(dir_path.to_path_buf()));
    }
    debug!("Found {} images in {:?}", paths.len(), dir_path);
    Ok(paths)
}

/// Reorders the slide set once, before any rotator sees it.
pub fn shuffle_paths(paths: &mut [PathBuf]) {
    paths.shuffle(&mut rand::rng());
}

/// EXIF orientation tag of a JPEG, if it carries one.
pub fn exif_orientation(file_bytes: &[u8]) -> Option<u16> {
    let exif = Reader::new()
        .read_from_container(&mut Cursor::new(file_bytes))
        .inspect_err(|e| debug!("No usable EXIF data: {}", e))
        .ok()?;
    let field = exif.get_field(Tag::Orientation, In::PRIMARY)?;
    match &field.value {
        Value::Short(values) => values.first().copied(),
        _ => None,
    }
}

// --- Load Image, Apply EXIF Rotation, Create Texture ---
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D, SlideSourceError> {
    let file_bytes = fs::read(image_path).map_err(|source| SlideSourceError::ReadFile {
        path: image_path.to_path_buf(),
        source,
    })?;

    let extension = lowercase_extension(image_path);
    let orientation = if extension == "jpg" || extension == "jpeg" {
        exif_orientation(&file_bytes).unwrap_or(1)
    } else {
        1
    };

    let mut image = Image::load_image_from_mem(&format!(".{}", extension), &file_bytes)
        .map_err(|e| SlideSourceError::Decode {
            path: image_path.to_path_buf(),
            reason: e.to_string(),
        })?;

    // 3 = 180 deg, 6 = 90 deg CW, 8 = 90 deg CCW. Flipped variants are left as is.
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        1 => {}
        other => warn!("Ignoring unsupported EXIF orientation {} for {:?}", other, image_path),
    }

    let texture = rl
        .load_texture_from_image(thread, &image)
        .map_err(|e| SlideSourceError::Texture {
            path: image_path.to_path_buf(),
            reason: e.to_string(),
        })?;

    // Unload the Image data from CPU memory
    drop(image);

    Ok(texture)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    #[test]
    fn recognises_image_extensions_case_insensitively() {
        assert!(is_image_path(Path::new("a/b/photo.JPG")));
        assert!(is_image_path(Path::new("banner.png")));
        assert!(!is_image_path(Path::new("notes.txt")));
        assert!(!is_image_path(Path::new("README")));
    }

    #[test]
    fn lists_only_images_sorted_by_name() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["c.jpg", "a.png", "b.gif", "notes.txt"] {
            File::create(dir.path().join(name)).unwrap();
        }
        fs::create_dir(dir.path().join("nested.png")).unwrap();

        let names: Vec<_> = load_sorted_image_paths(dir.path())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.png", "b.gif", "c.jpg"]);
    }

    #[test]
    fn empty_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("readme.md")).unwrap();
        assert!(matches!(
            load_sorted_image_paths(dir.path()),
            Err(SlideSourceError::NoImages(_))
        ));
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        assert!(matches!(
            load_sorted_image_paths(&missing),
            Err(SlideSourceError::ReadDir { .. })
        ));
    }

    #[test]
    fn shuffle_keeps_every_path() {
        let mut paths: Vec<PathBuf> = (0..20).map(|i| PathBuf::from(format!("{i:02}.png"))).collect();
        let mut expected = paths.clone();
        shuffle_paths(&mut paths);
        paths.sort();
        expected.sort();
        assert_eq!(paths, expected);
    }

    #[test]
    fn bytes_without_exif_have_no_orientation() {
        assert_eq!(exif_orientation(b"definitely not a jpeg"), None);
    }
}
