use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver};
use std::thread;

use anyhow::{Context, Result};

use super::model::{Band, BandCatalog};
use crate::error::SpectraError;

// ---------------------------------------------------------------------------
// Spectral text files
// ---------------------------------------------------------------------------

/// Read one input file as UTF-8 text.
pub fn read_as_text(path: &Path) -> Result<String, SpectraError> {
    std::fs::read_to_string(path).map_err(|source| SpectraError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Read the wavelength file and the reflectance file concurrently and join.
///
/// Both reads always run to completion; if either failed the pair is
/// rejected as a whole (the wavelength error wins when both fail).
pub fn read_pair(paths: &[PathBuf; 2]) -> Result<[String; 2], SpectraError> {
    let (wavelengths, reflectances) = thread::scope(|s| {
        let wl = s.spawn(|| read_as_text(&paths[0]));
        let refl = s.spawn(|| read_as_text(&paths[1]));
        (join_read(wl, &paths[0]), join_read(refl, &paths[1]))
    });
    Ok([wavelengths?, reflectances?])
}

fn join_read(
    handle: thread::ScopedJoinHandle<'_, Result<String, SpectraError>>,
    path: &Path,
) -> Result<String, SpectraError> {
    handle.join().unwrap_or_else(|_| {
        Err(SpectraError::Read {
            path: path.to_path_buf(),
            source: std::io::Error::other("reader thread panicked"),
        })
    })
}

/// Run [`read_pair`] off the UI thread. The receiver yields exactly one
/// message. There is no way to cancel a read once started.
pub fn spawn_pair_read(paths: [PathBuf; 2]) -> Receiver<Result<[String; 2], SpectraError>> {
    let (tx, rx) = channel();
    thread::spawn(move || {
        // The receiver is gone only if the app shut down.
        let _ = tx.send(read_pair(&paths));
    });
    rx
}

// ---------------------------------------------------------------------------
// Band file
// ---------------------------------------------------------------------------

/// Expected JSON schema, keyed by dataset:
///
/// ```json
/// {
///   "landsat9": [
///     { "band": "B1 - Coastal aerosol", "wavelength_start": 0.43, "wavelength_end": 0.45 },
///     ...
///   ]
/// }
/// ```
pub fn load_band_catalog(path: &Path) -> Result<BandCatalog> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading band file {}", path.display()))?;
    BandCatalog::from_json(&text).with_context(|| format!("parsing band file {}", path.display()))
}

/// Result of a background band load: the dataset's bands plus every dataset
/// key the file offers.
#[derive(Debug, Clone)]
pub struct BandLoad {
    pub dataset: String,
    pub bands: Vec<Band>,
    pub available: Vec<String>,
}

/// Re-read the band file and pick `dataset` out of it, off the UI thread.
pub fn spawn_band_load(path: PathBuf, dataset: String) -> Receiver<Result<BandLoad>> {
    let (tx, rx) = channel();
    thread::spawn(move || {
        let result = load_band_catalog(&path).map(|catalog| BandLoad {
            bands: catalog.bands_for(&dataset),
            available: catalog.dataset_names(),
            dataset,
        });
        let _ = tx.send(result);
    });
    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_with(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_read_pair_keeps_order() {
        let wl = temp_with("1.0\n1.1\n");
        let refl = temp_with("0.3\n0.7\n");
        let [a, b] = read_pair(&[wl.path().to_path_buf(), refl.path().to_path_buf()]).unwrap();
        assert_eq!(a, "1.0\n1.1\n");
        assert_eq!(b, "0.3\n0.7\n");
    }

    #[test]
    fn test_read_pair_fails_if_either_fails() {
        let wl = temp_with("1.0\n");
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");

        let err = read_pair(&[wl.path().to_path_buf(), missing.clone()]).unwrap_err();
        match err {
            SpectraError::Read { path, .. } => assert_eq!(path, missing),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_read_rejects_invalid_utf8() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, 0x00]).unwrap();
        file.flush().unwrap();
        assert!(matches!(
            read_as_text(file.path()),
            Err(SpectraError::Read { .. })
        ));
    }

    #[test]
    fn test_spawn_pair_read_delivers_once() {
        let wl = temp_with("1.0\n");
        let refl = temp_with("0.5\n");
        let rx = spawn_pair_read([wl.path().to_path_buf(), refl.path().to_path_buf()]);
        let [a, b] = rx.recv().unwrap().unwrap();
        assert_eq!((a.as_str(), b.as_str()), ("1.0\n", "0.5\n"));
        assert!(rx.recv().is_err());
    }

    #[test]
    fn test_band_load_unknown_dataset_is_empty() {
        let file = temp_with(
            r#"{ "landsat9": [ { "band": "B4 - Red", "wavelength_start": 0.64, "wavelength_end": 0.67 } ] }"#,
        );
        let load = spawn_band_load(file.path().to_path_buf(), "aster".into())
            .recv()
            .unwrap()
            .unwrap();
        assert!(load.bands.is_empty());
        assert_eq!(load.available, vec!["landsat9"]);
    }

    #[test]
    fn test_band_catalog_parse_error_has_context() {
        let file = temp_with("{ not json");
        let err = load_band_catalog(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("parsing band file"));
    }
}
