//! Test fixtures and constants.

use std::path::PathBuf;
use tempfile::TempDir;

/// Intervals with pinned sRGB output under the default tuning
pub mod intervals {
    /// 10/7, the reference interval
    pub const TEN_SEVENTHS: (&str, [u8; 3]) = ("[1 0 1 -1>", [232, 186, 135]);

    /// 5/4, the classic major third
    pub const MAJOR_THIRD: (&str, [u8; 3]) = ("5/4", [255, 251, 0]);

    /// 7/4, the harmonic seventh
    pub const HARMONIC_SEVENTH: (&str, [u8; 3]) = ("7/4", [73, 141, 255]);

    /// 11/8, the undecimal tritone
    pub const UNDECIMAL_TRITONE: (&str, [u8; 3]) = ("11/8", [255, 0, 128]);

    /// 8/13, a tridecimal undertone
    pub const TRIDECIMAL_UNDERTONE: (&str, [u8; 3]) = ("8/13", [0, 143, 47]);

    /// 35/1, two primes blended and desaturated once
    pub const FIVE_TIMES_SEVEN: (&str, [u8; 3]) = ("35", [159, 207, 163]);
}

/// A temporary directory holding a config.yaml with the given content
pub fn config_file(content: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, content).expect("Failed to write config");
    (dir, path)
}
