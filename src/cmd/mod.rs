pub mod batch;
pub mod config;
pub mod demo;
pub mod score;

use std::fs;
use std::io::{self, Read};
use stylescore::StyleResult;

/// Reads a file, or stdin when `path` is `-`.
pub fn read_input(path: &str) -> StyleResult<String> {
    if path == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        Ok(fs::read_to_string(path)?)
    }
}
