//! ImageMagick `identify` based picture probing.

use super::types::ImageInfo;
use crate::command;
use crate::tools::IDENTIFY;
use crate::{Error, Result};
use std::ffi::OsStr;
use std::path::Path;

/// One line per frame: `FORMAT|WIDTH|HEIGHT`.
const IDENTIFY_FORMAT: &str = "%m|%w|%h\n";

/// Probe a picture by running `identify` at `program`.
pub fn probe_with_identify(program: &Path, path: &Path) -> Result<ImageInfo> {
    let output = command::run(
        IDENTIFY,
        program,
        [
            OsStr::new("-format"),
            OsStr::new(IDENTIFY_FORMAT),
            path.as_os_str(),
        ],
    )?
    .into_result(IDENTIFY)?;

    parse_identify_output(path, &output.stdout)
}

fn parse_identify_output(path: &Path, stdout: &str) -> Result<ImageInfo> {
    let frames: Vec<&str> = stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let first = frames
        .first()
        .ok_or_else(|| Error::parse_error(IDENTIFY, "empty output"))?;

    let mut fields = first.split('|');
    let (Some(format), Some(width), Some(height)) = (fields.next(), fields.next(), fields.next())
    else {
        return Err(Error::parse_error(
            IDENTIFY,
            format!("unexpected line: {:?}", first),
        ));
    };

    let width = width
        .parse::<u32>()
        .map_err(|e| Error::parse_error(IDENTIFY, format!("bad width {:?}: {}", width, e)))?;
    let height = height
        .parse::<u32>()
        .map_err(|e| Error::parse_error(IDENTIFY, format!("bad height {:?}: {}", height, e)))?;

    Ok(ImageInfo {
        file_path: path.to_path_buf(),
        format: format.to_string(),
        width,
        height,
        frames: frames.len() as u32,
    })
}
