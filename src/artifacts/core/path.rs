use std::path::{Path, PathBuf};

const ABSENT_SEGMENT: &str = "<absent>";

/// Join `first` and `others` into one path without touching the filesystem
///
/// Segments arrive as `Option` because callers usually thread them through
/// lookups that may come back empty. The first absent segment fails the join;
/// the error lists every segment so the caller can see which lookup missed.
/// Separators are inserted by [`Path::join`], `.` and `..` are kept as is.
pub fn join<P: AsRef<Path>>(
    first: Option<P>,
    others: &[Option<&str>],
) -> anyhow::Result<PathBuf> {
    let Some(first) = first else {
        return Err(absent_segment_error(0, None, others));
    };
    let first = first.as_ref();

    others
        .iter()
        .enumerate()
        .try_fold(first.to_path_buf(), |path, (index, segment)| match segment {
            Some(segment) => Ok(path.join(segment)),
            None => Err(absent_segment_error(index + 1, Some(first), others)),
        })
}

fn absent_segment_error(
    index: usize,
    first: Option<&Path>,
    others: &[Option<&str>],
) -> anyhow::Error {
    let first = first.map(|first| format!("{:?}", first.display().to_string()));
    let segments = std::iter::once(first)
        .chain(
            others
                .iter()
                .map(|segment| segment.map(|segment| format!("{segment:?}"))),
        )
        .map(|segment| segment.unwrap_or_else(|| ABSENT_SEGMENT.to_string()))
        .collect::<Vec<_>>()
        .join(", ");

    anyhow::anyhow!("Cannot join paths: argument {index} is absent (segments: [{segments}])")
}
