//! Media file writing.

use std::fmt::Display;
use std::path::{Path, PathBuf};

use futures::{Stream, StreamExt};
use indicatif::ProgressBar;
use reqwest::Response;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::error::{Error, Result};
use crate::fs::partial_path;
use crate::output::create_download_bar;

/// Minimum file size to show progress bar (20 MB).
const PROGRESS_THRESHOLD: u64 = 20 * 1024 * 1024;

/// Stream a response body to `output_path`.
pub async fn save_response(
    response: Response,
    output_path: &Path,
    show_progress: bool,
) -> Result<PathBuf> {
    let content_length = response.content_length();
    let show_progress =
        show_progress && content_length.map(|l| l > PROGRESS_THRESHOLD).unwrap_or(false);

    let progress = if show_progress {
        let label = output_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Some(create_download_bar(content_length.unwrap_or(0), &label))
    } else {
        None
    };

    let result = write_stream(response.bytes_stream(), output_path, progress.as_ref()).await;

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    result.map(|()| output_path.to_path_buf())
}

/// Write a stream of chunks to `output_path`.
///
/// Bytes go to `<output_path>.part` first and are renamed into place once the
/// stream is complete, so an interrupted download never occupies the final
/// name. The part file is removed whenever the write fails.
pub async fn write_stream<S, B, E>(
    stream: S,
    output_path: &Path,
    progress: Option<&ProgressBar>,
) -> Result<()>
where
    S: Stream<Item = std::result::Result<B, E>>,
    B: AsRef<[u8]>,
    E: Display,
{
    let part_path = partial_path(output_path);

    let result = match write_part(stream, &part_path, progress).await {
        Ok(()) => tokio::fs::rename(&part_path, output_path)
            .await
            .map_err(Error::from),
        Err(e) => Err(e),
    };

    if result.is_err() {
        let _ = tokio::fs::remove_file(&part_path).await;
    }

    result
}

async fn write_part<S, B, E>(
    stream: S,
    part_path: &Path,
    progress: Option<&ProgressBar>,
) -> Result<()>
where
    S: Stream<Item = std::result::Result<B, E>>,
    B: AsRef<[u8]>,
    E: Display,
{
    futures::pin_mut!(stream);

    let mut file = File::create(part_path).await?;
    let mut downloaded: u64 = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| Error::Download(format!("Stream error: {}", e)))?;
        let bytes = chunk.as_ref();
        file.write_all(bytes).await?;
        downloaded += bytes.len() as u64;

        if let Some(pb) = progress {
            pb.set_position(downloaded);
        }
    }

    file.flush().await?;
    Ok(())
}

/// Write a post caption next to its media.
pub async fn save_caption(caption: &str, output_path: &Path) -> Result<()> {
    let chunks = futures::stream::iter([Ok::<_, std::io::Error>(caption.as_bytes())]);
    write_stream(chunks, output_path, None).await
}
