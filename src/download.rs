//! Writing rendered cards to disk.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::foundation::error::{CardError, CardResult};
use crate::generate::{CardSet, RenderedCard};

/// Write `card` to `dir/{file_name}`.
///
/// Bytes go to a temporary file inside `dir` that is renamed into place once
/// complete; on any failure the temporary file is removed and no partial card
/// is left behind. `dir` is created when missing.
pub fn save_card(card: &RenderedCard, dir: impl AsRef<Path>) -> CardResult<PathBuf> {
    let dir = dir.as_ref();
    let name = Path::new(&card.file_name);
    if card.file_name.is_empty() || name.file_name() != Some(name.as_os_str()) {
        return Err(CardError::validation(format!(
            "card file name must be a bare file name, got '{}'",
            card.file_name
        )));
    }
    std::fs::create_dir_all(dir)?;

    let dest = dir.join(name);
    let mut tmp = tempfile::Builder::new()
        .prefix(".sharecard-")
        .suffix(".part")
        .tempfile_in(dir)?;
    tmp.write_all(&card.bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(&dest).map_err(|e| CardError::Io(e.error))?;

    tracing::debug!(path = %dest.display(), bytes = card.bytes.len(), "card saved");
    Ok(dest)
}

/// Save hero, summary and cta in that order, pausing `stagger` between writes.
pub async fn save_all(
    set: &CardSet,
    dir: impl AsRef<Path>,
    stagger: Duration,
) -> CardResult<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let mut out = Vec::with_capacity(3);
    for (i, card) in set.cards().into_iter().enumerate() {
        if i > 0 && !stagger.is_zero() {
            tokio::time::sleep(stagger).await;
        }
        out.push(save_card(card, dir)?);
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../tests/unit/download.rs"]
mod tests;
