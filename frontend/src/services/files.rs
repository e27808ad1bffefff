//! File handles from the chooser and from drag & drop.

use leptos::{html, NodeRef};
use web_sys::{DragEvent, FileList};

use crate::{AppError, AppResult, BrowserFile};

/// All files of a list, in order.
pub fn collect_files(list: Option<FileList>) -> Vec<BrowserFile> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|index| list.get(index))
        .map(BrowserFile::from)
        .collect()
}

/// Files carried by a drop event.
pub fn dropped_files(ev: &DragEvent) -> Vec<BrowserFile> {
    collect_files(ev.data_transfer().and_then(|transfer| transfer.files()))
}

/// Open the native file chooser behind a hidden input.
pub fn open_file_chooser(input: &NodeRef<html::Input>) -> AppResult<()> {
    let input = input
        .get()
        .ok_or_else(|| AppError::Dom("file input is not mounted".to_string()))?;
    input.click();
    Ok(())
}
