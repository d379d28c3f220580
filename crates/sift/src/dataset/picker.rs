use std::path::PathBuf;

/// External file-selection capability: pick a path or nothing at all.
/// A `None` means the operator cancelled, which is never an error.
pub trait FilePicker {
    fn pick_file(&self) -> Option<PathBuf>;
}

/// Native file dialog used by the real binary during dataset import.
pub struct DialogPicker;

impl FilePicker for DialogPicker {
    fn pick_file(&self) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .set_title("Select Test Dataset")
            .add_filter("TSV files", &["tsv"])
            .add_filter("All files", &["*"])
            .pick_file()
    }
}
