mod clipboard_arboard;
mod form_file_store;

pub use clipboard_arboard::ArboardClipboardWriter;
pub use form_file_store::FilesystemFormStore;
