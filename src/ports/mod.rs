mod clipboard_writer;
mod form_store;

pub use clipboard_writer::ClipboardWriter;
pub use form_store::FormStore;
