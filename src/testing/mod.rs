mod memory_form_store;
mod mock_clipboard;

pub use memory_form_store::MemoryFormStore;
pub use mock_clipboard::MockClipboard;
