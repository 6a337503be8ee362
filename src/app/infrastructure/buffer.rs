use fltk::{prelude::*, text::TextBuffer};

/// Read text from an FLTK TextBuffer without leaking the C-allocated copy.
///
/// `TextBuffer::text()` copies the `malloc()`'d string returned by
/// `Fl_Text_Buffer_text()` into a `String` but never frees the original.
/// Every keystroke in an editor pane reads its buffer, so the leak would
/// grow with the size of the user's source on each edit.
pub fn buffer_text_no_leak(buf: &TextBuffer) -> String {
    unsafe extern "C" {
        fn Fl_Text_Buffer_text(buf: *mut std::ffi::c_void) -> *mut std::ffi::c_char;
        fn free(ptr: *mut std::ffi::c_void);
    }

    // SAFETY: `buf.as_ptr()` is a live Fl_Text_Buffer for as long as `buf`
    // exists. FLTK returns a malloc'd, NUL-terminated copy (or null when
    // empty) which is copied into a Rust String and then released with the
    // matching `free()`.
    unsafe {
        let inner = buf.as_ptr() as *mut std::ffi::c_void;
        let ptr = Fl_Text_Buffer_text(inner);
        if ptr.is_null() {
            return String::new();
        }
        let result = std::ffi::CStr::from_ptr(ptr).to_string_lossy().into_owned();
        free(ptr as *mut std::ffi::c_void);
        result
    }
}

/// Replace the buffer contents only when they differ.
///
/// Returns `true` when the buffer was rewritten. Skipping identical text keeps
/// the modify callback from echoing an edit the playground already holds.
pub fn replace_text_if_changed(buf: &mut TextBuffer, text: &str) -> bool {
    if buffer_text_no_leak(buf) == text {
        return false;
    }
    buf.set_text(text);
    true
}
