//! Font size selection for extension labels
//!
//! Longer labels get smaller text so they still fit inside the icon.

/// Resolve the font size for a label of `extension_length` characters.
///
/// An explicit override always wins. Otherwise the size steps down from 10
/// (up to three characters) to 4 (nine characters or more).
pub fn font_size(extension_length: usize, custom_size: Option<u32>) -> u32 {
    if let Some(size) = custom_size {
        return size;
    }

    match extension_length {
        0..=3 => 10,
        4 => 9,
        5 => 8,
        6 => 7,
        7 => 6,
        8 => 5,
        _ => 4,
    }
}

/// Resolve the font size for a label, counting its characters.
pub fn font_size_for(extension: &str, custom_size: Option<u32>) -> u32 {
    font_size(extension.chars().count(), custom_size)
}
