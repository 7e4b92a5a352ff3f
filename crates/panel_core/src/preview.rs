use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::SelectedFile;

/// Build an inline `data:` URL for the "before" preview from the file bytes.
pub fn preview_data_url(file: &SelectedFile) -> String {
    let mime = if file.mime.is_empty() {
        "application/octet-stream"
    } else {
        file.mime.as_str()
    };
    format!("data:{mime};base64,{}", STANDARD.encode(&file.bytes))
}

#[cfg(test)]
mod tests {
    use super::preview_data_url;
    use crate::SelectedFile;

    #[test]
    fn encodes_bytes_with_mime() {
        let file = SelectedFile::new("a.png", "image/png", b"abc".to_vec());
        assert_eq!(preview_data_url(&file), "data:image/png;base64,YWJj");
    }

    #[test]
    fn empty_mime_falls_back_to_octet_stream() {
        let file = SelectedFile::new("blob", "", Vec::new());
        assert_eq!(preview_data_url(&file), "data:application/octet-stream;base64,");
    }
}
