/// Extracts the text layer of every page; pages are newline-separated by the parser.
pub fn extract(bytes: &[u8]) -> Result<String, String> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| e.to_string())
}
