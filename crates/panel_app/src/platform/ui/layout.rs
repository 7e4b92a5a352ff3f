use super::constants::*;

/// Lines printed when the interactive panel starts or on `help`.
pub fn surface_help() -> Vec<String> {
    vec![
        "Underwater color correction panel".to_string(),
        format!("  url <text>          set #{INPUT_IMAGE_URL}"),
        format!("  output <text>       set #{INPUT_OUTPUT_URL}"),
        format!("  file <path>         choose a file via #{INPUT_FILE}"),
        format!("  drop <path>...      drop files on #{DROP_ZONE} (first one is kept)"),
        format!("  submit              submit #{FORM}"),
        "  show                print the whole panel".to_string(),
        "  quit                exit without waiting".to_string(),
    ]
}
