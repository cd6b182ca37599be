use chrono::Local;
use pollen::report::{
    render_error, render_header, render_no_data, render_record, render_title, ReportStyle,
};
use pollen::{PollenClient, PollenError, PollenRecord};
use std::process::ExitCode;

const EXIT_OK: u8 = 0;
const EXIT_FAILURE: u8 = 1;

async fn fetch_levels() -> Result<Vec<PollenRecord>, PollenError> {
    PollenClient::new()?.levels().await
}

/// Text to print after the header, and the process exit status.
fn render_outcome(
    style: &ReportStyle,
    outcome: &Result<Vec<PollenRecord>, PollenError>,
) -> (String, u8) {
    match outcome {
        // Empty lists never leave the client, but don't report success for one.
        Ok(records) if records.is_empty() => (render_no_data(style), EXIT_FAILURE),
        Ok(records) => {
            let lines: Vec<String> = records
                .iter()
                .map(|record| render_record(style, record))
                .collect();
            (format!("\n{}", lines.join("\n")), EXIT_OK)
        }
        Err(PollenError::NoData(_)) => (render_no_data(style), EXIT_FAILURE),
        Err(e) => (render_error(style, e), EXIT_FAILURE),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Silent unless RUST_LOG is set, e.g. RUST_LOG=pollen=debug
    env_logger::init();

    let style = ReportStyle::default();
    println!("{}", render_title(&style));
    println!("{}", render_header(&style, Local::now().naive_local()));

    let (output, status) = render_outcome(&style, &fetch_levels().await);
    println!("{}", output);
    ExitCode::from(status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pollen::FetchError;

    #[test]
    fn test_records_exit_ok() {
        let outcome = Ok(vec![
            PollenRecord::new("Tree Pollen", "High"),
            PollenRecord::new("Mold", "Low"),
        ]);
        let (output, status) = render_outcome(&ReportStyle::plain(), &outcome);
        assert_eq!(status, EXIT_OK);
        assert_eq!(
            output,
            "\n 🌳 Tree Pollen          HIGH  \n 🍄 Mold                 LOW   "
        );
    }

    #[test]
    fn test_no_data_exits_with_warning() {
        let outcome = Err(PollenError::NoData("http://localhost/".to_string()));
        let (output, status) = render_outcome(&ReportStyle::plain(), &outcome);
        assert_eq!(status, EXIT_FAILURE);
        assert_eq!(output, "⚠️  No pollen data found");
    }

    #[test]
    fn test_fetch_error_exits_with_error() {
        let outcome = Err(PollenError::Fetch(FetchError::HttpStatus {
            url: "http://localhost/".to_string(),
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        }));
        let (output, status) = render_outcome(&ReportStyle::plain(), &outcome);
        assert_eq!(status, EXIT_FAILURE);
        assert!(output.starts_with("❌ Error: "));
        assert!(output.contains("500 Internal Server Error"));
    }

    #[test]
    fn test_empty_list_is_not_success() {
        let (output, status) = render_outcome(&ReportStyle::plain(), &Ok(Vec::new()));
        assert_eq!(status, EXIT_FAILURE);
        assert_eq!(output, "⚠️  No pollen data found");
    }

    #[test]
    fn test_plain_error_text_has_no_escape_codes() {
        let outcome = Err(PollenError::Fetch(FetchError::Decompression(
            "http://localhost/".to_string(),
            std::io::Error::new(std::io::ErrorKind::InvalidData, "invalid gzip header"),
        )));
        let (output, _) = render_outcome(&ReportStyle::plain(), &outcome);
        assert!(!output.contains('\u{1b}'));
        assert!(output.contains("invalid gzip header"));
    }
}
