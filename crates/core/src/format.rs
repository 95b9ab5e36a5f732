use crate::types::{AnalysisResult, Asset};

/// Format an uploaded asset as a short key/value block
pub fn format_asset(asset: &Asset) -> String {
    let mut output = String::new();
    output.push_str(&format!("**File ID:** {}\n", asset.file_id));
    output.push_str(&format!("**Storage:** {}\n", asset.storage_uri));
    output.push_str(&format!("**Original:** {}\n", asset.playback_url));
    output
}

/// Format an analysis as human-readable markdown: links first, then the
/// backend's own markdown summary untouched.
pub fn format_analysis_readable(asset: &Asset, result: &AnalysisResult) -> String {
    let mut output = String::new();

    output.push_str("# Player Tracker\n\n");
    output.push_str(&format_asset(asset));
    output.push_str(&format!("**AI Processed:** {}\n", result.processed_video_url));
    if !result.advice_image_url.is_empty() {
        output.push_str(&format!("**Key Frame:** {}\n", result.advice_image_url));
    }
    output.push('\n');

    output.push_str("## Strategic Summary\n\n");
    if result.summary_text.trim().is_empty() {
        output.push_str("_No summary returned._\n");
    } else {
        output.push_str(result.summary_text.trim_end());
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset() -> Asset {
        Asset {
            file_id: "f1".to_string(),
            storage_uri: "gs://bucket/f1.mp4".to_string(),
            playback_url: "https://signed/f1".to_string(),
        }
    }

    #[test]
    fn readable_analysis_keeps_summary_markdown() {
        let result = AnalysisResult {
            processed_video_url: "https://processed/f1".to_string(),
            summary_text: "# Report\n\n- keep elbow high\n".to_string(),
            advice_image_url: "https://advice/f1.png".to_string(),
        };

        let out = format_analysis_readable(&asset(), &result);

        assert!(out.contains("**AI Processed:** https://processed/f1"));
        assert!(out.contains("**Key Frame:** https://advice/f1.png"));
        assert!(out.ends_with("# Report\n\n- keep elbow high\n"));
    }

    #[test]
    fn empty_summary_gets_a_placeholder_and_no_key_frame_line() {
        let result = AnalysisResult {
            processed_video_url: "https://processed/f1".to_string(),
            summary_text: "  ".to_string(),
            advice_image_url: String::new(),
        };

        let out = format_analysis_readable(&asset(), &result);

        assert!(out.contains("_No summary returned._"));
        assert!(!out.contains("Key Frame"));
    }
}
