//! Plain-text rendering of a generation result.
//!
//! Display only: the draft is shown with its character and UTF-8 byte counts
//! so the teacher can check it against the requested length themselves. No
//! validation of the byte budget or style rules happens here.

use crate::result::SeTeukResult;

pub fn format_report(result: &SeTeukResult) -> String {
    let mut out = String::new();

    out.push_str("학생 역량 분석 리포트\n");
    out.push_str("====================\n\n");

    out.push_str("핵심 키워드: ");
    out.push_str(&result.analysis.keywords.join(" / "));
    out.push('\n');

    out.push_str("\n관찰된 강점\n");
    out.push_str(&result.analysis.strengths);
    out.push('\n');

    out.push_str("\n스토리 라인 설계\n");
    out.push_str(&result.analysis.storyline);
    out.push('\n');

    out.push_str("\n교과세특 초안\n");
    out.push_str("--------------------\n");
    out.push_str(&result.draft);
    out.push('\n');
    out.push_str(&format!(
        "\n공백 포함 {}자 / {} 바이트 (약)\n",
        result.draft_char_count(),
        result.draft_byte_len()
    ));

    out
}
