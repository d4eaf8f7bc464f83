//! Fixed prompt material and request-part assembly for SeTeuk generation.

use crate::input::{SeTeukInput, UploadedFile};
use crate::llm::types::Part;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use log::warn;

pub const MODEL: &str = "gemini-2.5-flash";
pub const TEMPERATURE: f64 = 0.6;

/// The writing rules the model must follow. Part of the external contract:
/// the exact wording determines the output style, so it is kept verbatim.
pub const SYSTEM_INSTRUCTION: &str = r#"
    당신은 10년 차 이상의 베테랑 교사이자 대학 입학사정관 출신의 교과세특(세부능력 및 특기사항) 전문 작성 AI입니다.
    교사가 제공하는 파편화된 학생의 활동 자료(텍스트 및 업로드된 파일)와 관찰 평가를 종합하여, 학생의 역량이 드러나는 하나의 완결된 스토리를 구축하고 이를 생기부 규정에 맞게 작성하십시오.

    [필수 준수 사항 - 작성 규칙]
    1. 분량: UTF-8 기준 1500바이트(한글 약 500자) 이내로 작성하십시오.
    2. 서술 방식 (문체 엄수):
       - 종결 어미는 반드시 명사형('~임', '~함')으로 끝내십시오. (예: 우수한 성과를 보임, 결론을 도출함)
       - 시제는 '현재형'으로 작성하십시오. (예: 효과적이었음(X) -> 효과적임(O), 활동했음(X) -> 활동함(O))
       - 주어(학생, 본인 등)는 철저히 생략하십시오.
       - 접속사(그리고, 그러나, 또한 등) 사용을 지양하고 문맥으로 자연스럽게 연결하십시오.
    3. 내용 구성:
       - 교사의 총평을 중요하게 반영하되 그대로 베끼지 말고, 활동 증거와 연결하여 구체화하십시오.
       - 교과 특성에 맞는 핵심 역량을 중심으로 서술하십시오.
       - 미사여구(탁월함, 뛰어남)나 추측성 표현(~할 것으로 기대됨)을 배제하고, '무엇을 어떻게 했는지' 팩트와 근거 위주로 작성하여 객관성을 확보하십시오.
       - 부정적 표현을 피하고 학생의 성장이 드러나도록 긍정적으로 기술하십시오.
    4. 표기법:
       - 참고 문헌(책, 논문 등) 언급 시 반드시 '도서명(저자)' 형식을 지키십시오. (예: '이기적 유전자(리처드 도킨스)')
       - 학생의 실명 등 개인정보는 포함하지 마십시오.
    5. 권장 서술어 (다음 어휘를 적극 활용):
       - 질문함, 정의함, 진단함, 해석함, 도출함, 재구성함, 분석함, 탐구함, 비교함, 예측함, 평가함, 설정함, 의견을 공유함, 공감을 끌어냄, 토의함, 제안함, 설명함, 발표함, 섭외함, 기획함, 제작함, 변환함, 구성함, 설계함, 실행함, 실험함, 반성함, 심화 학습함, 다짐함 등.

    [사고 과정]
    1. 자료 분석: 동기 -> 과정(구체적 행동) -> 결과 -> 심화/확장 흐름 파악.
    2. 교사 평가 연결: 교사의 코멘트를 입증할 수 있는 구체적 활동 사례 매칭.
    3. 작성 및 검토: 위 '필수 준수 사항'의 문체 규칙(명사형 종결, 현재형, 주어 생략)이 적용되었는지 확인.
"#;

const ACTIVITY_PLACEHOLDER: &str = "(텍스트 자료 없음, 첨부파일 참고)";
const COMMENTS_PLACEHOLDER: &str = "(평가 코멘트 없음)";
const KEYWORDS_PLACEHOLDER: &str = "종합적 역량";

/// Build the ordered content parts for one submission: binary attachments
/// first, then the composed user prompt as the final text part.
pub fn build_parts(input: &SeTeukInput) -> Vec<Part> {
    let mut parts = Vec::new();
    let mut attached_text = String::new();

    for file in &input.files {
        if is_text_file(file) {
            match decode_text(file) {
                Ok(content) => {
                    attached_text.push_str(&format!(
                        "\n[업로드된 텍스트 파일 내용: {}]\n{}\n-------------------\n",
                        file.name, content
                    ));
                }
                Err(reason) => {
                    // Recovered locally: ship it as an opaque attachment and
                    // let the model make sense of it.
                    warn!("Failed to decode text file {}: {}", file.name, reason);
                    parts.push(Part::inline_data("text/plain", file.data.clone()));
                }
            }
        } else {
            parts.push(Part::inline_data(file.mime_type.clone(), file.data.clone()));
        }
    }

    parts.push(Part::text(build_user_prompt(input, &attached_text)));
    parts
}

/// A file is inlined as prompt text when its MIME type says so or when it
/// carries a .txt name (browsers often report an empty MIME type for those).
fn is_text_file(file: &UploadedFile) -> bool {
    file.mime_type.contains("text") || file.name.ends_with(".txt")
}

fn decode_text(file: &UploadedFile) -> Result<String, String> {
    let bytes = BASE64.decode(&file.data).map_err(|e| e.to_string())?;
    String::from_utf8(bytes).map_err(|e| e.to_string())
}

/// Compose the single user-prompt text block for a submission.
pub fn build_user_prompt(input: &SeTeukInput, attached_text: &str) -> String {
    let activity = if input.activity_data.trim().is_empty() {
        ACTIVITY_PLACEHOLDER
    } else {
        &input.activity_data
    };
    let comments = if input.teacher_comments.trim().is_empty() {
        COMMENTS_PLACEHOLDER
    } else {
        &input.teacher_comments
    };
    let keywords = if input.emphasis_keywords.is_empty() {
        KEYWORDS_PLACEHOLDER.to_string()
    } else {
        input.emphasis_keywords.joined()
    };
    let attached_block = if attached_text.is_empty() {
        String::new()
    } else {
        format!("[추가 첨부 텍스트 파일 내용]\n{attached_text}")
    };

    format!(
        r#"
    다음 학생 자료를 바탕으로 생기부 세특을 작성해줘.

    [학생 활동 자료 (텍스트)]
    {activity}

    {attached_block}

    [교사 평가/코멘트]
    {comments}

    [옵션]
    - 희망 분량: {length}
    - 강조하고 싶은 역량 키워드: {keywords}

    [작성 시 강력 규제 사항]
    1. 문장은 반드시 '~음', '~함' 등의 명사형으로 종결할 것. (평서문 절대 금지)
    2. 시제는 현재형을 사용할 것. (~했음 X -> ~함 O)
    3. 주어(학생 등)는 생략할 것.
    4. 도서 인용 시 '도서명(저자)' 형식을 반드시 갖출 것.

    첨부된 파일(이미지, PDF, 오디오 등)이 있다면 해당 내용도 상세히 분석하여 생기부 내용에 반영해줘.
"#,
        activity = activity,
        attached_block = attached_block,
        comments = comments,
        length = input.length_option.label(),
        keywords = keywords,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::LengthOption;

    fn prompt_of(parts: &[Part]) -> &str {
        match parts.last().expect("at least one part") {
            Part::Text { text } => text,
            Part::InlineData { .. } => panic!("final part must be the user prompt"),
        }
    }

    #[test]
    fn text_mime_file_is_inlined_as_labeled_block() {
        let input = SeTeukInput::new()
            .with_file(UploadedFile::from_bytes("memo.txt", "text/plain", "관찰 기록".as_bytes()));
        let parts = build_parts(&input);
        assert_eq!(parts.len(), 1);
        let prompt = prompt_of(&parts);
        assert!(prompt.contains("[업로드된 텍스트 파일 내용: memo.txt]"));
        assert!(prompt.contains("관찰 기록"));
    }

    #[test]
    fn txt_name_with_empty_mime_is_still_inlined() {
        let input = SeTeukInput::new()
            .with_file(UploadedFile::from_bytes("notes.txt", "", "안녕".as_bytes()));
        let parts = build_parts(&input);
        assert_eq!(parts.len(), 1, "no binary part expected");
        let prompt = prompt_of(&parts);
        assert!(prompt.contains("[업로드된 텍스트 파일 내용: notes.txt]"));
        assert!(prompt.contains("안녕"));
    }

    #[test]
    fn binary_file_passes_through_with_original_mime() {
        let input = SeTeukInput::new()
            .with_activity_data("발표함")
            .with_file(UploadedFile::from_bytes("photo.png", "image/png", &[1, 2, 3]));
        let parts = build_parts(&input);
        assert_eq!(parts.len(), 2);
        match &parts[0] {
            Part::InlineData { inline_data } => {
                assert_eq!(inline_data.mime_type, "image/png");
            }
            Part::Text { .. } => panic!("attachment must precede the prompt"),
        }
    }

    #[test]
    fn undecodable_text_file_falls_back_to_plain_text_attachment() {
        // Valid base64 of bytes that are not UTF-8.
        let file = UploadedFile::from_bytes("broken.txt", "text/plain", &[0xff, 0xfe, 0x00]);
        let input = SeTeukInput::new().with_file(file);
        let parts = build_parts(&input);
        assert_eq!(parts.len(), 2);
        match &parts[0] {
            Part::InlineData { inline_data } => assert_eq!(inline_data.mime_type, "text/plain"),
            Part::Text { .. } => panic!("fallback must be a binary part"),
        }
    }

    #[test]
    fn placeholders_fill_missing_sections() {
        let prompt = build_user_prompt(&SeTeukInput::new(), "");
        assert!(prompt.contains("(텍스트 자료 없음, 첨부파일 참고)"));
        assert!(prompt.contains("(평가 코멘트 없음)"));
        assert!(prompt.contains("종합적 역량"));
        assert!(!prompt.contains("[추가 첨부 텍스트 파일 내용]"));
    }

    #[test]
    fn prompt_carries_input_text_options_and_keywords() {
        let input = SeTeukInput::new()
            .with_activity_data("토론 동아리에서 기후 변화 주제로 발표함")
            .with_length_option(LengthOption::Standard)
            .with_keyword("탐구력")
            .with_keyword("의사소통");
        let prompt = build_user_prompt(&input, "");
        assert!(prompt.contains("기후 변화"));
        assert!(prompt.contains("탐구력, 의사소통"));
        assert!(prompt.contains("표준 (1500바이트/500자 내외)"));
        assert!(!prompt.contains("종합적 역량"));
    }

    #[test]
    fn system_instruction_states_the_core_style_rules() {
        assert!(SYSTEM_INSTRUCTION.contains("1500바이트"));
        assert!(SYSTEM_INSTRUCTION.contains("명사형"));
        assert!(SYSTEM_INSTRUCTION.contains("도서명(저자)"));
    }
}
