use crate::error::{Result, SeTeukError};
use crate::input::SeTeukInput;
use crate::llm::SeTeukGenerator;
use crate::result::SeTeukResult;

/// What the UI shows the teacher while a submission runs. Nothing here
/// survives a restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// Shown for every service or schema failure, regardless of cause.
pub const GENERIC_ERROR_MESSAGE: &str =
    "작성 중 오류가 발생했습니다. 잠시 후 다시 시도해주세요. (파일 크기가 너무 크거나 지원되지 않는 형식일 수 있습니다)";

/// The submission flow's only mutable state: the current phase, the result
/// being displayed, and the user-facing error message. Written only by the
/// completion path of the current submission.
#[derive(Debug, Default)]
pub struct Session {
    phase: Phase,
    result: Option<SeTeukResult>,
    error: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn result(&self) -> Option<&SeTeukResult> {
        self.result.as_ref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Only one submission may be in flight at a time.
    pub fn can_submit(&self) -> bool {
        self.phase != Phase::Loading
    }

    /// Run one submission end to end, driving the phase transitions.
    ///
    /// An empty submission is refused up front without leaving the current
    /// phase; all other failures land in [`Phase::Error`] with the generic
    /// message set.
    pub async fn submit(
        &mut self,
        generator: &SeTeukGenerator,
        input: &SeTeukInput,
    ) -> Result<()> {
        if !self.can_submit() {
            return Err(SeTeukError::SubmissionInFlight);
        }
        if !input.has_content() {
            return Err(SeTeukError::EmptySubmission);
        }

        self.begin();
        match generator.generate(input).await {
            Ok(result) => {
                self.complete(result);
                Ok(())
            }
            Err(e) => {
                self.fail();
                Err(e)
            }
        }
    }

    /// Enter [`Phase::Loading`], clearing any previous result or error.
    pub fn begin(&mut self) {
        self.phase = Phase::Loading;
        self.result = None;
        self.error = None;
    }

    /// Loading finished: hold the result until the next submission.
    pub fn complete(&mut self, result: SeTeukResult) {
        self.result = Some(result);
        self.phase = Phase::Success;
    }

    /// Loading failed: show the generic message.
    pub fn fail(&mut self) {
        self.error = Some(GENERIC_ERROR_MESSAGE.to_string());
        self.phase = Phase::Error;
    }

    /// The user's explicit retry action: back to [`Phase::Idle`] with the
    /// prior result and message cleared.
    pub fn retry(&mut self) {
        if self.phase == Phase::Error {
            self.phase = Phase::Idle;
            self.result = None;
            self.error = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::{SeTeukAnalysis, SeTeukResult};

    fn sample_result() -> SeTeukResult {
        SeTeukResult {
            analysis: SeTeukAnalysis {
                keywords: vec!["탐구력".into(), "분석력".into(), "발표력".into()],
                strengths: "근거 중심 서술".into(),
                storyline: "동기-과정-결과".into(),
            },
            draft: "기후 변화를 탐구함".into(),
        }
    }

    #[test]
    fn starts_idle_with_nothing_to_show() {
        let session = Session::new();
        assert_eq!(session.phase(), Phase::Idle);
        assert!(session.result().is_none());
        assert!(session.error_message().is_none());
        assert!(session.can_submit());
    }

    #[test]
    fn loading_to_success_holds_the_result() {
        let mut session = Session::new();
        session.begin();
        assert_eq!(session.phase(), Phase::Loading);
        assert!(!session.can_submit());

        session.complete(sample_result());
        assert_eq!(session.phase(), Phase::Success);
        assert_eq!(session.result().unwrap().draft, "기후 변화를 탐구함");
        assert!(session.can_submit());
    }

    #[test]
    fn loading_to_error_sets_the_generic_message() {
        let mut session = Session::new();
        session.begin();
        session.fail();
        assert_eq!(session.phase(), Phase::Error);
        assert_eq!(session.error_message(), Some(GENERIC_ERROR_MESSAGE));
        assert!(session.result().is_none());
    }

    #[test]
    fn retry_returns_to_idle_and_clears_state() {
        let mut session = Session::new();
        session.begin();
        session.fail();
        session.retry();
        assert_eq!(session.phase(), Phase::Idle);
        assert!(session.error_message().is_none());
        assert!(session.result().is_none());
    }

    #[test]
    fn retry_is_a_no_op_outside_error() {
        let mut session = Session::new();
        session.begin();
        session.complete(sample_result());
        session.retry();
        assert_eq!(session.phase(), Phase::Success);
        assert!(session.result().is_some());
    }

    #[test]
    fn a_new_submission_clears_the_previous_result() {
        let mut session = Session::new();
        session.begin();
        session.complete(sample_result());

        session.begin();
        assert_eq!(session.phase(), Phase::Loading);
        assert!(session.result().is_none());
    }
}
