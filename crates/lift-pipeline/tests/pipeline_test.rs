use std::sync::{Arc, Mutex};

use lift_core::config::{LiftConfig, SessionConfig};
use lift_core::errors::{
    GenerationError, InputError, LiftErrorCode, ScrubbingError, SessionError,
};
use lift_core::models::SanitizedText;
use lift_core::traits::{IGenerator, ISanitizer, ISessionStore};
use lift_core::{LiftError, Role, SessionId};
use lift_pipeline::{GenerationRequest, LiftPipeline};
use lift_privacy::PrivacyEngine;
use lift_prompt::{PromptBuilder, NO_HISTORY_SENTINEL};
use lift_session::{InMemorySessionStore, SessionMemory};

// ── Test doubles ──────────────────────────────────────────────────────────

/// Records every prompt and replies with a fixed text or error.
struct RecordingGenerator {
    prompts: Mutex<Vec<String>>,
    reply: Result<String, GenerationError>,
}

impl RecordingGenerator {
    fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            prompts: Mutex::new(Vec::new()),
            reply: Ok(text.to_string()),
        })
    }

    fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            prompts: Mutex::new(Vec::new()),
            reply: Err(GenerationError::Failed {
                message: message.to_string(),
            }),
        })
    }

    fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl IGenerator for RecordingGenerator {
    fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply.clone()
    }
}

struct BrokenSanitizer;

impl ISanitizer for BrokenSanitizer {
    fn sanitize(&self, _text: &str) -> Result<SanitizedText, ScrubbingError> {
        Err(ScrubbingError::DetectorFailed {
            reason: "pattern registry offline".to_string(),
        })
    }
}

struct Harness {
    pipeline: LiftPipeline,
    generator: Arc<RecordingGenerator>,
    store: Arc<InMemorySessionStore>,
}

fn harness_with(
    sanitizer: Arc<dyn ISanitizer>,
    generator: Arc<RecordingGenerator>,
    session: SessionConfig,
) -> Harness {
    let config = LiftConfig {
        session,
        ..LiftConfig::default()
    };
    let store = Arc::new(InMemorySessionStore::new(&config.session));
    let memory = SessionMemory::new(store.clone(), &config.session).unwrap();
    let pipeline = LiftPipeline::new(
        config,
        sanitizer,
        memory,
        PromptBuilder::new(),
        generator.clone(),
    );
    Harness {
        pipeline,
        generator,
        store,
    }
}

fn harness(generator: Arc<RecordingGenerator>) -> Harness {
    harness_with(
        Arc::new(PrivacyEngine::default()),
        generator,
        SessionConfig::default(),
    )
}

fn request(instructions: &str, pasted: &str) -> GenerationRequest {
    GenerationRequest {
        pasted_text: pasted.to_string(),
        instructions: instructions.to_string(),
        use_case: "none".to_string(),
        ..GenerationRequest::default()
    }
}

// ── Input validation ──────────────────────────────────────────────────────

#[test]
fn empty_request_is_input_error() {
    let h = harness(RecordingGenerator::replying("unused"));
    let err = h
        .pipeline
        .handle(&SessionId::from("s"), request("  ", "\n"))
        .unwrap_err();
    assert_eq!(err, LiftError::Input(InputError::NothingProvided));
    assert_eq!(
        err.to_string(),
        "Provide text via upload, paste, or instructions."
    );
    assert!(h.generator.prompts().is_empty());
}

#[test]
fn oversized_upload_is_rejected() {
    let mut config = LiftConfig::default();
    config.input.max_upload_bytes = 4;
    let store = Arc::new(InMemorySessionStore::new(&config.session));
    let memory = SessionMemory::new(store, &config.session).unwrap();
    let generator = RecordingGenerator::replying("unused");
    let pipeline = LiftPipeline::new(
        config,
        Arc::new(PrivacyEngine::default()),
        memory,
        PromptBuilder::new(),
        generator.clone(),
    );
    let req = GenerationRequest {
        upload: Some(b"too many bytes".to_vec()),
        ..GenerationRequest::default()
    };
    let err = pipeline.handle(&SessionId::from("s"), req).unwrap_err();
    assert_eq!(err.error_code(), "UPLOAD_TOO_LARGE");
    assert!(generator.prompts().is_empty());
}

#[test]
fn instructions_alone_are_enough() {
    let h = harness(RecordingGenerator::replying("ok"));
    let response = h
        .pipeline
        .handle(&SessionId::from("s"), request("Write a syllabus outline", ""))
        .unwrap();
    assert_eq!(response.generated_text, "ok");
}

// ── Privacy boundary ──────────────────────────────────────────────────────

#[test]
fn email_never_reaches_generator() {
    let h = harness(RecordingGenerator::replying("Done."));
    let response = h
        .pipeline
        .handle(
            &SessionId::from("s"),
            request("Email Alice at alice@example.com", "Office hours are Tuesday."),
        )
        .unwrap();

    let prompts = h.generator.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(!prompts[0].contains("alice@example.com"));
    assert!(prompts[0].contains("[EMAIL_1]"));
    assert!(response.redaction_count >= 1);
}

#[test]
fn scrubbing_failure_fails_closed() {
    let h = harness_with(
        Arc::new(BrokenSanitizer),
        RecordingGenerator::replying("unused"),
        SessionConfig::default(),
    );
    let sid = SessionId::from("s");
    let err = h
        .pipeline
        .handle(&sid, request("Call 555-123-4567", ""))
        .unwrap_err();

    assert!(matches!(err, LiftError::Scrubbing(_)));
    assert!(h.generator.prompts().is_empty());
    assert!(h.pipeline.memory().get(&sid).unwrap().is_empty());
}

#[test]
fn stored_history_is_sanitized() {
    let h = harness(RecordingGenerator::replying(
        "Sent a note to bob@example.org about the quiz.",
    ));
    let sid = SessionId::from("s");
    let response = h
        .pipeline
        .handle(&sid, request("Email Alice at alice@example.com", ""))
        .unwrap();

    // The caller gets the reply as generated.
    assert!(response.generated_text.contains("bob@example.org"));

    let history = h.pipeline.memory().get(&sid).unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].role, Role::User);
    assert_eq!(history[0].content, "Email Alice at [EMAIL_1]");
    assert_eq!(history[1].role, Role::Assistant);
    assert!(!history[1].content.contains("bob@example.org"));
}

// ── Generation failures ───────────────────────────────────────────────────

#[test]
fn generation_failure_leaves_history_untouched() {
    let sid = SessionId::from("s");
    let ok = harness(RecordingGenerator::replying("first reply"));
    ok.pipeline.handle(&sid, request("Summarize", "Chapter 1")).unwrap();
    let before = ok.pipeline.memory().snapshot(&sid).unwrap();

    // Same store, failing generator.
    let failing = RecordingGenerator::failing("upstream quota exceeded");
    let memory = SessionMemory::new(ok.store.clone(), &SessionConfig::default()).unwrap();
    let pipeline = LiftPipeline::new(
        LiftConfig::default(),
        Arc::new(PrivacyEngine::default()),
        memory,
        PromptBuilder::new(),
        failing.clone(),
    );
    let err = pipeline
        .handle(&sid, request("Now a quiz", "Chapter 2"))
        .unwrap_err();

    assert_eq!(err.to_string(), "upstream quota exceeded");
    assert_eq!(err.error_code(), "GENERATION_ERROR");
    assert!(!err.is_retryable());
    assert_eq!(ok.store.load(&sid).unwrap(), before);
}

// ── Session flow ──────────────────────────────────────────────────────────

#[test]
fn history_feeds_the_next_prompt() {
    let h = harness(RecordingGenerator::replying("Here is a summary."));
    let sid = SessionId::from("s");
    h.pipeline.handle(&sid, request("Summarize", "Photosynthesis notes")).unwrap();
    let second = h.pipeline.handle(&sid, request("Now a quiz", "")).unwrap();

    let prompts = h.generator.prompts();
    assert!(prompts[0].contains(NO_HISTORY_SENTINEL));
    assert!(prompts[1].contains("USER:\nSummarize\nASSISTANT:\nHere is a summary.\n"));
    assert_eq!(second.history_len, 4);
}

#[test]
fn history_is_capped_at_whole_exchanges() {
    let h = harness(RecordingGenerator::replying("reply"));
    let sid = SessionId::from("s");
    for i in 0..5 {
        let response = h
            .pipeline
            .handle(&sid, request(&format!("request {i}"), ""))
            .unwrap();
        assert!(response.history_len <= 6);
    }
    let history = h.pipeline.memory().get(&sid).unwrap();
    assert_eq!(history.len(), 6);
    assert_eq!(history[0].content, "request 2");
    assert_eq!(history[0].role, Role::User);
}

#[test]
fn long_exchange_survives_default_limits() {
    let reply = "The quiz covers chlorophyll and stomata. ".repeat(60);
    let h = harness(RecordingGenerator::replying(&reply));
    let sid = SessionId::from("s");
    let first = h.pipeline.handle(&sid, request("Summarize", "Short notes")).unwrap();
    assert_eq!(first.history_len, 2);

    let paste = "Photosynthesis converts light into chemical energy. ".repeat(61);
    assert!(paste.len() > 3_000);
    let second = h.pipeline.handle(&sid, request("", &paste)).unwrap();

    let history = h.pipeline.memory().get(&sid).unwrap();
    assert_eq!(history.len(), 4);
    assert_eq!(second.history_len, history.len());
    let max_chars = SessionConfig::default().max_turn_chars;
    assert_eq!(history[2].content.chars().count(), max_chars);
    assert!(history[2].content.starts_with("Photosynthesis converts"));
    assert_eq!(history[3].content.chars().count(), max_chars);
}

#[test]
fn unknown_use_case_falls_back() {
    let h = harness(RecordingGenerator::replying("ok"));
    let mut req = request("Help", "");
    req.use_case = "uc99".to_string();
    h.pipeline.handle(&SessionId::from("s"), req).unwrap();
    assert!(h.generator.prompts()[0].contains("Use Case (General Support):"));
}

#[test]
fn concurrent_commit_is_retryable_conflict() {
    let h = harness(RecordingGenerator::replying("ok"));
    let sid = SessionId::from("tab");
    // Another tab commits between this request's read and its write.
    let racing = RacingGenerator {
        store: h.store.clone(),
        sid: sid.clone(),
    };
    let config = LiftConfig::default();
    let memory = SessionMemory::new(h.store.clone(), &config.session).unwrap();
    let pipeline = LiftPipeline::new(
        config,
        Arc::new(PrivacyEngine::default()),
        memory,
        PromptBuilder::new(),
        Arc::new(racing),
    );

    let err = pipeline.handle(&sid, request("Quiz", "")).unwrap_err();
    assert!(matches!(
        err,
        LiftError::Session(SessionError::VersionConflict { expected: 0, actual: 1, .. })
    ));
    assert!(err.is_retryable());
    assert_eq!(err.error_code(), "SESSION_CONFLICT");
}

struct RacingGenerator {
    store: Arc<InMemorySessionStore>,
    sid: SessionId,
}

impl IGenerator for RacingGenerator {
    fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
        let version = self.store.load(&self.sid).unwrap().version;
        self.store
            .compare_and_swap(&self.sid, version, Vec::new())
            .unwrap();
        Ok("late".to_string())
    }
}

// ── Uploads ───────────────────────────────────────────────────────────────

#[test]
fn lossy_upload_warns_and_continues() {
    let h = harness(RecordingGenerator::replying("ok"));
    let req = GenerationRequest {
        upload: Some(b"Lecture \xFF\xFEnotes".to_vec()),
        pasted_text: "  extra  ".to_string(),
        ..GenerationRequest::default()
    };
    let response = h.pipeline.handle(&SessionId::from("s"), req).unwrap();

    let warning = response.decode_warning.unwrap();
    assert_eq!(warning.dropped_bytes, 2);
    assert!(h.generator.prompts()[0].contains("Content:\nLecture notes\nextra\n"));
}
