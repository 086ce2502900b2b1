//! Optimization pipeline driver

use crate::config::Config;
use crate::error::{Result, ResumeOptimizerError};
use crate::input::{InputManager, ResumeUpload};
use crate::output::report::{OptimizationReport, ReportMetadata};
use crate::processing::keyword_extractor::KeywordExtractor;
use crate::processing::random::RandomSource;
use crate::processing::requirements::RequirementsAnalyzer;
use crate::processing::scorer::MatchScorer;
use crate::processing::suggestions::SuggestionGenerator;
use crate::processing::synthesizer::ResumeSynthesizer;
use log::{debug, info};
use std::time::{Duration, Instant};

/// Presentation state for a single optimize action
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Processing,
    Completed(Box<OptimizationReport>),
    Failed(String),
}

impl SessionState {
    /// Enter `Processing`; refused while a run is already in flight
    pub fn begin(&mut self) -> Result<()> {
        if self.is_processing() {
            return Err(ResumeOptimizerError::Busy);
        }
        *self = SessionState::Processing;
        Ok(())
    }

    pub fn finish(&mut self, result: &Result<OptimizationReport>) {
        *self = match result {
            Ok(report) => SessionState::Completed(Box::new(report.clone())),
            Err(e) => SessionState::Failed(e.to_string()),
        };
    }

    pub fn is_processing(&self) -> bool {
        matches!(self, SessionState::Processing)
    }

    pub fn report(&self) -> Option<&OptimizationReport> {
        match self {
            SessionState::Completed(report) => Some(report.as_ref()),
            _ => None,
        }
    }
}

pub struct ResumeOptimizer {
    input_manager: InputManager,
    extractor: KeywordExtractor,
    suggestion_generator: SuggestionGenerator,
    scorer: MatchScorer,
    delay: Duration,
}

impl ResumeOptimizer {
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            input_manager: InputManager::new(config.input.clone()),
            extractor: KeywordExtractor::with_additional_terms(
                config.keywords.max_keywords,
                &config.keywords.additional_terms,
            )?,
            suggestion_generator: SuggestionGenerator::new(&config.suggestions),
            scorer: MatchScorer::new(config.scoring.clone()),
            delay: Duration::from_millis(config.processing.delay_ms),
        })
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn input_manager(&self) -> &InputManager {
        &self.input_manager
    }

    /// Run every pipeline stage on already validated text
    pub fn optimize(
        &self,
        resume_text: &str,
        job_description: &str,
        source_file_name: &str,
        rng: &mut dyn RandomSource,
    ) -> OptimizationReport {
        let started = Instant::now();

        let keywords = self.extractor.extract(job_description);
        debug!("Keywords: {:?}", keywords.texts());

        let job_requirements = RequirementsAnalyzer::analyze(job_description);
        debug!("Requirements: {:?}", job_requirements);

        let suggestions = self.suggestion_generator.generate(rng);
        let breakdown = self.scorer.score(resume_text, &keywords, rng);
        let optimized_resume_text =
            ResumeSynthesizer::synthesize(resume_text, &keywords, &job_requirements);

        OptimizationReport {
            optimized_resume_text,
            keywords,
            matched_keywords: breakdown.matched_keywords,
            suggestions,
            match_score: breakdown.score,
            source_file_name: source_file_name.to_string(),
            job_requirements,
            metadata: ReportMetadata::new(started.elapsed().as_millis() as u64),
        }
    }

    /// Validate inputs, read the resume, wait the configured delay, then optimize.
    /// Every validation error is raised before any processing starts.
    pub async fn run(
        &mut self,
        upload: Option<&ResumeUpload>,
        job_description: Option<&str>,
        rng: &mut dyn RandomSource,
    ) -> Result<OptimizationReport> {
        let started = Instant::now();

        let upload = self.input_manager.validate_upload(upload)?;
        let job_description = self.input_manager.validate_job_description(job_description)?;
        let resume_text = self.input_manager.extract_text(upload)?;

        info!(
            "Optimizing '{}' against a {}-character job description",
            upload.file_name,
            job_description.chars().count()
        );

        if !self.delay.is_zero() {
            debug!("Simulating processing for {}ms", self.delay.as_millis());
            tokio::time::sleep(self.delay).await;
        }

        let mut report = self.optimize(&resume_text, job_description, &upload.file_name, rng);
        report.metadata.processing_time_ms = started.elapsed().as_millis() as u64;

        info!(
            "Optimization complete: {} keywords, score {}%",
            report.keywords.len(),
            report.match_score
        );
        Ok(report)
    }

    /// `run` wrapped in session bookkeeping
    pub async fn run_session(
        &mut self,
        state: &mut SessionState,
        upload: Option<&ResumeUpload>,
        job_description: Option<&str>,
        rng: &mut dyn RandomSource,
    ) -> Result<OptimizationReport> {
        state.begin()?;
        let result = self.run(upload, job_description, rng).await;
        state.finish(&result);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::random::ScriptedRandom;

    const JOB: &str = "Senior Python Developer, remote role. You will build services with \
                       Docker and AWS and lead by example through clear communication.";

    fn optimizer() -> ResumeOptimizer {
        ResumeOptimizer::new(&Config::default())
            .unwrap()
            .with_delay(Duration::ZERO)
    }

    fn text_upload(content: &str) -> ResumeUpload {
        ResumeUpload::new("resume.txt", "text/plain", content.as_bytes().to_vec())
    }

    #[test]
    fn test_optimize_is_deterministic_with_scripted_source() {
        let optimizer = optimizer();
        let resume = "Jane Roe\nPython engineer shipping Docker images";

        let first = optimizer.optimize(resume, JOB, "resume.txt", &mut ScriptedRandom::new(vec![4, 20]));
        let second = optimizer.optimize(resume, JOB, "resume.txt", &mut ScriptedRandom::new(vec![4, 20]));

        assert_eq!(first.keywords, second.keywords);
        assert_eq!(first.suggestions, second.suggestions);
        assert_eq!(first.match_score, second.match_score);
        assert_eq!(first.suggestions.len(), 4);
    }

    #[test]
    fn test_optimize_report_contents() {
        let optimizer = optimizer();
        let report = optimizer.optimize(
            "Python and Docker",
            JOB,
            "resume.txt",
            &mut ScriptedRandom::new(vec![4, 15]),
        );

        assert_eq!(
            report.keywords.texts(),
            vec!["Python", "AWS", "Docker", "Communication", "Senior", "Lead"]
        );
        assert_eq!(report.matched_keywords, vec!["Python", "Docker"]);
        // floor(2/6 * 70) = 23, plus bonus 15
        assert_eq!(report.match_score, 38);
        assert!(report.job_requirements.remote);
        assert_eq!(report.source_file_name, "resume.txt");
    }

    #[tokio::test]
    async fn test_run_rejects_short_job_description() {
        let mut optimizer = optimizer();
        let upload = text_upload("Python");
        let result = optimizer
            .run(Some(&upload), Some("Too short"), &mut ScriptedRandom::new(vec![]))
            .await;
        assert!(matches!(
            result,
            Err(ResumeOptimizerError::JobDescriptionTooShort { actual: 9, minimum: 50 })
        ));
        assert_eq!(optimizer.input_manager().cache_size(), 0);
    }

    #[tokio::test]
    async fn test_run_rejects_missing_file_first() {
        let mut optimizer = optimizer();
        let result = optimizer.run(None, None, &mut ScriptedRandom::new(vec![])).await;
        assert!(matches!(result, Err(ResumeOptimizerError::MissingFile)));
    }

    #[tokio::test]
    async fn test_run_unsupported_type_never_extracts() {
        let mut optimizer = optimizer();
        let upload = ResumeUpload::new("resume.png", "image/png", vec![1, 2, 3]);
        let result = optimizer
            .run(Some(&upload), Some(JOB), &mut ScriptedRandom::new(vec![]))
            .await;
        assert!(matches!(result, Err(ResumeOptimizerError::UnsupportedFileType(_))));
        assert_eq!(optimizer.input_manager().cache_size(), 0);
    }

    #[tokio::test]
    async fn test_run_waits_for_delay() {
        let mut optimizer = optimizer().with_delay(Duration::from_millis(30));
        let upload = text_upload("Python");
        let started = Instant::now();
        let report = optimizer
            .run(Some(&upload), Some(JOB), &mut ScriptedRandom::new(vec![5, 20]))
            .await
            .unwrap();
        assert!(started.elapsed() >= Duration::from_millis(30));
        assert!(report.metadata.processing_time_ms >= 30);
    }

    #[tokio::test]
    async fn test_session_state_transitions() {
        let mut optimizer = optimizer();
        let mut state = SessionState::default();
        let upload = text_upload("Python");

        let report = optimizer
            .run_session(&mut state, Some(&upload), Some(JOB), &mut ScriptedRandom::new(vec![5, 20]))
            .await
            .unwrap();
        assert_eq!(state.report(), Some(&report));

        let result = optimizer
            .run_session(&mut state, None, Some(JOB), &mut ScriptedRandom::new(vec![]))
            .await;
        assert!(result.is_err());
        assert_eq!(
            state,
            SessionState::Failed("Please upload your resume first".to_string())
        );
    }

    #[test]
    fn test_session_refuses_reentry() {
        let mut state = SessionState::default();
        state.begin().unwrap();
        assert!(matches!(state.begin(), Err(ResumeOptimizerError::Busy)));
        assert!(state.is_processing());
    }
}
