//! Host-side renderers
//!
//! The device draws to its framebuffer; on a host we log frames or keep them
//! around for inspection.

use crate::error::CollaboratorFault;
use crate::sim::RenderRequest;

use super::Renderer;

/// Logs the score when it changes, full frames at trace level
#[derive(Debug, Default)]
pub struct LogRenderer {
    last_score: Option<u32>,
    frames: u64,
}

impl LogRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for LogRenderer {
    fn present(&mut self, frame: &RenderRequest) -> Result<(), CollaboratorFault> {
        if self.last_score != Some(frame.score) {
            log::info!("{}", frame.score_text);
            self.last_score = Some(frame.score);
        }
        if log::log_enabled!(log::Level::Trace) {
            let json = serde_json::to_string(frame)
                .map_err(|e| CollaboratorFault::Render(e.to_string()))?;
            log::trace!("frame {}: {}", self.frames, json);
        }
        self.frames += 1;
        Ok(())
    }
}

/// Keeps every presented frame; can be switched into a failing mode
#[derive(Debug, Default)]
pub struct FrameRecorder {
    pub frames: Vec<RenderRequest>,
    fail_with: Option<String>,
}

impl FrameRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following `present` fail with `reason`
    pub fn fail_with(&mut self, reason: impl Into<String>) {
        self.fail_with = Some(reason.into());
    }

    pub fn recover(&mut self) {
        self.fail_with = None;
    }

    pub fn last(&self) -> Option<&RenderRequest> {
        self.frames.last()
    }
}

impl Renderer for FrameRecorder {
    fn present(&mut self, frame: &RenderRequest) -> Result<(), CollaboratorFault> {
        if let Some(reason) = &self.fail_with {
            return Err(CollaboratorFault::Render(reason.clone()));
        }
        self.frames.push(frame.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::GameState;

    fn frame() -> RenderRequest {
        let config = GameConfig::default();
        RenderRequest::capture(&GameState::new(&config, 0), &config)
    }

    #[test]
    fn test_recorder_keeps_frames() {
        let mut recorder = FrameRecorder::new();
        recorder.present(&frame()).unwrap();
        recorder.present(&frame()).unwrap();
        assert_eq!(recorder.frames.len(), 2);
        assert_eq!(recorder.last().unwrap().score_text, "SCORE: 000");
    }

    #[test]
    fn test_recorder_failure_mode() {
        let mut recorder = FrameRecorder::new();
        recorder.fail_with("spi bus busy");
        assert_eq!(
            recorder.present(&frame()),
            Err(CollaboratorFault::Render("spi bus busy".into()))
        );
        assert!(recorder.frames.is_empty());

        recorder.recover();
        assert!(recorder.present(&frame()).is_ok());
    }

    #[test]
    fn test_log_renderer_counts_frames() {
        let mut renderer = LogRenderer::new();
        renderer.present(&frame()).unwrap();
        renderer.present(&frame()).unwrap();
        assert_eq!(renderer.frames(), 2);
    }
}
