use crate::constants::{ANALYSER_FFT_SIZE, ANALYSER_SMOOTHING};
use web_sys as web;

/// `media → analyser → destination`, plus the byte buffer the visualizer
/// reads each frame.
pub struct AudioGraph {
    ctx: web::AudioContext,
    analyser: web::AnalyserNode,
    _source: web::MediaElementAudioSourceNode,
    freq: Vec<u8>,
}

// Create analyser configured for the bar visualizer
fn create_analyser(audio_ctx: &web::AudioContext) -> anyhow::Result<web::AnalyserNode> {
    let analyser = web::AnalyserNode::new(audio_ctx).map_err(|e| anyhow::anyhow!("{:?}", e))?;
    analyser.set_fft_size(ANALYSER_FFT_SIZE);
    analyser.set_smoothing_time_constant(ANALYSER_SMOOTHING);
    Ok(analyser)
}

impl AudioGraph {
    fn build(media: &web::HtmlMediaElement) -> anyhow::Result<Self> {
        let ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let analyser = create_analyser(&ctx)?;
        let source = ctx
            .create_media_element_source(media)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        source
            .connect_with_audio_node(&analyser)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        analyser
            .connect_with_audio_node(&ctx.destination())
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let bins = analyser.frequency_bin_count() as usize;
        Ok(Self {
            ctx,
            analyser,
            _source: source,
            freq: vec![0; bins],
        })
    }

    /// Contexts created before a gesture start suspended.
    pub fn resume_if_suspended(&self) {
        if self.ctx.state() == web::AudioContextState::Suspended {
            _ = self.ctx.resume();
        }
    }

    /// Current byte spectrum, refreshed from the analyser.
    pub fn frequency_data(&mut self) -> &[u8] {
        self.analyser.get_byte_frequency_data(&mut self.freq);
        &self.freq
    }
}

/// The page's single audio graph.
///
/// Building it needs a user gesture, so it starts empty and is filled by
/// [`AudioSlot::ensure`] from a click handler. Once built it lives for the
/// page; a failed build is not retried (the media element can only be
/// captured by one source node).
#[derive(Default)]
pub struct AudioSlot {
    graph: Option<AudioGraph>,
    failed: bool,
}

impl AudioSlot {
    /// Build the graph if needed and wake it up. Returns `true` if this call
    /// constructed it.
    pub fn ensure(&mut self, media: &web::HtmlMediaElement) -> bool {
        let built = if self.graph.is_none() && !self.failed {
            match AudioGraph::build(media) {
                Ok(g) => {
                    log::info!("[audio] analyser graph ready");
                    self.graph = Some(g);
                    true
                }
                Err(e) => {
                    log::debug!("[audio] graph unavailable, idle visuals only: {:?}", e);
                    self.failed = true;
                    false
                }
            }
        } else {
            false
        };
        if let Some(g) = &self.graph {
            g.resume_if_suspended();
        }
        built
    }

    #[inline]
    pub fn graph_mut(&mut self) -> Option<&mut AudioGraph> {
        self.graph.as_mut()
    }
}
