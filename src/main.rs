use groq_speech::{
    config::Config,
    errors::constants::DEFAULT_OUTPUT_PATH,
    trace::init_tracing_subscriber,
    GroqTTS, SpeechRequest, SynthesisInvoker,
};
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load config
    let config = Config::load()?;

    init_tracing_subscriber(config.log_level.as_deref());

    let tts = GroqTTS::with_base_url(config.api_key.clone(), config.base_url())?;
    let invoker = SynthesisInvoker::new(tts);
    let request = SpeechRequest::default();

    info!(model = %request.model, voice = %request.voice, "Synthesizing speech");

    if let Err(why) = invoker
        .synthesize_and_save(&request, DEFAULT_OUTPUT_PATH)
        .await
    {
        error!("Synthesis failed: {}", why);
        return Err(why.into());
    }

    info!("Wrote {}", DEFAULT_OUTPUT_PATH);

    Ok(())
}
