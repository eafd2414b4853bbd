use crate::client::ChatClient;
use crate::config::Settings;
use crate::prelude::{eprintln, *};
use pd2st_core::convert::{
    build_user_payload, strip_fences, validate, Artifact, ConversionRequest, Notice, NoticeLevel,
    SYSTEM_PROMPT,
};
use std::path::{Path, PathBuf};
use tokio::io::{AsyncReadExt, AsyncWrite, AsyncWriteExt};

#[derive(Debug, clap::Parser)]
#[command(name = "convert")]
#[command(about = "Convert a pandas snippet into a Streamlit app")]
pub struct App {
    /// File holding the pandas code (reads stdin when omitted)
    #[clap(long, short)]
    pub file: Option<PathBuf>,

    /// Additional change request for the generated app
    #[clap(long, short)]
    pub change: Option<String>,

    /// Write the generated app to this path instead of stdout
    #[clap(long, short)]
    pub output: Option<PathBuf>,
}

/// Turn one request into a downloadable app.
///
/// This is the only error boundary of a conversion: anything that goes wrong
/// after validation becomes a single error notice.
pub async fn generate(
    settings: &Settings,
    http: &reqwest::Client,
    request: &ConversionRequest,
) -> std::result::Result<Artifact, Notice> {
    let api_key = validate(settings.api_key.as_deref(), request)?;

    let payload = build_user_payload(request);
    let client = ChatClient::new(http.clone(), &settings.base_url, api_key);

    let response = client
        .complete(SYSTEM_PROMPT, &payload)
        .await
        .map_err(|e| {
            log::warn!("Generation failed: {e}");
            Notice::error(f!("An error occurred: {e}"))
        })?;

    Ok(Artifact::python(strip_fences(&response)))
}

pub async fn run(app: App, global: crate::Global, settings: Settings) -> Result<()> {
    let pandas_code = match &app.file {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| f!("Failed to read file '{}'", path.display()))?,
        None => {
            let mut buffer = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buffer)
                .await
                .context("Failed to read pandas code from stdin")?;
            buffer
        }
    };

    let request = ConversionRequest::new(pandas_code, app.change);

    if global.verbose {
        eprintln!("Code length: {} chars", request.pandas_code.len());
        eprintln!("Generating code...");
    }

    let artifact = generate(&settings, &reqwest::Client::new(), &request)
        .await
        .map_err(|notice| match notice.level {
            NoticeLevel::Warning => eyre!("Warning: {}", notice.message),
            NoticeLevel::Error => eyre!("{}", notice.message),
        })?;

    deliver(&artifact, app.output.as_deref(), &mut tokio::io::stdout()).await?;

    if global.verbose {
        if let Some(path) = &app.output {
            eprintln!("Wrote {}", path.display());
        }
    }

    Ok(())
}

/// Write the artifact's exact bytes to `output`, or to `stdout` when no path is given.
async fn deliver<W>(artifact: &Artifact, output: Option<&Path>, stdout: &mut W) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    match output {
        Some(path) => tokio::fs::write(path, &artifact.content)
            .await
            .with_context(|| f!("Failed to write '{}'", path.display()))?,
        None => {
            stdout.write_all(artifact.content.as_bytes()).await?;
            stdout.flush().await?;
        }
    }

    Ok(())
}
