use std::path::PathBuf;

use clap::ValueHint;
use meshbake::mesh;
use nalgebra::Vector3;

use std::str::FromStr;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, clap::ValueEnum)]
pub enum LogFormat {
    Compact,
    Full,
    Pretty,
    Json,
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Compact => f.write_str("compact"),
            LogFormat::Full => f.write_str("full"),
            LogFormat::Pretty => f.write_str("pretty"),
            LogFormat::Json => f.write_str("json"),
        }
    }
}

#[derive(Debug, clap::Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Logging output filters; comma-separated
    #[arg(
        short,
        long,
        default_value = "warn,meshbake=info,bake=info",
        env = "MESHBAKE_LOG_FILTER"
    )]
    pub log_filter: String,
    /// Logging output format
    #[arg(long, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
    /// Seed for the demo scene's random placements; drawn from the OS if omitted
    #[arg(short, long, env = "MESHBAKE_SEED")]
    pub seed: Option<u64>,
    /// Icosphere subdivision level used by the demo scene
    #[arg(
        short,
        long,
        default_value_t = mesh::ICOSPHERE_DEFAULT_RESOLUTION,
        value_parser = clap::value_parser!(u32)
            .range(mesh::ICOSPHERE_RESOLUTION.0 as i64..=mesh::ICOSPHERE_RESOLUTION.1 as i64)
    )]
    pub detail: u32,
    /// Deepest scene node the baker will visit
    #[arg(long, default_value_t = meshbake::scene::DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,
    /// Offset applied to each imported vertex file
    #[arg(long, default_value = "0,0,0", value_parser = parse_vec3::<f32>, value_name = "X,Y,Z")]
    pub import_offset: Vector3<f32>,
    /// Where to write the baked vertex buffer
    #[arg(short, long, default_value = "scene.bin", value_hint = ValueHint::FilePath)]
    pub output: PathBuf,
    /// Raw vertex files to add to the scene
    #[arg(num_args = 0.., value_hint = ValueHint::FilePath)]
    pub files: Vec<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
#[error("expected three comma-separated components, found {0}")]
struct ComponentCount(usize);

fn parse_vec3<R: FromStr>(
    s: &str,
) -> Result<Vector3<R>, Box<dyn std::error::Error + Send + Sync + 'static>>
where
    <R as FromStr>::Err: std::error::Error + Send + Sync + 'static,
{
    let parts: Vec<&str> = s.trim().split(',').map(str::trim).collect();
    let [x, y, z] = parts.as_slice() else {
        return Err(ComponentCount(parts.len()).into());
    };
    Ok(nalgebra::vector![R::from_str(x)?, R::from_str(y)?, R::from_str(z)?])
}

/// Set up pretty log output
pub(crate) fn initialize_tracing(log_filter: &str, log_format: LogFormat) {
    let tsub = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::OffsetTime::new(
            time::UtcOffset::current_local_offset().unwrap_or_else(|e| {
                tracing::warn!("couldn't get local time offset: {:?}", e);
                time::UtcOffset::UTC
            }),
            time::macros::format_description!("[hour]:[minute]:[second]"),
        ))
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_env_filter(log_filter);

    match log_format {
        LogFormat::Compact => tsub.compact().init(),
        LogFormat::Full => tsub.init(),
        LogFormat::Pretty => tsub.pretty().init(),
        LogFormat::Json => tsub.json().init(),
    }
}
