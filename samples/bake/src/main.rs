use std::{fs, io, path::PathBuf, process::ExitCode};

use clap::Parser;
use meshbake::{math::RngSource, BakeConfig, Mesh, Scene, Transform};
use rand::{rngs::StdRng, SeedableRng};

mod cli;
mod demo;

use cli::Cli;

#[derive(Debug, thiserror::Error)]
enum Error {
    #[error("couldn't read {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("couldn't write {path:?}: {source}")]
    Write { path: PathBuf, source: io::Error },
    #[error("in {path:?}: {source}")]
    Import {
        path: PathBuf,
        source: meshbake::mesh::Error,
    },
    #[error(transparent)]
    Scene(#[from] meshbake::Error),
}

impl From<meshbake::scene::Error<u32>> for Error {
    fn from(value: meshbake::scene::Error<u32>) -> Self {
        Self::Scene(value.into())
    }
}

#[tracing::instrument(skip(cli), fields(files = cli.files.len()))]
fn run(cli: &Cli) -> Result<(), Error> {
    let mut scene = Scene::<u32>::new();

    let seed = cli.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, "building demo scene");
    let mut source = RngSource(StdRng::seed_from_u64(seed));
    demo::build(&mut scene, &mut source, cli.detail)?;

    for path in &cli.files {
        let bytes = fs::read(path).map_err(|source| Error::Read {
            path: path.clone(),
            source,
        })?;
        let mesh = Mesh::from_bytes(&bytes).map_err(|source| Error::Import {
            path: path.clone(),
            source,
        })?;
        tracing::info!(?path, vertices = mesh.vertex_count(), "imported raw mesh");
        if mesh.vertex_count() % 3 != 0 {
            tracing::warn!(?path, "vertex count isn't a multiple of 3; the last triangle is incomplete");
        }
        scene.add(mesh.with_transform(Transform::from_position(cli.import_offset)))?;
    }

    let bytes = scene.bake_bytes_with(&BakeConfig {
        max_depth: cli.max_depth,
    })?;
    fs::write(&cli.output, &bytes).map_err(|source| Error::Write {
        path: cli.output.clone(),
        source,
    })?;
    tracing::info!(
        nodes = scene.node_count(),
        vertices = bytes.len() / meshbake::mesh::VERTEX_SIZE,
        output = ?cli.output,
        "wrote baked scene"
    );
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli::initialize_tracing(&cli.log_filter, cli.log_format);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
