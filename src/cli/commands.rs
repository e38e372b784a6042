use crate::{
    cli::args::{CompileArgs, ListArgs},
    core::{
        config::PubxmlConfig,
        error::AppError,
        publishers::{load_jobs, Diagnostics, JobDefinition, PublisherRegistry},
        xml::{to_document, WriterOptions},
    },
    Result,
};
use anyhow::{anyhow, Context};
use std::{
    collections::HashSet,
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};
use tracing::{info, warn};

/// One compiled job ready to be written.
#[derive(Debug)]
pub struct RenderedJob {
    pub name: String,
    pub xml: String,
    pub warnings: usize,
}

/// Compile every job in `jobs`, failing on the first fatal error.
pub fn render_jobs(
    registry: &PublisherRegistry,
    jobs: &[JobDefinition],
    options: WriterOptions,
) -> Result<Vec<RenderedJob>> {
    let mut rendered = Vec::with_capacity(jobs.len());
    for job in jobs {
        let mut diagnostics = Diagnostics::new();
        let project = job.compile(registry, &mut diagnostics)?;
        let xml = to_document(&project, options)
            .map_err(|err| AppError::from(err).with_entry("job", job.name.as_str()))?;
        if !diagnostics.is_empty() {
            warn!(job = %job.name, warnings = diagnostics.len(), "job compiled with warnings");
        }
        rendered.push(RenderedJob {
            name: job.name.clone(),
            xml,
            warnings: diagnostics.len(),
        });
    }
    Ok(rendered)
}

pub fn compile(args: CompileArgs, config: &PubxmlConfig) -> Result<()> {
    let jobs = load_jobs(&args.file)?;
    let rendered = render_jobs(
        PublisherRegistry::global(),
        &jobs,
        config.output.writer_options(),
    )?;

    match args.output_dir {
        Some(dir) => {
            let written = write_jobs(&dir, &rendered)?;
            for path in &written {
                println!("{}", path.display());
            }
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            for job in &rendered {
                out.write_all(job.xml.as_bytes())
                    .context("failed to write to stdout")?;
            }
        }
    }

    info!(
        file = %args.file.display(),
        jobs = rendered.len(),
        "compilation finished"
    );
    Ok(())
}

/// Write each job to `<dir>/<name>.xml`, creating `dir` when needed.
pub fn write_jobs(dir: &Path, jobs: &[RenderedJob]) -> Result<Vec<PathBuf>> {
    let mut seen = HashSet::new();
    for job in jobs {
        if !is_safe_file_stem(&job.name) {
            return Err(anyhow!(
                "job name '{}' cannot be used as a file name",
                job.name
            ));
        }
        if !seen.insert(job.name.as_str()) {
            return Err(anyhow!("job '{}' is defined more than once", job.name));
        }
    }

    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;

    let mut written = Vec::with_capacity(jobs.len());
    for job in jobs {
        let path = dir.join(format!("{}.xml", job.name));
        fs::write(&path, &job.xml)
            .with_context(|| format!("failed to write {}", path.display()))?;
        written.push(path);
    }
    Ok(written)
}

fn is_safe_file_stem(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\', '\0'])
}

pub fn list(_args: ListArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for name in PublisherRegistry::global().names() {
        writeln!(out, "{}", name).context("failed to write to stdout")?;
    }
    Ok(())
}
