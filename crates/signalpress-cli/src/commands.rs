use std::collections::HashSet;
use std::io::Write;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use signalpress_engine::{
    Pipeline, PipelineOptions,
    parsing::{blocks::BlockKind, parse_document},
    repair_table_rows, slugify,
};

use crate::io;

/// Where `render` sends its HTML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
    /// `<dir>/<slug>.html`, named after the article.
    Dir(PathBuf),
}

pub fn render(input: &Path, destination: Destination, options: PipelineOptions) -> Result<()> {
    let pipeline = Pipeline::new(options)?;
    let markdown = io::read_input(input)?;
    let html = pipeline.convert(&markdown);

    match destination {
        Destination::Stdout => write_stdout(&html),
        Destination::File(path) => {
            io::write_file(&path, &html)?;
            log::info!("wrote {}", path.display());
            Ok(())
        }
        Destination::Dir(dir) => {
            let path = dir.join(output_name(&markdown, input));
            io::write_file(&path, &html)?;
            log::info!("wrote {}", path.display());
            Ok(())
        }
    }
}

pub fn repair(input: &Path) -> Result<()> {
    let markdown = io::read_input(input)?;
    write_stdout(&repair_table_rows(&markdown))
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub written: Vec<PathBuf>,
    pub failed: Vec<PathBuf>,
}

/// Renders every markdown file under `dir` into `out_dir`, spread over a
/// few scoped worker threads sharing one pipeline.
pub fn batch(dir: &Path, out_dir: &Path, options: PipelineOptions) -> Result<BatchReport> {
    let pipeline = Pipeline::new(options)?;
    let files = io::scan_markdown_files(dir)?;
    if files.is_empty() {
        log::warn!("no markdown files under {}", dir.display());
        return Ok(BatchReport::default());
    }

    let jobs = plan_outputs(&files, out_dir)?;
    let workers = std::thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(4)
        .min(jobs.len());
    let chunk = jobs.len().div_ceil(workers);
    log::debug!(
        "rendering {} file(s) with {workers} worker(s) using {}",
        jobs.len(),
        options.strategy
    );

    let results: Vec<(&Job, Result<()>)> = std::thread::scope(|s| {
        let handles: Vec<_> = jobs
            .chunks(chunk)
            .map(|part| {
                let pipeline = &pipeline;
                let handle = s.spawn(move || {
                    part.iter()
                        .map(|job| (job, render_job(pipeline, job)))
                        .collect::<Vec<_>>()
                });
                (part, handle)
            })
            .collect();
        handles
            .into_iter()
            .flat_map(|(part, h)| chunk_results(part, h.join()))
            .collect()
    });

    Ok(summarize(results))
}

/// Results of one worker. A worker that panicked fails all of its jobs.
fn chunk_results<'a>(
    part: &'a [Job],
    joined: std::thread::Result<Vec<(&'a Job, Result<()>)>>,
) -> Vec<(&'a Job, Result<()>)> {
    joined.unwrap_or_else(|_| {
        part.iter()
            .map(|job| (job, Err(anyhow!("render worker panicked"))))
            .collect()
    })
}

fn summarize(results: Vec<(&Job, Result<()>)>) -> BatchReport {
    let mut report = BatchReport::default();
    for (job, result) in results {
        match result {
            Ok(()) => report.written.push(job.target.clone()),
            Err(e) => {
                log::error!("failed to render {}: {e:#}", job.source.display());
                report.failed.push(job.source.clone());
            }
        }
    }
    report
}

struct Job {
    source: PathBuf,
    target: PathBuf,
    markdown: String,
}

fn render_job(pipeline: &Pipeline, job: &Job) -> Result<()> {
    io::write_file(&job.target, &pipeline.convert(&job.markdown))
        .with_context(|| format!("writing {}", job.target.display()))
}

/// Reads every source and picks a unique output path for it. Articles
/// whose name is already taken get `-2`, `-3`, ... suffixes in file order,
/// skipping any suffixed name another article already claimed.
fn plan_outputs(files: &[PathBuf], out_dir: &Path) -> Result<Vec<Job>> {
    let mut taken: HashSet<String> = HashSet::new();
    files
        .iter()
        .map(|source| {
            let markdown = io::read_input(source)
                .with_context(|| format!("reading {}", source.display()))?;
            let stem = output_stem(&markdown, source);
            let mut file_name = format!("{stem}.html");
            let mut n = 1;
            while !taken.insert(file_name.clone()) {
                n += 1;
                file_name = format!("{stem}-{n}.html");
            }
            Ok(Job {
                source: source.clone(),
                target: out_dir.join(file_name),
                markdown,
            })
        })
        .collect()
}

/// `<slug>.html` for an article, from its first level-one heading or else
/// the source file name.
pub fn output_name(markdown: &str, source: &Path) -> String {
    format!("{}.html", output_stem(markdown, source))
}

fn output_stem(markdown: &str, source: &Path) -> String {
    let from_title = article_title(markdown).map(slugify).unwrap_or_default();
    if !from_title.is_empty() {
        return from_title;
    }
    let from_file = source
        .file_stem()
        .map(|stem| slugify(&stem.to_string_lossy()))
        .unwrap_or_default();
    if from_file.is_empty() || from_file == io::STDIN {
        "article".to_string()
    } else {
        from_file
    }
}

/// Text of the first level-one heading. Lines inside code fences never count.
pub fn article_title(markdown: &str) -> Option<&str> {
    parse_document(markdown)
        .blocks
        .into_iter()
        .find(|b| b.kind == BlockKind::Heading { level: 1 })
        .and_then(|b| b.lines.first().map(|line| line.slice(markdown).trim()))
        .filter(|title| !title.is_empty())
}

fn write_stdout(text: &str) -> Result<()> {
    let mut out = std::io::stdout().lock();
    out.write_all(text.as_bytes())?;
    if !text.ends_with('\n') {
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}
