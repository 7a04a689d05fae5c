// ABOUTME: Deck conversion driver for Slideas sources
// ABOUTME: Discovers decks, skips fresh outputs, converts pages and writes Reveal.js markdown

use crate::config::{Config, ConvertOptions};
use crate::errors::{Result, SlideasError};
use crate::images::clean_image_params;
use crate::meta::Metadata;
use crate::page::process_page;
use crate::utils;
use log::{debug, error, info, warn};
use regex::Regex;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Separates pages, and the front matter from the first page.
pub const PAGE_SEPARATOR: &str = "\n---\n";

// `3.4-Functions.md`
static DECK_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\d+-.*\.md$").expect("deck name pattern is valid"));

/// Whether a file name follows the `<major>.<minor>-<Title>.md` convention.
pub fn is_deck_name(name: &str) -> bool {
    DECK_NAME_REGEX.is_match(name)
}

/// Convert a whole Slideas document to Reveal.js markdown.
pub fn convert_text(text: &str, options: &ConvertOptions) -> Result<String> {
    let text = text.replace("\r\n", "\n");
    // A separator on the very last line closes the final page rather than opening an empty one.
    let text = text.trim_end();
    let text = text.strip_suffix(PAGE_SEPARATOR.trim_end()).unwrap_or(text);
    let mut segments = text.split(PAGE_SEPARATOR);

    let front_matter = segments.next().unwrap_or_default();
    let mut output = Metadata::parse(front_matter).render(&options.theme);

    let pages = segments.filter(|page| !page.trim().is_empty());
    for (page_index, page) in pages.enumerate() {
        output.push_str(&process_page(page, page_index)?);
    }

    output.push_str(&options.closing_slide);
    Ok(clean_image_params(&output).into_owned())
}

/// Output path for a source deck: same stem, new extension, in `output_dir`.
pub fn output_path_for(source: &Path, output_dir: &Path, extension: &str) -> PathBuf {
    // Not `with_extension`: deck stems such as `3.4-Functions` contain a dot.
    let stem = source.file_stem().unwrap_or(source.as_os_str());
    output_dir.join(format!("{}.{}", stem.to_string_lossy(), extension))
}

/// A deck needs converting unless its output exists and is strictly newer.
pub fn needs_conversion(source: &Path, output: &Path) -> Result<bool> {
    let source_time = utils::modified_time(source)?
        .ok_or_else(|| SlideasError::PathNotFoundError(source.to_path_buf()))?;
    Ok(match utils::modified_time(output)? {
        Some(output_time) => output_time <= source_time,
        None => true,
    })
}

/// Write converted text, removing the file again if the write fails part way.
pub fn write_output(path: &Path, content: &str) -> Result<()> {
    utils::ensure_parent_directory_exists(path)?;

    let result = fs::File::create(path).and_then(|file| {
        let mut writer = BufWriter::new(file);
        writer.write_all(content.as_bytes())?;
        writer.flush()
    });

    if let Err(e) = result {
        // A truncated output must not look newer than its source.
        if let Err(remove_err) = fs::remove_file(path) {
            warn!("Failed to remove partial output {:?}: {}", path, remove_err);
        }
        return Err(e.into());
    }
    Ok(())
}

/// Convert a single source file to `output`, unconditionally.
pub fn convert_file(source: &Path, output: &Path, options: &ConvertOptions) -> Result<()> {
    utils::validate_file_exists(source)?;
    let text = fs::read_to_string(source)?;
    let converted = convert_text(&text, options)?;
    write_output(output, &converted)
}

/// What happened to one deck in a batch.
#[derive(Debug)]
pub enum Outcome {
    Converted(PathBuf),
    Skipped(PathBuf),
    Failed(SlideasError),
}

/// Per-document results of a batch run, in discovery order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub results: Vec<(PathBuf, Outcome)>,
}

impl BatchReport {
    pub fn converted(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Converted(_)))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Skipped(_)))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Failed(_)))
    }

    pub fn has_failures(&self) -> bool {
        self.failed() > 0
    }

    fn count(&self, pred: impl Fn(&Outcome) -> bool) -> usize {
        self.results.iter().filter(|(_, o)| pred(o)).count()
    }
}

/// Converts every deck in a source directory into an output directory.
#[derive(Debug, Clone)]
pub struct DeckConverter {
    pub source_dir: PathBuf,
    pub output_dir: PathBuf,
    pub extension: String,
    pub options: ConvertOptions,
    pub force: bool,
}

impl DeckConverter {
    pub fn from_config(config: &Config) -> Self {
        Self {
            source_dir: config.source_dir.clone(),
            output_dir: config.output_dir.clone(),
            extension: config.output_extension.clone(),
            options: config.convert_options(),
            force: false,
        }
    }

    /// Reconvert even when the output is newer than the source.
    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    /// Source decks in the source directory, sorted by name.
    pub fn discover(&self) -> Result<Vec<PathBuf>> {
        utils::validate_directory_exists(&self.source_dir)?;

        let pattern = format!(
            "{}/*.md",
            glob::Pattern::escape(&self.source_dir.to_string_lossy())
        );
        let mut decks: Vec<PathBuf> = glob::glob(&pattern)?
            .flatten()
            .filter(|path| {
                path.is_file()
                    && path
                        .file_name()
                        .map(|name| is_deck_name(&name.to_string_lossy()))
                        .unwrap_or(false)
            })
            .collect();
        decks.sort();
        debug!("Discovered {} decks in {:?}", decks.len(), self.source_dir);
        Ok(decks)
    }

    /// Convert one deck if its output is stale.
    pub fn convert_one(&self, source: &Path) -> Result<Outcome> {
        let output = output_path_for(source, &self.output_dir, &self.extension);
        if !self.force && !needs_conversion(source, &output)? {
            info!("Found recent converted copy of {:?}", source);
            return Ok(Outcome::Skipped(output));
        }

        info!("Converting {:?} -> {:?}", source, output);
        convert_file(source, &output, &self.options)?;
        Ok(Outcome::Converted(output))
    }

    /// Convert every stale deck. A failing deck is reported and the batch moves on.
    pub fn run(&self) -> Result<BatchReport> {
        utils::ensure_directory_exists(&self.output_dir)?;
        utils::validate_directory_writable(&self.output_dir)?;

        let mut report = BatchReport::default();
        for source in self.discover()? {
            let outcome = match self.convert_one(&source) {
                Ok(outcome) => outcome,
                Err(e) => {
                    let e = e.in_document(&source);
                    error!("{}", e);
                    Outcome::Failed(e)
                }
            };
            report.results.push((source, outcome));
        }

        info!(
            "Batch finished: {} converted, {} skipped, {} failed",
            report.converted(),
            report.skipped(),
            report.failed()
        );
        Ok(report)
    }
}
