use crate::error::CollectError;
use crate::options::CollectOptions;
use crate::output::write_block;
use crate::types::{CollectReport, FileBlock, FileContent};
use ignore::WalkBuilder;
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
#[cfg(feature = "logging")]
use tracing;
struct Matched {
    path: PathBuf,
    relative_path: String,
}
impl Matched {
    fn read(self) -> FileBlock {
        let content = read_file_content(&self.path);
        FileBlock {
            path: self.path,
            relative_path: self.relative_path,
            content,
        }
    }
}
struct Walker {
    inner: ignore::Walk,
    root: PathBuf,
    suffixes: Vec<String>,
}
impl Walker {
    fn new(options: &CollectOptions) -> Result<Self, CollectError> {
        check_root(&options.root)?;
        let mut builder = WalkBuilder::new(&options.root);
        builder
            .standard_filters(false)
            .follow_links(options.follow_links)
            .sort_by_file_name(|a, b| a.cmp(b));
        if !options.exclude_dirs.is_empty() {
            let mut glob_builder = globset::GlobSetBuilder::new();
            for pattern in &options.exclude_dirs {
                let glob = globset::Glob::new(pattern).map_err(|e| {
                    CollectError::Walk(format!("Invalid exclusion pattern '{}': {}", pattern, e))
                })?;
                glob_builder.add(glob);
            }
            let matcher = glob_builder
                .build()
                .map_err(|e| CollectError::Walk(format!("Failed to build glob set: {}", e)))?;
            // The root itself is always walked, whatever its name.
            builder.filter_entry(move |entry| {
                let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
                !(is_dir && entry.depth() > 0 && matcher.is_match(entry.file_name()))
            });
        }
        Ok(Self {
            inner: builder.build(),
            root: options.root.clone(),
            suffixes: options.suffixes.clone(),
        })
    }
    fn matches_suffix(&self, name: &OsStr) -> bool {
        matches_suffix(&name.to_string_lossy(), &self.suffixes)
    }
}
impl Iterator for Walker {
    type Item = Result<Matched, ignore::Error>;
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(e) => return Some(Err(e)),
            };
            if !is_file_candidate(&entry) || !self.matches_suffix(entry.file_name()) {
                continue;
            }
            let path = entry.into_path();
            let relative_path = relative_label(&self.root, &path);
            return Some(Ok(Matched {
                path,
                relative_path,
            }));
        }
    }
}
fn check_root(root: &Path) -> Result<(), CollectError> {
    match fs::metadata(root) {
        Ok(metadata) if metadata.is_dir() => Ok(()),
        Ok(_) => Err(CollectError::NotADirectory(root.to_path_buf())),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(CollectError::RootNotFound(root.to_path_buf()))
        }
        Err(e) => Err(CollectError::io(root, e)),
    }
}
/// Regular files and symlinks that do not resolve to a directory. A dangling
/// link is kept so the read failure ends up in its block.
fn is_file_candidate(entry: &ignore::DirEntry) -> bool {
    match entry.file_type() {
        Some(ft) if ft.is_file() => true,
        Some(ft) if ft.is_symlink() => !entry.path().is_dir(),
        _ => false,
    }
}
/// Plain suffix test; `bar.JSX` does not match `.jsx`.
fn matches_suffix(name: &str, suffixes: &[String]) -> bool {
    suffixes.iter().any(|suffix| name.ends_with(suffix.as_str()))
}
/// Root-relative path with components joined by `/` on every platform.
fn relative_label(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
/// Progress goes to stdout on a best-effort basis; a closed or full stdout
/// never aborts the run.
fn report_progress(relative_path: &str) {
    if let Err(_e) = writeln!(io::stdout().lock(), "Processing: {}", relative_path) {
        #[cfg(feature = "logging")]
        tracing::warn!("Failed to write progress line: {}", _e);
    }
}
fn read_file_content(path: &Path) -> FileContent {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            #[cfg(feature = "logging")]
            tracing::debug!("Failed to read {}: {}", path.display(), e);
            return FileContent::ReadError(e.to_string());
        }
    };
    match String::from_utf8(bytes) {
        Ok(text) => FileContent::Content(text),
        Err(e) => {
            #[cfg(feature = "logging")]
            tracing::debug!("Invalid UTF-8 in {}: {}", path.display(), e);
            FileContent::ReadError(e.to_string())
        }
    }
}
/// Collects every matching file under `root` into `output` using the default
/// suffixes and exclusions.
pub fn collect(
    root: impl Into<PathBuf>,
    output: impl Into<PathBuf>,
) -> Result<CollectReport, CollectError> {
    let options = CollectOptions {
        root: root.into(),
        output: output.into(),
        ..Default::default()
    };
    collect_with(options)
}
/// Runs a collection and writes the artifact to `options.output`.
///
/// The root is validated before the output is created, so a missing root
/// leaves any existing artifact untouched.
pub fn collect_with(options: CollectOptions) -> Result<CollectReport, CollectError> {
    #[cfg(feature = "logging")]
    tracing::debug!(
        "Collecting from {} into {}",
        options.root.display(),
        options.output.display()
    );
    let walker = Walker::new(&options)?;
    let file = File::create(&options.output).map_err(|e| CollectError::io(&options.output, e))?;
    let mut report = write_blocks(walker, &options, BufWriter::new(file))?;
    report.output = Some(options.output);
    Ok(report)
}
/// Writes the blocks into `out` instead of a file. `options.output` is only
/// used to label write errors.
pub fn collect_into<W: Write>(
    options: &CollectOptions,
    out: W,
) -> Result<CollectReport, CollectError> {
    let walker = Walker::new(options)?;
    write_blocks(walker, options, out)
}
fn write_blocks<W: Write>(
    walker: Walker,
    options: &CollectOptions,
    mut out: W,
) -> Result<CollectReport, CollectError> {
    let mut report = CollectReport::default();
    for item in walker {
        let matched = match item {
            Ok(matched) => matched,
            Err(e) => {
                #[cfg(feature = "logging")]
                tracing::warn!("Skipping unreadable entry: {}", e);
                report.walk_errors.push(e.to_string());
                continue;
            }
        };
        if options.progress {
            report_progress(&matched.relative_path);
        }
        let block = matched.read();
        write_block(&mut out, &block).map_err(|e| CollectError::io(&options.output, e))?;
        if block.content.is_error() {
            report.read_errors += 1;
        }
        report.files.push(block.relative_path);
    }
    out.flush()
        .map_err(|e| CollectError::io(&options.output, e))?;
    #[cfg(feature = "logging")]
    tracing::debug!(
        "Wrote {} blocks ({} read errors)",
        report.files.len(),
        report.read_errors
    );
    Ok(report)
}
/// Walks and reads matching files one at a time without writing anything.
#[cfg(feature = "streaming")]
pub struct CollectStream {
    walker: Walker,
}
#[cfg(feature = "streaming")]
impl CollectStream {
    pub fn new(options: CollectOptions) -> Result<Self, CollectError> {
        let walker = Walker::new(&options)?;
        Ok(Self { walker })
    }
}
#[cfg(feature = "streaming")]
impl Iterator for CollectStream {
    type Item = Result<FileBlock, CollectError>;
    fn next(&mut self) -> Option<Self::Item> {
        let item = match self.walker.next()? {
            Ok(matched) => Ok(matched.read()),
            Err(e) => Err(CollectError::Walk(e.to_string())),
        };
        Some(item)
    }
}
