use std::io;

use crate::{
    draft::{Bucket, Draft, Kind, Platform},
    error::Result,
    fmt::{DraftContext, FormatWriter},
};

/// Wraps a `std::io::Write` object to write a draft in a Markdown format.
///
/// Commit titles are written verbatim, without any escaping.
///
/// # Example
///
/// ```no_run
/// # use std::fs::File;
/// # use release_draft::{Draft, fmt::{DraftContext, FormatWriter, MarkdownWriter}};
/// let context = DraftContext {
///     project: "React Native".into(),
///     version: "0.22-stable".into(),
///     compare_url: "https://github.com/facebook/react-native/compare/0.21-stable...0.22-stable".into(),
///     total_commits: 0,
/// };
///
/// let mut file = File::create("draft.md").unwrap();
/// let mut writer = MarkdownWriter::new(&mut file);
/// writer.write_draft(&context, &Draft::default()).unwrap();
/// ```
pub struct MarkdownWriter<'a>(&'a mut dyn io::Write);

impl<'a> MarkdownWriter<'a> {
    /// Creates a new instance of the `MarkdownWriter` struct using a
    /// `std::io::Write` object.
    pub fn new<T: io::Write + 'a>(writer: &'a mut T) -> MarkdownWriter<'a> {
        MarkdownWriter(writer)
    }

    fn write_intro(&mut self, ctx: &DraftContext) -> Result<()> {
        // the contributor count is left for the release manager to fill in
        write!(
            self.0,
            "Thanks to X contributors who put [{} commits]({}) into **{} {}**!\n\n",
            ctx.total_commits, ctx.compare_url, ctx.project, ctx.version
        )
        .map_err(Into::into)
    }

    /// Writes a heading followed by one line per entry
    fn write_lines(&mut self, heading: &str, lines: &[String]) -> Result<()> {
        write!(self.0, "{heading}\n\n")?;
        for line in lines {
            writeln!(self.0, "{line}")?;
        }
        Ok(())
    }

    fn write_platform(&mut self, platform: Platform, bucket: &Bucket) -> Result<()> {
        match platform {
            // core changes are the top level sections of the notes
            Platform::Core => {
                self.write_lines("## New features", bucket.lines(Kind::Feature))?;
                writeln!(self.0)?;
                self.write_lines("## Bug fixes", bucket.lines(Kind::Bug))
            }
            _ => {
                write!(self.0, "\n## {}\n\n", platform.title())?;
                self.write_lines("### New features", bucket.lines(Kind::Feature))?;
                writeln!(self.0)?;
                self.write_lines("### Bug fixes", bucket.lines(Kind::Bug))
            }
        }
    }
}

impl<'a> FormatWriter for MarkdownWriter<'a> {
    fn write_draft(&mut self, context: &DraftContext, draft: &Draft) -> Result<()> {
        self.write_intro(context)?;

        for (platform, bucket) in draft.sections() {
            self.write_platform(platform, bucket)?;
        }

        if !draft.unclassified.is_empty() {
            writeln!(self.0)?;
            self.write_lines("## Unclassified", &draft.unclassified)?;
        }

        self.0.flush().map_err(Into::into)
    }
}
