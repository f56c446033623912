use std::io;

use serde::Serialize;

use crate::{
    draft::Draft,
    error::Result,
    fmt::{DraftContext, FormatWriter},
};

/// Wraps a `std::io::Write` object to write a draft as a single JSON object
///
/// # Example
///
/// ```no_run
/// # use std::io::{stdout, BufWriter};
/// # use release_draft::fmt::JsonWriter;
/// let out = stdout();
/// let mut out_buf = BufWriter::new(out.lock());
/// let mut writer = JsonWriter::new(&mut out_buf);
/// ```
pub struct JsonWriter<'a>(&'a mut dyn io::Write);

impl<'a> JsonWriter<'a> {
    pub fn new<T: io::Write>(writer: &'a mut T) -> JsonWriter<'a> { JsonWriter(writer) }
}

#[derive(Serialize)]
struct JsonDraft<'a> {
    #[serde(flatten)]
    context: &'a DraftContext,
    #[serde(flatten)]
    draft: &'a Draft,
}

impl<'a> FormatWriter for JsonWriter<'a> {
    fn write_draft(&mut self, context: &DraftContext, draft: &Draft) -> Result<()> {
        serde_json::to_writer_pretty(&mut *self.0, &JsonDraft { context, draft })?;
        writeln!(self.0)?;
        self.0.flush().map_err(Into::into)
    }
}
