use crate::config::OutputFormat;
use crate::error::Result;
use arrow::record_batch::RecordBatch;
use arrow::util::pretty::pretty_format_batches;
use serde_json::{json, Value};

/// One titled result set
#[derive(Debug, Clone)]
pub struct Section {
    pub title: String,
    pub batches: Vec<RecordBatch>,
}

impl Section {
    pub fn new(title: impl Into<String>, batches: Vec<RecordBatch>) -> Self {
        Self {
            title: title.into(),
            batches,
        }
    }

    pub fn row_count(&self) -> usize {
        self.batches.iter().map(|b| b.num_rows()).sum()
    }

    fn rows_json(&self) -> Result<Value> {
        let mut writer = arrow::json::ArrayWriter::new(Vec::new());
        let batches: Vec<&RecordBatch> = self.batches.iter().collect();
        writer.write_batches(&batches)?;
        writer.finish()?;

        let buffer = writer.into_inner();
        if buffer.is_empty() {
            return Ok(Value::Array(vec![]));
        }
        Ok(serde_json::from_slice(&buffer)?)
    }
}

/// Ordered sections of demo output
#[derive(Debug, Clone, Default)]
pub struct Report {
    sections: Vec<Section>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, section: Section) {
        self.sections.push(section);
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.title == title)
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Table => self.render_table(),
            OutputFormat::Json => self.render_json(),
        }
    }

    fn render_table(&self) -> Result<String> {
        let mut out = String::new();
        for section in &self.sections {
            out.push_str(&format!("=== {} ===\n", section.title));
            if section.row_count() == 0 {
                out.push_str("(no rows)\n");
            } else {
                out.push_str(&pretty_format_batches(&section.batches)?.to_string());
                out.push('\n');
            }
            out.push('\n');
        }
        Ok(out)
    }

    fn render_json(&self) -> Result<String> {
        let sections = self
            .sections
            .iter()
            .map(|s| Ok(json!({ "title": s.title, "rows": s.rows_json()? })))
            .collect::<Result<Vec<Value>>>()?;

        let mut out = serde_json::to_string_pretty(&Value::Array(sections))?;
        out.push('\n');
        Ok(out)
    }
}
