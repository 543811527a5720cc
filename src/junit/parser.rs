//! Event-driven JUnit XML reader
//!
//! Suite-level totals come from `testsuite` attributes; categories and
//! failure details come from walking individual `testcase` elements. The two
//! are sourced independently and are not reconciled.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::fs;
use std::io;
use std::path::Path;

use super::category::{CategoryCounts, TestCategory};
use super::stats::{FailureDetail, SuiteTotals, TestStatistics};
use crate::config::ReportDefaults;

/// Error types for JUnit parsing
#[derive(Debug, thiserror::Error)]
pub enum JunitError {
    #[error("Failed to read report: {0}")]
    IoError(#[from] io::Error),

    #[error("Malformed XML at byte {position}: {source}")]
    XmlError {
        position: usize,
        source: quick_xml::Error,
    },

    #[error("Invalid value {value:?} for attribute '{attribute}'")]
    InvalidAttribute { attribute: String, value: String },

    #[error("Malformed attribute on <{element}>: {reason}")]
    MalformedAttribute { element: String, reason: String },

    #[error("Test counts overflow a 64-bit integer")]
    CountOverflow,

    #[error("Malformed document: {0}")]
    MalformedDocument(String),
}

/// Parse a JUnit report from disk
pub fn parse_junit_file(
    path: &Path,
    defaults: &ReportDefaults,
) -> Result<TestStatistics, JunitError> {
    let xml = fs::read_to_string(path)?;
    parse_junit_str(&xml, defaults)
}

/// Parse a JUnit report, logging and swallowing any error.
///
/// Returns `None` when no statistics are available.
pub fn load_test_statistics(path: &Path, defaults: &ReportDefaults) -> Option<TestStatistics> {
    match parse_junit_file(path, defaults) {
        Ok(stats) => {
            tracing::debug!(
                path = %path.display(),
                total = stats.total,
                failed = stats.failed,
                "Parsed JUnit XML"
            );
            Some(stats)
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), "Error parsing JUnit XML: {}", e);
            None
        }
    }
}

/// Parse a JUnit report held in memory
pub fn parse_junit_str(xml: &str, defaults: &ReportDefaults) -> Result<TestStatistics, JunitError> {
    let mut reader = Reader::from_reader(xml.as_bytes());
    reader.trim_text(true);

    let mut walker = ReportWalker::default();
    let mut buf = Vec::new();

    loop {
        let event = reader
            .read_event_into(&mut buf)
            .map_err(|source| JunitError::XmlError {
                position: reader.buffer_position(),
                source,
            })?;

        match event {
            Event::Start(tag) => {
                let frame = walker.open(&tag)?;
                walker.stack.push(frame);
            }
            Event::Empty(tag) => {
                walker.open(&tag)?;
            }
            Event::End(_) => {
                walker.stack.pop();
            }
            Event::Text(_) | Event::CData(_) if walker.stack.is_empty() => {
                return Err(JunitError::MalformedDocument(
                    "text outside the root element".to_string(),
                ));
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if !walker.root_seen {
        return Err(JunitError::MalformedDocument("no root element".to_string()));
    }
    if !walker.stack.is_empty() {
        return Err(JunitError::MalformedDocument(
            "unexpected end of document".to_string(),
        ));
    }

    walker.finish(defaults)
}

/// What an open element means to the walk
#[derive(Debug, Clone, Copy)]
enum Frame {
    Suite(usize),
    Case { suite: usize, case: usize },
    Other,
}

#[derive(Debug, Default)]
struct FailureMarker {
    message: Option<String>,
    failure_type: Option<String>,
}

#[derive(Debug)]
struct CaseRecord {
    classname: String,
    name: String,
    failure: Option<FailureMarker>,
}

#[derive(Debug, Default)]
struct ReportWalker {
    root_seen: bool,
    root_is_collection: bool,
    totals: SuiteTotals,
    /// Test cases per `testsuite`, indexed in document pre-order
    suites: Vec<Vec<CaseRecord>>,
    stack: Vec<Frame>,
}

impl ReportWalker {
    fn open(&mut self, tag: &BytesStart<'_>) -> Result<Frame, JunitError> {
        let qname = tag.name();
        let name = qname.as_ref();
        check_attributes(tag)?;

        let Some(parent) = self.stack.last().copied() else {
            return self.open_root(name, tag);
        };

        let frame = match (name, parent) {
            (b"testsuite", _) => {
                if self.root_is_collection && self.stack.len() == 1 {
                    self.totals = self
                        .totals
                        .checked_add(&suite_totals(tag)?)
                        .ok_or(JunitError::CountOverflow)?;
                }
                self.push_suite()
            }
            (b"testcase", Frame::Suite(suite)) => {
                let cases = &mut self.suites[suite];
                cases.push(CaseRecord {
                    classname: attribute(tag, b"classname")?.unwrap_or_default(),
                    name: attribute(tag, b"name")?.unwrap_or_default(),
                    failure: None,
                });
                Frame::Case {
                    suite,
                    case: cases.len() - 1,
                }
            }
            (b"failure", Frame::Case { suite, case }) => {
                let record = &mut self.suites[suite][case];
                if record.failure.is_none() {
                    record.failure = Some(FailureMarker {
                        message: attribute(tag, b"message")?,
                        failure_type: attribute(tag, b"type")?,
                    });
                }
                Frame::Other
            }
            _ => Frame::Other,
        };

        Ok(frame)
    }

    fn open_root(&mut self, name: &[u8], tag: &BytesStart<'_>) -> Result<Frame, JunitError> {
        if self.root_seen {
            return Err(JunitError::MalformedDocument(
                "content after the root element".to_string(),
            ));
        }
        self.root_seen = true;

        if name == b"testsuites" {
            self.root_is_collection = true;
            return Ok(Frame::Other);
        }

        // Any other root is read as a single suite
        self.totals = suite_totals(tag)?;
        if name == b"testsuite" {
            Ok(self.push_suite())
        } else {
            Ok(Frame::Other)
        }
    }

    fn push_suite(&mut self) -> Frame {
        self.suites.push(Vec::new());
        Frame::Suite(self.suites.len() - 1)
    }

    fn finish(self, defaults: &ReportDefaults) -> Result<TestStatistics, JunitError> {
        let mut categories = CategoryCounts::default();
        let mut failures = Vec::new();

        for case in self.suites.into_iter().flatten() {
            categories.record(TestCategory::classify(&case.classname));

            if let Some(marker) = case.failure {
                if failures.len() < defaults.max_failure_details {
                    failures.push(FailureDetail {
                        test: format!("{}.{}", case.classname, case.name),
                        message: marker
                            .message
                            .unwrap_or_else(|| defaults.missing_message.clone()),
                        failure_type: marker
                            .failure_type
                            .unwrap_or_else(|| defaults.missing_failure_type.clone()),
                    });
                }
            }
        }

        TestStatistics::from_parts(self.totals, categories, failures, defaults)
            .ok_or(JunitError::CountOverflow)
    }
}

fn suite_totals(tag: &BytesStart<'_>) -> Result<SuiteTotals, JunitError> {
    Ok(SuiteTotals {
        tests: int_attribute(tag, "tests")?,
        failures: int_attribute(tag, "failures")?,
        errors: int_attribute(tag, "errors")?,
        skipped: int_attribute(tag, "skipped")?,
        time: float_attribute(tag, "time")?,
    })
}

fn int_attribute(tag: &BytesStart<'_>, name: &str) -> Result<i64, JunitError> {
    match attribute(tag, name.as_bytes())? {
        None => Ok(0),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| invalid_attribute(name, value)),
    }
}

fn float_attribute(tag: &BytesStart<'_>, name: &str) -> Result<f64, JunitError> {
    match attribute(tag, name.as_bytes())? {
        None => Ok(0.0),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| invalid_attribute(name, value)),
    }
}

fn invalid_attribute(name: &str, value: String) -> JunitError {
    JunitError::InvalidAttribute {
        attribute: name.to_string(),
        value,
    }
}

fn attribute(tag: &BytesStart<'_>, name: &[u8]) -> Result<Option<String>, JunitError> {
    for attr in tag.attributes() {
        let attr = attr.map_err(|e| malformed_attribute(tag, e))?;
        if attr.key.as_ref() == name {
            let value = attr
                .unescape_value()
                .map_err(|e| malformed_attribute(tag, e))?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}

/// Reject elements whose attributes are not well-formed XML
fn check_attributes(tag: &BytesStart<'_>) -> Result<(), JunitError> {
    for attr in tag.attributes() {
        let attr = attr.map_err(|e| malformed_attribute(tag, e))?;
        attr.unescape_value()
            .map_err(|e| malformed_attribute(tag, e))?;
    }
    Ok(())
}

fn malformed_attribute(tag: &BytesStart<'_>, reason: impl std::fmt::Display) -> JunitError {
    JunitError::MalformedAttribute {
        element: String::from_utf8_lossy(tag.name().as_ref()).into_owned(),
        reason: reason.to_string(),
    }
}
