//! Word vector line filtering.
//!
//! Every line whose leading token is a dictionary word is dropped, and that word is removed from the dictionary:
//! each word is expected to match at most one line, and a smaller tree makes upcoming searches faster.
//! Other lines are copied verbatim.
use std::io::{BufRead, Write};

use log::{debug, info};

use crate::{
    dictionary::WordSet,
    error::Error,
    filtering::{fold_case, leading_token, Filter, NumericToken},
};

/// Output is flushed every `FLUSH_INTERVAL` checked lines.
pub const FLUSH_INTERVAL: usize = 1000;

/// What happens to a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Keep,
    /// Removed by the numeric rule. The dictionary is not consulted.
    Numeric,
    /// Removed because its token was (and no longer is) in the dictionary.
    Dictionary,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterReport {
    pub checked: usize,
    pub kept: usize,
    pub removed_numeric: usize,
    pub removed_dictionary: usize,
}

impl FilterReport {
    /// Number of removed word vectors.
    pub fn removed(&self) -> usize {
        self.removed_numeric + self.removed_dictionary
    }

    fn record(&mut self, verdict: Verdict) {
        self.checked += 1;
        match verdict {
            Verdict::Keep => self.kept += 1,
            Verdict::Numeric => self.removed_numeric += 1,
            Verdict::Dictionary => self.removed_dictionary += 1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LineFilter {
    numeric: Option<NumericToken>,
    flush_interval: usize,
}

impl LineFilter {
    /// `numeric` enables the numeric rule.
    pub fn new(numeric: Option<NumericToken>) -> Self {
        Self {
            numeric,
            flush_interval: FLUSH_INTERVAL,
        }
    }

    /// Use a custom flush interval. An interval of 0 is treated as 1.
    pub fn with_flush_interval(mut self, flush_interval: usize) -> Self {
        self.flush_interval = flush_interval.max(1);
        self
    }

    /// Decides the fate of `line` (without its line terminator),
    /// removing the matched word from `dictionary` on a hit.
    pub fn classify(&self, dictionary: &mut WordSet, line: &[u8]) -> Verdict {
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        let token = fold_case(leading_token(line));

        if self.numeric.detect(token.as_str()) {
            return Verdict::Numeric;
        }

        if dictionary.remove(&token) {
            Verdict::Dictionary
        } else {
            Verdict::Keep
        }
    }

    /// Streams `input` into `output`, dropping removable lines.
    ///
    /// Kept lines are written back followed by `\n`.
    /// `output` is flushed periodically and once the input is exhausted.
    pub fn run<R, W>(
        &self,
        dictionary: &mut WordSet,
        mut input: R,
        output: &mut W,
    ) -> Result<FilterReport, Error>
    where
        R: BufRead,
        W: Write,
    {
        let mut report = FilterReport::default();
        let mut line = Vec::new();

        loop {
            line.clear();
            if input.read_until(b'\n', &mut line)? == 0 {
                break;
            }
            if line.last() == Some(&b'\n') {
                line.pop();
            }

            let verdict = self.classify(dictionary, &line);
            if verdict == Verdict::Keep {
                output.write_all(&line)?;
                output.write_all(b"\n")?;
            }
            report.record(verdict);

            if report.checked % self.flush_interval == 0 {
                debug!("{} lines checked, flushing", report.checked);
                output.flush()?;
            }
        }
        output.flush()?;

        info!(
            "{} lines checked, {} removed ({} numeric), {} dictionary words left",
            report.checked,
            report.removed(),
            report.removed_numeric,
            dictionary.len()
        );
        Ok(report)
    }
}
